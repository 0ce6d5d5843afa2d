use bintree::{Payload, SequenceBuffer, Tree};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and rebuilds we have the same words in both.
fn do_ops(ops: &[Op], tree: &mut Tree, set: &mut BTreeSet<String>) {
    for op in ops {
        match op {
            Op::Insert(word) => {
                let inserted = tree.insert(&Payload::from(word.as_str()));
                assert_eq!(inserted, set.insert(word.clone()));
            }
            Op::Retrieve(word) => {
                let found = tree.retrieve(&Payload::from(word.as_str()));
                assert_eq!(found.map(|p| p.value()), set.get(word));
            }
            Op::Rebuild => {
                let mut buffer = SequenceBuffer::new();
                tree.to_sorted_sequence(&mut buffer).unwrap();
                tree.from_sorted_sequence(&mut buffer).unwrap();
            }
        }
    }
}

fn tree_of(xs: &[String]) -> Tree {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(&Payload::from(x.as_str()));
    }
    tree
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len() && tree.iter().map(|p| p.value()).eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<String>) -> bool {
        let tree = tree_of(&xs);

        xs.iter().all(|x| tree.retrieve(&Payload::from(x.as_str())).is_some())
            && xs.iter().all(|x| tree.depth(&Payload::from(x.as_str())) > 0)
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<String>, nots: Vec<String>) -> bool {
        let tree = tree_of(&xs);
        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| {
            let target = Payload::from(x.as_str());
            tree.retrieve(&target).is_none() && tree.depth(&target) == 0
        })
    }
}

quickcheck::quickcheck! {
    fn duplicates_leave_size_unchanged(xs: Vec<String>) -> bool {
        let mut tree = tree_of(&xs);
        let len = tree.len();

        xs.iter().all(|x| !tree.insert(&Payload::from(x.as_str()))) && tree.len() == len
    }
}

quickcheck::quickcheck! {
    fn equality_is_reflexive_and_symmetric(xs: Vec<String>, ys: Vec<String>) -> bool {
        let a = tree_of(&xs);
        let b = tree_of(&ys);

        a == tree_of(&xs) && (a == b) == (b == a) && (a != b) == !(a == b)
    }
}

quickcheck::quickcheck! {
    fn clone_from_copies(xs: Vec<String>, ys: Vec<String>) -> bool {
        let source = tree_of(&xs);
        let mut target = tree_of(&ys);
        target.clone_from(&source);
        let again = target.clone();

        target == source && again == source
    }
}

quickcheck::quickcheck! {
    fn make_empty_forgets_everything(xs: Vec<String>) -> bool {
        let mut tree = tree_of(&xs);
        tree.make_empty();

        tree.is_empty()
            && xs.iter().all(|x| {
                let target = Payload::from(x.as_str());
                tree.retrieve(&target).is_none() && tree.depth(&target) == 0
            })
    }
}
