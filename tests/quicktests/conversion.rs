use bintree::{Payload, SequenceBuffer, SequenceError, Tree};

/// Smallest possible height for a binary tree with `len` nodes.
fn min_height(len: usize) -> usize {
    let mut height = 0;
    while (1usize << height) - 1 < len {
        height += 1;
    }
    height
}

fn tree_of(xs: &[u16]) -> Tree<u16> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(&Payload::new(*x));
    }
    tree
}

#[test]
fn min_height_matches_full_trees() {
    assert_eq!(min_height(0), 0);
    assert_eq!(min_height(1), 1);
    assert_eq!(min_height(3), 2);
    assert_eq!(min_height(4), 3);
    assert_eq!(min_height(7), 3);
}

#[test]
fn round_trip_keeps_driver_data() {
    let mut tree: Tree = Tree::new();
    for word in ["m", "e", "t", "and", "not", "sss"] {
        tree.insert(&Payload::from(word));
    }
    let mut buffer = SequenceBuffer::new();

    assert_eq!(tree.to_sorted_sequence(&mut buffer), Ok(6));
    assert_eq!(buffer.to_string(), "and e m not sss t");
    assert_eq!(tree.from_sorted_sequence(&mut buffer), Ok(6));
    assert_eq!(tree.to_string(), "and e m not sss t");
    assert_eq!(tree.depth(&Payload::from("m")), 1);
    assert_eq!(tree.height(), 3);
}

#[test]
fn overflow_is_reported_not_truncated() {
    let xs: Vec<u16> = (0..150).collect();
    let mut tree = tree_of(&xs);
    let mut buffer = SequenceBuffer::new();

    assert_eq!(
        tree.to_sorted_sequence(&mut buffer),
        Err(SequenceError::CapacityExceeded {
            needed: 150,
            capacity: 100
        })
    );
    assert_eq!(tree.len(), 150);

    let mut big = SequenceBuffer::with_capacity(150);
    assert_eq!(tree.to_sorted_sequence(&mut big), Ok(150));
}

quickcheck::quickcheck! {
    fn round_trip_preserves_order(xs: Vec<u16>) -> bool {
        let mut tree = tree_of(&xs);
        let before: Vec<u16> = tree.iter().map(|p| *p.value()).collect();

        let mut buffer = SequenceBuffer::with_capacity(xs.len());
        let moved = tree.to_sorted_sequence(&mut buffer).unwrap();
        let drained = tree.is_empty() && buffer.len() == moved;
        tree.from_sorted_sequence(&mut buffer).unwrap();
        let after: Vec<u16> = tree.iter().map(|p| *p.value()).collect();

        drained && buffer.is_empty() && before == after
    }
}

quickcheck::quickcheck! {
    fn conversion_is_minimum_height(xs: Vec<u16>) -> bool {
        let mut tree = tree_of(&xs);
        let len = tree.len();

        let mut buffer = SequenceBuffer::with_capacity(len);
        tree.to_sorted_sequence(&mut buffer).unwrap();
        tree.from_sorted_sequence(&mut buffer).unwrap();

        tree.height() == min_height(len) && tree.len() == len
    }
}

quickcheck::quickcheck! {
    fn conversion_into_existing_tree(xs: Vec<u16>, ys: Vec<u16>) -> bool {
        let mut source = tree_of(&xs);
        let mut target = tree_of(&ys);
        let expected: Vec<u16> = source.iter().map(|p| *p.value()).collect();

        let mut buffer = SequenceBuffer::with_capacity(source.len());
        source.to_sorted_sequence(&mut buffer).unwrap();
        target.from_sorted_sequence(&mut buffer).unwrap();

        target.iter().map(|p| *p.value()).eq(expected)
    }
}
