//! Property tests against the public API. Each module drives a `Tree` and
//! checks it against a model from the standard library.

mod conversion;
mod tree;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Clone, Debug)]
pub enum Op {
    /// Insert the word into the tree
    Insert(String),
    /// Look the word up
    Retrieve(String),
    /// Move everything to a buffer and back
    Rebuild,
}

/// A short word from a tiny alphabet so lookups often hit.
fn word(g: &mut Gen) -> String {
    let len = *g.choose(&[1, 2, 3]).unwrap();
    (0..len)
        .map(|_| *g.choose(&['a', 'b', 'c', 'd']).unwrap())
        .collect()
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(word(g)),
            1 => Op::Retrieve(word(g)),
            2 => Op::Rebuild,
            _ => unreachable!(),
        }
    }
}
