//! Reading trees from text and running the demo report over them.
//!
//! The input is a stream of whitespace separated words. Each group of words
//! terminated by [`END_OF_GROUP`] describes one tree, inserted word by word in
//! the order read. Groups may span lines and a line may hold several groups.

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::error::DriverError;
use crate::payload::Payload;
use crate::sequence::SequenceBuffer;
use crate::tree::Tree;

/// The token closing a group.
pub const END_OF_GROUP: &str = "$$";

/// Payloads looked up in every tree by [`run`].
const PROBES: [&str; 3] = ["and", "not", "sss"];

/// Whitespace separated tokens of a line-oriented source.
pub struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    /// Tokenizes `input` lazily, one line at a time.
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_owned)),
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

/// How a group of tokens was closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupEnd {
    /// By an [`END_OF_GROUP`] token.
    Sentinel,
    /// By running out of input.
    Exhausted,
}

/// What [`build_tree`] did with one group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildOutcome {
    /// Tokens added to the tree.
    pub inserted: usize,
    /// Tokens already present, which were discarded.
    pub duplicates: usize,
    /// How the group ended.
    pub ended: GroupEnd,
}

/// Inserts the tokens of the next group into `tree`, writing each token read
/// (the closing [`END_OF_GROUP`] included) to `echo` followed by a space.
pub fn build_tree<I, W>(tree: &mut Tree, tokens: &mut I, echo: &mut W) -> io::Result<BuildOutcome>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    let mut outcome = BuildOutcome {
        inserted: 0,
        duplicates: 0,
        ended: GroupEnd::Exhausted,
    };

    for token in tokens {
        let token = token?;
        write!(echo, "{} ", token)?;
        if token == END_OF_GROUP {
            outcome.ended = GroupEnd::Sentinel;
            break;
        }

        // A rejected payload is dropped here; the tree only keeps copies.
        let payload = Payload::new(token);
        if tree.insert(&payload) {
            outcome.inserted += 1;
        } else {
            outcome.duplicates += 1;
        }
    }

    debug!(
        inserted = outcome.inserted,
        duplicates = outcome.duplicates,
        ended = ?outcome.ended,
        "read group"
    );
    Ok(outcome)
}

fn equality(equal: bool) -> &'static str {
    if equal {
        "equal"
    } else {
        "not equal"
    }
}

fn found(found: bool) -> &'static str {
    if found {
        "found"
    } else {
        "not found"
    }
}

/// Writes `label` and `value` padded so the values line up.
fn report<W: Write>(out: &mut W, label: &str, value: impl fmt::Display) -> io::Result<()> {
    writeln!(out, "{:<13}{}", label, value)
}

/// Runs the demo report over every complete group of `input`: prints each
/// tree, looks up a few payloads, exercises copying and equality, then
/// moves the tree through a buffer of `capacity` slots and back.
///
/// Returns how many groups were reported. A trailing group without an
/// [`END_OF_GROUP`] is echoed but not reported.
pub fn run<R, W>(input: R, out: &mut W, capacity: usize) -> Result<usize, DriverError>
where
    R: BufRead,
    W: Write,
{
    let probes: [Payload; 3] = PROBES.map(Payload::from);
    let mut tokens = Tokens::new(input);
    let mut tree = Tree::new();
    let mut copy = Tree::new();
    let mut dup = Tree::new();
    let mut buffer = SequenceBuffer::with_capacity(capacity);

    write!(out, "Initial data:\n  ")?;
    let mut outcome = build_tree(&mut tree, &mut tokens, out)?;
    writeln!(out)?;

    let first = tree.clone();
    dup.clone_from(&tree);

    let mut groups = 0;
    while outcome.ended == GroupEnd::Sentinel {
        groups += 1;
        info!(group = groups, size = tree.len(), height = tree.height(), "reporting tree");

        writeln!(out, "Tree Inorder:")?;
        tree.display_linearized(out)?;
        tree.display_sideways(out)?;

        for probe in &probes {
            let status = found(tree.retrieve(probe).is_some());
            writeln!(out, "Retrieve --> {}:  {}", probe, status)?;
        }
        for probe in &probes {
            writeln!(out, "Depth    --> {}:  {}", probe, tree.depth(probe))?;
        }

        copy.clone_from(&tree);
        report(out, "T == T2?", equality(tree == copy))?;
        report(out, "T != first?", equality(tree == first))?;
        report(out, "T == dup?", equality(tree == dup))?;
        dup.clone_from(&tree);

        tree.to_sorted_sequence(&mut buffer)?;
        writeln!(out, "Tree ==> Array.\nArray should be full, Tree should be empty:")?;
        writeln!(out, "Array contents: {}", buffer)?;
        writeln!(out, "Tree contents: {}", tree)?;

        tree.from_sorted_sequence(&mut buffer)?;
        writeln!(out, "Array ==> Tree.\nArray should be empty, Tree should be full:")?;
        writeln!(out, "Array contents: {}", buffer)?;
        writeln!(out, "Tree contents: {}", tree)?;
        tree.display_sideways(out)?;

        tree.make_empty();
        buffer.clear();
        writeln!(out, "{}", "-".repeat(61))?;

        write!(out, "Initial data:\n  ")?;
        outcome = build_tree(&mut tree, &mut tokens, out)?;
        writeln!(out)?;
    }

    Ok(groups)
}
