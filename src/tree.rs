//! An unbalanced Binary Search Tree of [`Payload`]s with single-owner nodes.
//!
//! Insertion never rebalances, so the shape of the tree depends entirely on
//! insertion order. A balanced tree can be rebuilt at any time by moving the
//! payloads out into a [`SequenceBuffer`] with
//! [`to_sorted_sequence`][Tree::to_sorted_sequence] and back in with
//! [`from_sorted_sequence`][Tree::from_sorted_sequence].
//!
//! All traversals are recursive, so their stack usage grows with the height of
//! the tree. Inserting already-sorted input produces a tree as tall as it has
//! elements.
//!
//! # Examples
//!
//! ```
//! use bintree::{Payload, SequenceBuffer, Tree};
//!
//! let mut tree = Tree::new();
//! for value in ["m", "e", "t", "and", "not", "sss"] {
//!     assert!(tree.insert(&Payload::from(value)));
//! }
//!
//! // Duplicates are rejected.
//! assert!(!tree.insert(&Payload::from("e")));
//!
//! assert_eq!(tree.to_string(), "and e m not sss t");
//! assert_eq!(tree.depth(&Payload::from("m")), 1);
//! assert_eq!(tree.depth(&Payload::from("sss")), 4);
//! assert_eq!(tree.retrieve(&Payload::from("zzz")), None);
//!
//! // Move everything out and back in to balance the tree.
//! let mut buffer = SequenceBuffer::new();
//! tree.to_sorted_sequence(&mut buffer).unwrap();
//! assert!(tree.is_empty());
//!
//! tree.from_sorted_sequence(&mut buffer).unwrap();
//! assert!(buffer.is_empty());
//! assert_eq!(tree.to_string(), "and e m not sss t");
//! assert_eq!(tree.height(), 3);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io;

use tracing::{debug, trace};

use crate::error::SequenceError;
use crate::payload::Payload;
use crate::sequence::SequenceBuffer;

/// Written in place of the contents of an empty tree.
pub const EMPTY_TREE_NOTICE: &str = "-- tree is empty --";

/// Indentation per level in [`Tree::display_sideways`].
const SIDEWAYS_INDENT: &str = "    ";

type Link<T> = Option<Box<Node<T>>>;

/// How many nodes a rebuild kept from the old shape and how many it had to
/// allocate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct NodeCounts {
    reused: usize,
    allocated: usize,
}

impl NodeCounts {
    /// Takes `old` if there is one, otherwise allocates a node for `payload`.
    fn node_for<T>(&mut self, old: Link<T>, payload: Payload<T>) -> Box<Node<T>> {
        match old {
            Some(mut node) => {
                self.reused += 1;
                node.payload = payload;
                node
            }
            None => {
                self.allocated += 1;
                Node::boxed(payload)
            }
        }
    }
}

/// Two trees are equal when they have the same shape and equal payloads at
/// every position. Neither tree needs to satisfy the BST ordering.
#[derive(Debug, PartialEq, Eq)]
pub struct Tree<T = String> {
    root: Link<T>,
}

#[derive(Debug, PartialEq, Eq)]
struct Node<T> {
    // Fields drop in declaration order: children first, then the payload.
    left: Link<T>,
    right: Link<T>,
    payload: Payload<T>,
}

impl<T> Node<T> {
    fn boxed(payload: Payload<T>) -> Box<Self> {
        Box::new(Self {
            left: None,
            right: None,
            payload,
        })
    }

    fn insert(&mut self, payload: &Payload<T>) -> bool
    where
        T: Ord + Clone,
    {
        let child = match payload.cmp(&self.payload) {
            Ordering::Equal => return false,
            Ordering::Less => &mut self.left,
            Ordering::Greater => &mut self.right,
        };

        match child {
            Some(node) => node.insert(payload),
            None => {
                *child = Some(Node::boxed(payload.clone()));
                true
            }
        }
    }

    fn retrieve(&self, target: &Payload<T>) -> Option<&Payload<T>>
    where
        T: Ord,
    {
        let next = match target.cmp(&self.payload) {
            Ordering::Equal => return Some(&self.payload),
            Ordering::Less => &self.left,
            Ordering::Greater => &self.right,
        };
        next.as_ref()?.retrieve(target)
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        tree.assign(self);
        tree
    }

    /// Copies `source` into `self` reusing the nodes `self` already has. See
    /// [`Tree::assign`].
    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of payloads in the tree.
    pub fn len(&self) -> usize {
        fn count<T>(link: &Link<T>) -> usize {
            link.as_ref()
                .map_or(0, |node| 1 + count(&node.left) + count(&node.right))
        }
        count(&self.root)
    }

    /// Number of nodes on the longest path from the root to a leaf. An empty
    /// tree has height 0.
    pub fn height(&self) -> usize {
        fn height<T>(link: &Link<T>) -> usize {
            link.as_ref()
                .map_or(0, |node| 1 + height(&node.left).max(height(&node.right)))
        }
        height(&self.root)
    }

    /// Drops every node and payload.
    pub fn make_empty(&mut self) {
        self.root = None;
    }

    /// Drops every node but hands the payloads back to the caller, in
    /// ascending order for a valid BST.
    pub fn make_empty_keep_payloads(&mut self) -> Vec<Payload<T>> {
        let mut kept = Vec::new();
        release_in_order(self.root.take(), &mut |payload| kept.push(payload));
        kept
    }

    /// Adds a copy of `payload` to the tree.
    ///
    /// Returns `false`, leaving the tree untouched, if an equal payload is
    /// already present.
    pub fn insert(&mut self, payload: &Payload<T>) -> bool
    where
        T: Ord + Clone,
    {
        let inserted = match &mut self.root {
            Some(root) => root.insert(payload),
            None => {
                self.root = Some(Node::boxed(payload.clone()));
                true
            }
        };

        if !inserted {
            trace!("rejected duplicate payload");
        }
        inserted
    }

    /// Finds the stored payload equal to `target` using BST ordering.
    ///
    /// This only finds payloads in a tree that satisfies the BST invariant,
    /// which any tree built through [`insert`][Tree::insert] or
    /// [`from_sorted_sequence`][Tree::from_sorted_sequence] does.
    pub fn retrieve(&self, target: &Payload<T>) -> Option<&Payload<T>>
    where
        T: Ord,
    {
        self.root.as_ref()?.retrieve(target)
    }

    /// Depth of the node holding `target`: 1 for the root, 2 for its
    /// children and so on. Returns 0 when `target` is absent.
    ///
    /// This searches the whole tree (left subtree before right) rather than
    /// following BST ordering, so it works on any binary tree.
    pub fn depth(&self, target: &Payload<T>) -> usize
    where
        T: PartialEq,
    {
        fn depth<T: PartialEq>(link: &Link<T>, target: &Payload<T>) -> usize {
            let node = match link {
                Some(node) => node,
                None => return 0,
            };
            if node.payload == *target {
                return 1;
            }

            match depth(&node.left, target) {
                0 => match depth(&node.right, target) {
                    0 => 0,
                    found => found + 1,
                },
                found => found + 1,
            }
        }
        depth(&self.root, target)
    }

    /// Makes `self` a copy of `other`, node for node.
    ///
    /// Nodes that `self` already has at a position `other` also fills are
    /// kept and only have their payload overwritten. Nodes `other` has no
    /// counterpart for are dropped and missing ones are allocated.
    pub fn assign(&mut self, other: &Self)
    where
        T: Clone,
    {
        let mut counts = NodeCounts::default();
        self.root = copy_subtree(self.root.take(), &other.root, &mut counts);
        trace!(
            reused = counts.reused,
            allocated = counts.allocated,
            "tree assigned"
        );
    }

    /// Moves every payload into `buffer` in ascending order, leaving the
    /// tree empty. Returns how many payloads were moved.
    ///
    /// `buffer` must be empty and have at least [`len`][Tree::len] slots;
    /// otherwise nothing is moved and the tree is unchanged.
    pub fn to_sorted_sequence(
        &mut self,
        buffer: &mut SequenceBuffer<T>,
    ) -> Result<usize, SequenceError> {
        let occupied = buffer.len();
        if occupied > 0 {
            debug!(occupied, "refusing to fill a non-empty buffer");
            return Err(SequenceError::BufferNotEmpty { occupied });
        }

        let needed = self.len();
        let capacity = buffer.capacity();
        if needed > capacity {
            debug!(needed, capacity, "buffer too small for tree");
            return Err(SequenceError::CapacityExceeded { needed, capacity });
        }

        let slots = buffer.slots_mut();
        let mut next = 0;
        release_in_order(self.root.take(), &mut |payload| {
            slots[next] = Some(payload);
            next += 1;
        });

        debug!(moved = next, "tree converted to sorted sequence");
        Ok(next)
    }

    /// Moves the payloads of `buffer` into a balanced tree, replacing the
    /// current contents. Returns how many payloads were moved.
    ///
    /// The middle slot of each range becomes the root of its subtree,
    /// picking the lower of the two middles for even-length ranges, so a
    /// node with a single child always has it on the right. Existing nodes
    /// are reused where the new shape has a node in the same position.
    ///
    /// `buffer` must hold a single run of strictly ascending payloads
    /// starting at slot 0. Otherwise nothing is moved and the tree is
    /// unchanged. An empty buffer empties the tree.
    pub fn from_sorted_sequence(
        &mut self,
        buffer: &mut SequenceBuffer<T>,
    ) -> Result<usize, SequenceError>
    where
        T: Ord,
    {
        let run = buffer.sorted_run().map_err(|err| {
            debug!(%err, "rejected sorted sequence");
            err
        })?;

        let slots = &mut buffer.slots_mut()[..run];
        let mut counts = NodeCounts::default();
        self.root = build_balanced(self.root.take(), slots, &mut counts);

        debug!(
            moved = run,
            reused = counts.reused,
            allocated = counts.allocated,
            "sorted sequence converted to tree"
        );
        Ok(run)
    }

    /// Iterates over the payloads in order: left subtree, node, right subtree.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }

    /// Writes the payloads in order, space separated, followed by a newline.
    /// An empty tree writes [`EMPTY_TREE_NOTICE`] instead.
    pub fn display_linearized<W: io::Write>(&self, out: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        writeln!(out, "{}", self)
    }

    /// Writes the tree rotated a quarter turn anticlockwise: one node per
    /// line, right subtree above and left subtree below, indented by depth.
    /// An empty tree writes [`EMPTY_TREE_NOTICE`] instead.
    pub fn display_sideways<W: io::Write>(&self, out: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        fn sideways<T: fmt::Display, W: io::Write>(
            link: &Link<T>,
            level: usize,
            out: &mut W,
        ) -> io::Result<()> {
            if let Some(node) = link {
                sideways(&node.right, level + 1, out)?;
                writeln!(out, "{}{}", SIDEWAYS_INDENT.repeat(level), node.payload)?;
                sideways(&node.left, level + 1, out)?;
            }
            Ok(())
        }

        if self.is_empty() {
            return writeln!(out, "{}", EMPTY_TREE_NOTICE);
        }
        sideways(&self.root, 0, out)
    }
}

/// Feeds every payload to `sink` in order while dropping the nodes that held
/// them.
fn release_in_order<T, F>(link: Link<T>, sink: &mut F)
where
    F: FnMut(Payload<T>),
{
    if let Some(node) = link {
        let Node {
            left,
            right,
            payload,
        } = *node;
        release_in_order(left, sink);
        sink(payload);
        release_in_order(right, sink);
    }
}

/// Returns a copy of `src` built out of the nodes of `dst`. Anything left in
/// `dst` with no counterpart in `src` is dropped.
fn copy_subtree<T: Clone>(dst: Link<T>, src: &Link<T>, counts: &mut NodeCounts) -> Link<T> {
    let src = src.as_ref()?;
    let mut node = match dst {
        Some(mut node) => {
            counts.reused += 1;
            node.payload.clone_from(&src.payload);
            node
        }
        None => {
            counts.allocated += 1;
            Node::boxed(src.payload.clone())
        }
    };

    node.left = copy_subtree(node.left.take(), &src.left, counts);
    node.right = copy_subtree(node.right.take(), &src.right, counts);
    Some(node)
}

/// Returns a balanced tree holding the payloads of `slots`, built out of the
/// nodes of `dst`. Every slot is emptied.
fn build_balanced<T>(
    dst: Link<T>,
    slots: &mut [Option<Payload<T>>],
    counts: &mut NodeCounts,
) -> Link<T> {
    if slots.is_empty() {
        return None;
    }

    let mid = (slots.len() - 1) / 2;
    let (left, rest) = slots.split_at_mut(mid);
    let (middle, right) = rest.split_first_mut()?;
    let payload = middle.take()?;

    let mut node = counts.node_for(dst, payload);
    node.left = build_balanced(node.left.take(), left, counts);
    node.right = build_balanced(node.right.take(), right, counts);
    Some(node)
}

/// In-order iterator over the payloads of a [`Tree`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: &'a Link<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Payload<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.payload)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a Payload<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(EMPTY_TREE_NOTICE);
        }

        for (i, payload) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", payload)?;
        }
        Ok(())
    }
}
