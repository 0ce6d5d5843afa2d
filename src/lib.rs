//! An unbalanced Binary Search Tree container mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value (here a
//! [`Payload`]) and sometimes has child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). The [`Tree`] here never
//! rebalances on insert, so its height depends on insertion order: sorted
//! input yields a tree as tall as it has elements. Moving the payloads out
//! into a [`SequenceBuffer`] and back in rebuilds the tree with the smallest
//! possible height, `O(lg N)`. BSTs also naturally support sorted iteration
//! by visiting the left subtree, then the subtree root, then the right
//! subtree, which is what that conversion relies on.
//!
//! Some operations, such as [`Tree::depth`] and tree equality, do not rely on
//! the ordering invariants and work on any binary tree shape.
//!
//! ## Logging
//!
//! The library reports rejected duplicates and conversions through
//! [`tracing`] events. It never installs a subscriber; that is left to the
//! application (see the `bintree-driver` binary).

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod payload;
pub mod script;
pub mod sequence;
pub mod tree;

pub use error::{DriverError, SequenceError};
pub use payload::Payload;
pub use sequence::SequenceBuffer;
pub use tree::Tree;
