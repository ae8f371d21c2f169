//! This crate exposes an ordered-set container backed by a Binary Search
//! Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores some sort of
//! value (the value that was inserted, for example) and will sometimes
//! have child `Node`s. The most important invariants of the BST in this
//! crate are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than *or equal to* its own value. Ties go right, so
//!    duplicate values are stored rather than rejected.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! Unlike an AVL or red-black tree, the tree here never balances itself on
//! insertion or deletion. Its shape depends entirely on the insertion order,
//! and balance is restored only when [`OrderedTree::rebalance`] is called
//! explicitly.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod tree;

pub use error::NotFoundError;
pub use tree::OrderedTree;

#[cfg(test)]
mod test;
