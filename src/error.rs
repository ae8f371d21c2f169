//! Error types for tree operations.
//!
//! The only fallible operation in this crate is [`remove`]: removing an
//! item that was never added is a caller bug, not an expected miss. Every
//! other "not there" condition (`find`, `replace`, `successor`,
//! `predecessor`) is reported as `None` instead because a lookup may
//! legitimately miss.
//!
//! [`remove`]: crate::OrderedTree::remove

use thiserror::Error;

/// Returned by [`remove`] when the target item is not in the tree.
///
/// The tree is left completely unchanged when this is returned.
///
/// [`remove`]: crate::OrderedTree::remove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("item not found in tree")]
pub struct NotFoundError;
