//! Iterators over an [`OrderedTree`] in the four standard traversal
//! orders.
//!
//! All of these drive the traversal with an explicit stack (or queue)
//! instead of recursion, so iterating a degenerate, height-`n` tree uses
//! heap space proportional to the height but constant call-stack space.
//!
//! [`OrderedTree`]: crate::OrderedTree

use std::collections::VecDeque;

use crate::tree::{Link, Node};

/// Pre-order iterator: each node is yielded before its left subtree, and
/// the left subtree before the right. Created by [`iter`], and the order
/// used when iterating `&tree` or a consumed tree.
///
/// [`iter`]: crate::OrderedTree::iter
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        // Right pushed first so the left subtree is processed first.
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.value)
    }
}

/// In-order iterator: left subtree, node, right subtree. Yields the
/// stored values in ascending order. Created by [`inorder`].
///
/// [`inorder`]: crate::OrderedTree::inorder
pub struct Inorder<'a, T> {
    /// Nodes whose left subtree has been descended but not yet yielded.
    stack: Vec<&'a Node<T>>,
    /// The subtree still to descend before the next yield.
    current: Option<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some(node) = self.current {
            self.current = node.left.as_deref();
            self.stack.push(node);
        }
        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        Some(&node.value)
    }
}

/// Post-order iterator: left subtree, right subtree, then the node.
/// Created by [`postorder`].
///
/// [`postorder`]: crate::OrderedTree::postorder
pub struct Postorder<'a, T> {
    /// Pending nodes; the flag records whether a node's children have
    /// already been pushed, meaning it is ready to be yielded.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().map(|node| (node, false)).collect(),
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
        None
    }
}

/// Level-order iterator: breadth first, shallower nodes before deeper
/// ones, left to right within a level. Created by [`levelorder`].
///
/// [`levelorder`]: crate::OrderedTree::levelorder
pub struct Levelorder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Levelorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Levelorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.queue.pop_front()?;
        if let Some(left) = node.left.as_deref() {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right.as_deref() {
            self.queue.push_back(right);
        }
        Some(&node.value)
    }
}

/// Owned pre-order iterator, created by consuming a tree with
/// `into_iter`. Nodes are freed as their values are yielded.
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let mut node = self.stack.pop()?;
        if let Some(right) = node.right.take() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.take() {
            self.stack.push(left);
        }
        Some(node.value)
    }
}
