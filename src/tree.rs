//! An ordered-set BST with owned nodes. The tree never balances itself;
//! call [`OrderedTree::rebalance`] to restore a minimal-height shape.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.add(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Removing an item returns it.
//! let removed = tree.remove(&1);
//!
//! assert_eq!(removed, Ok(1));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::error::NotFoundError;
use crate::iter::{Inorder, IntoIter, Levelorder, Postorder, Preorder};

/// An owning child (or root) slot. `None` marks the empty spot below a leaf.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// The structural unit of the tree: one value and two owned child slots.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

/// A Binary Search Tree used as an ordered multiset. This can be used for
/// inserting, finding, and removing values, iterating in several orders,
/// and answering range/successor/predecessor queries.
///
/// Values that compare equal to an already stored value go into the right
/// subtree, so duplicates are kept.
///
/// The shape of the tree depends entirely on insertion order. Inserting a
/// sorted sequence degenerates into a linked list; [`rebalance`] rebuilds
/// the tree at minimal height on demand.
///
/// [`rebalance`]: OrderedTree::rebalance
#[derive(Clone, Debug)]
pub struct OrderedTree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    // Dropping the root `Box` directly would recurse once per level, which
    // overflows the call stack on degenerate trees. Tear down with a
    // worklist instead.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree stores no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Makes the tree empty, releasing every node.
    ///
    /// Nodes are released iteratively so even a pathologically deep tree
    /// cannot exhaust the call stack.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.size = 0;
    }

    /// Adds `item` to the tree by recursive descent. Values smaller than a
    /// node go left, values greater than or equal go right, so duplicates
    /// are stored rather than rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add(2);
    /// tree.add(2);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn add(&mut self, item: T)
    where
        T: Ord,
    {
        match self.root.as_deref_mut() {
            Some(root) => root.add(item),
            None => self.root = Some(Box::new(Node::new(item))),
        }
        self.size += 1;
    }

    /// Adds `item` with an explicit descent loop instead of recursion.
    ///
    /// Produces exactly the same tree shape as [`add`] for a given
    /// insertion sequence, but uses constant call-stack space, so prefer
    /// it when the insertion order may be adversarial (e.g. already
    /// sorted input building a degenerate, height-`n` tree).
    ///
    /// [`add`]: OrderedTree::add
    pub fn add_without_recursion(&mut self, item: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if item < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node::new(item)));
        self.size += 1;
    }

    /// Potentially finds the stored value matching `item` by recursive
    /// descent. If no node matches, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.root.as_deref().and_then(|n| n.find(item))
    }

    /// [`find`] with an explicit descent loop instead of recursion.
    /// Produces identical results; uses constant call-stack space.
    ///
    /// [`find`]: OrderedTree::find
    pub fn find_without_recursion(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match item.cmp(&node.value) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        None
    }

    /// Returns `true` if a stored value matches `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// Removes one node matching `item` and returns its value.
    ///
    /// A node with two children keeps its position: the maximum value of
    /// its left subtree is promoted into it and the rightmost node of that
    /// subtree is spliced out (its own left child, if any, taking its
    /// place). A node with at most one child is replaced by that child.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when no stored value matches `item`,
    /// leaving the tree untouched. Unlike [`find`], a miss here is treated
    /// as a caller bug rather than a legitimate lookup failure.
    ///
    /// [`find`]: OrderedTree::find
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{NotFoundError, OrderedTree};
    ///
    /// let mut tree: OrderedTree<i32> = [5, 3, 8].iter().copied().collect();
    ///
    /// assert_eq!(tree.remove(&3), Ok(3));
    /// assert_eq!(tree.remove(&3), Err(NotFoundError));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T, NotFoundError>
    where
        T: Ord,
    {
        match Self::remove_from(&mut self.root, item) {
            Some(value) => {
                self.size -= 1;
                Ok(value)
            }
            None => Err(NotFoundError),
        }
    }

    /// Descends to the link owning a node that matches `item` and detaches
    /// it. Recursion depth is bounded by the tree height.
    fn remove_from(link: &mut Link<T>, item: &T) -> Option<T>
    where
        T: Ord,
    {
        let ordering = item.cmp(&link.as_deref()?.value);
        match ordering {
            Ordering::Less => Self::remove_from(&mut link.as_deref_mut()?.left, item),
            Ordering::Greater => Self::remove_from(&mut link.as_deref_mut()?.right, item),
            Ordering::Equal => Some(Self::detach(link)),
        }
    }

    /// Removes the node owned by `link` and returns its value. The link
    /// must hold a node.
    fn detach(link: &mut Link<T>) -> T {
        let has_both_children = link
            .as_deref()
            .map_or(false, |node| node.left.is_some() && node.right.is_some());
        if has_both_children {
            let node = link.as_deref_mut().expect("detach requires a node");
            // The promoted value is the largest value strictly less than
            // everything in the right subtree, so ordering is preserved.
            let promoted = Self::take_rightmost(&mut node.left);
            mem::replace(&mut node.value, promoted)
        } else {
            let node = *link.take().expect("detach requires a node");
            *link = if node.left.is_some() {
                node.left
            } else {
                node.right
            };
            node.value
        }
    }

    /// Splices out the rightmost node below `link` and returns its value.
    /// The spliced node's left child, if any, takes its place. The link
    /// must hold a node.
    fn take_rightmost(link: &mut Link<T>) -> T {
        let has_right_child = link.as_deref().map_or(false, |node| node.right.is_some());
        if has_right_child {
            let node = link.as_deref_mut().expect("take_rightmost requires a node");
            Self::take_rightmost(&mut node.right)
        } else {
            let node = *link.take().expect("take_rightmost requires a node");
            *link = node.left;
            node.value
        }
    }

    /// Overwrites the stored value matching `item` with `new_item` in
    /// place and returns the prior value, or returns `None` if nothing
    /// matches.
    ///
    /// This is a raw overwrite, not a remove-plus-add: the node keeps its
    /// position even if `new_item` would not sort there. A `new_item` that
    /// compares differently from `item` silently corrupts the ordering
    /// invariant and later lookups for it may miss. That makes this
    /// operation suitable for updating non-ordering state carried by the
    /// value, never for renaming its key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<i32> = [2, 1, 3].iter().copied().collect();
    ///
    /// assert_eq!(tree.replace(&3, 4), Some(3));
    /// assert_eq!(tree.replace(&7, 8), None);
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T>
    where
        T: Ord,
    {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            match item.cmp(&node.value) {
                Ordering::Less => cur = node.left.as_deref_mut(),
                Ordering::Equal => return Some(mem::replace(&mut node.value, new_item)),
                Ordering::Greater => cur = node.right.as_deref_mut(),
            }
        }
        None
    }

    /// Returns an iterator over the tree in pre-order (node, then left
    /// subtree, then right subtree). This is the default iteration order;
    /// `&tree` also iterates this way.
    ///
    /// The iterator keeps an explicit stack instead of recursing, so deep
    /// trees cannot exhaust the call stack mid-iteration.
    pub fn iter(&self) -> Preorder<'_, T> {
        Preorder::new(self.root.as_deref())
    }

    /// Returns an iterator over the tree in ascending (in-order) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32> = [5, 3, 8, 1, 4, 7, 9].iter().copied().collect();
    /// let sorted: Vec<i32> = tree.inorder().copied().collect();
    ///
    /// assert_eq!(sorted, [1, 3, 4, 5, 7, 8, 9]);
    /// ```
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root.as_deref())
    }

    /// Returns an iterator over the tree in post-order (left subtree,
    /// right subtree, then node).
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root.as_deref())
    }

    /// Returns an iterator over the tree in level order (breadth first,
    /// shallower nodes before deeper ones, left to right within a level).
    pub fn levelorder(&self) -> Levelorder<'_, T> {
        Levelorder::new(self.root.as_deref())
    }

    /// Gets the height of the tree: the longest root-to-leaf path counted
    /// in edges. An empty tree has height `-1` and a single node has
    /// height `0`.
    pub fn height(&self) -> isize {
        self.root.as_deref().map_or(-1, Node::height)
    }

    /// Reports whether the tree's height is close to the ideal logarithmic
    /// height for its size: `height < 2 * log2(size + 1) - 1`.
    ///
    /// This is a heuristic threshold with slack, not an AVL-style
    /// invariant. Empty and single-node trees are declared unbalanced by
    /// convention so the trivial cases never report "balanced".
    pub fn is_balanced(&self) -> bool {
        let height = self.height();
        if height <= 0 {
            return false;
        }
        (height as f64) < 2.0 * ((self.size + 1) as f64).log2() - 1.0
    }

    /// Rebuilds the tree at minimal height.
    ///
    /// The stored values are drained in ascending order and the tree is
    /// reconstructed by recursive median split: the middle element becomes
    /// a subtree root, the halves on either side become its subtrees. The
    /// set of stored values (and therefore the in-order sequence) is
    /// unchanged; only the shape is.
    ///
    /// This `O(n)` pass is the only mechanism that restores balance; the
    /// tree never rebalances itself during `add` or `remove`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for x in 0..7 {
    ///     tree.add(x);
    /// }
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let sorted = self.drain_sorted();
        let len = sorted.len();
        let mut items = sorted.into_iter();
        self.root = Self::build_from_sorted(&mut items, len);
    }

    /// Drains every node into a `Vec` of values in ascending order,
    /// leaving the root empty but `size` untouched. Uses an explicit
    /// left-spine stack rather than recursion.
    fn drain_sorted(&mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.size);
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        let mut cur = self.root.take();
        loop {
            while let Some(mut node) = cur {
                cur = node.left.take();
                stack.push(node);
            }
            match stack.pop() {
                Some(mut node) => {
                    cur = node.right.take();
                    sorted.push(node.value);
                }
                None => break,
            }
        }
        sorted
    }

    /// Builds a minimal-height subtree from the next `len` items of an
    /// ascending sequence. The middle item (index `len / 2`) becomes the
    /// subtree root.
    fn build_from_sorted(items: &mut std::vec::IntoIter<T>, len: usize) -> Link<T> {
        if len == 0 {
            return None;
        }
        let left = Self::build_from_sorted(items, len / 2);
        let value = items
            .next()
            .expect("sorted items were counted before building");
        let right = Self::build_from_sorted(items, len - len / 2 - 1);
        Some(Box::new(Node { value, left, right }))
    }

    /// Returns every stored value `e` with `low <= e <= high`, in
    /// ascending order. An empty range (or a tree with nothing in range)
    /// yields an empty `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32> = [5, 3, 8, 1, 4, 7, 9].iter().copied().collect();
    ///
    /// assert_eq!(tree.range_find(&3, &7), [&3, &4, &5, &7]);
    /// assert!(tree.range_find(&10, &20).is_empty());
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T>
    where
        T: Ord,
    {
        self.inorder()
            .skip_while(|&e| e < low)
            .take_while(|&e| e <= high)
            .collect()
    }

    /// Returns the smallest stored value strictly greater than `item`, or
    /// `None` if nothing exceeds it. `item` itself need not be stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32> = [5, 3, 8].iter().copied().collect();
    ///
    /// assert_eq!(tree.successor(&5), Some(&8));
    /// assert_eq!(tree.successor(&8), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.inorder().find(|&e| e > item)
    }

    /// Returns the largest stored value strictly less than `item`, or
    /// `None` if nothing is smaller. `item` itself need not be stored.
    ///
    /// The stored minimum is a valid predecessor of anything greater
    /// than it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<i32> = [5, 3, 8].iter().copied().collect();
    ///
    /// assert_eq!(tree.predecessor(&5), Some(&3));
    /// assert_eq!(tree.predecessor(&3), None);
    /// ```
    pub fn predecessor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.inorder().take_while(|&e| e < item).last()
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    /// Builds a tree by adding elements one at a time in iteration order.
    /// The resulting shape depends on that order; it is not balanced.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_without_recursion(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Preorder<'a, T>;

    fn into_iter(self) -> Preorder<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its values in pre-order.
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter::new(self.root.take())
    }
}

impl<T: fmt::Display> fmt::Display for OrderedTree<T> {
    /// Renders the tree sideways, right subtree first, one node per line,
    /// indented `"| "` per depth level. The root is flush left and deeper
    /// nodes sit further right. Purely a debugging aid.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn render<T: fmt::Display>(
            link: &Link<T>,
            level: usize,
            f: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            if let Some(node) = link.as_deref() {
                render(&node.right, level + 1, f)?;
                writeln!(f, "{}{}", "| ".repeat(level), node.value)?;
                render(&node.left, level + 1, f)?;
            }
            Ok(())
        }
        render(&self.root, 0, f)
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    fn add(&mut self, item: T)
    where
        T: Ord,
    {
        if item < self.value {
            match self.left.as_deref_mut() {
                Some(left) => left.add(item),
                None => self.left = Some(Box::new(Node::new(item))),
            }
        } else {
            // Greater or equal goes right, so duplicates are kept.
            match self.right.as_deref_mut() {
                Some(right) => right.add(item),
                None => self.right = Some(Box::new(Node::new(item))),
            }
        }
    }

    fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        match item.cmp(&self.value) {
            Ordering::Less => self.left.as_deref().and_then(|n| n.find(item)),
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self.right.as_deref().and_then(|n| n.find(item)),
        }
    }

    fn height(&self) -> isize {
        let left = self.left.as_deref().map_or(-1, Node::height);
        let right = self.right.as_deref().map_or(-1, Node::height);
        1 + left.max(right)
    }
}
