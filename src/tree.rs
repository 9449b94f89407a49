//! An owned, unbalanced BST. Every `Node` owns its children through a `Box` so the whole tree is
//! dropped with its `Tree`. Keys are kept unique: inserting a key that is already present leaves
//! the tree untouched.
//!
//! # Examples
//!
//! ```
//! use classic_ds::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.iter().next(), None);
//!
//! for key in [10, 5, 20, 2, 7, 15, 25] {
//!     tree.insert(key);
//! }
//!
//! // In-order traversal visits keys in ascending order.
//! let keys: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(keys, [2, 5, 7, 10, 15, 20, 25]);
//!
//! // Inserting a key twice doesn't add a second node.
//! assert!(!tree.insert(5));
//! assert_eq!(tree.len(), 7);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// An exclusively owned, possibly empty child slot.
type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree of unique keys. It supports inserting keys and visiting them in
/// ascending order. There is no balancing so inserting keys in sorted order produces a tree whose
/// height equals its length.
///
/// Inserting, looking up, iterating, cloning and dropping all walk the tree with loops, so none
/// of them is limited by the call stack however skewed the tree gets. Only
/// [`Tree::for_each_in_order`] recurses.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // Dropping the boxes recursively would need one stack frame per level, which a skewed tree
    // can exhaust. Detach the children onto a heap stack instead.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Copies the tree node for node, so the clone has the same shape as the original.
impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        // Collect nodes as node, right subtree, left subtree. Walking that backwards visits every
        // child before its parent, so both copied children are on top of `built` by the time
        // their parent is copied.
        let mut order = Vec::with_capacity(self.len);
        let mut pending: Vec<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = pending.pop() {
            order.push(node);
            pending.extend(node.left());
            pending.extend(node.right());
        }

        let mut built: Vec<Box<Node<K>>> = Vec::new();
        for node in order.into_iter().rev() {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts the key into the tree, keeping the BST ordering. Returns `true` if a new node was
    /// created and `false` if the key was already present, in which case the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(10));
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [5, 10]);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            if cfg!(debug_assertions) {
                node.assert_local_order();
            }

            slot = match key.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }

        *slot = Some(Node::new_boxed(key));
        self.len += 1;
        true
    }

    /// Returns whether a node with the given key is in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(42);
    ///
    /// assert!(tree.contains(&42));
    /// assert!(!tree.contains(&7));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut node = self.root();
        while let Some(n) = node {
            node = match key.cmp(&n.value) {
                Ordering::Less => n.left(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right(),
            };
        }

        false
    }

    /// Returns how many keys are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no key has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Gets the number of levels in the tree. An empty tree has a height of 0 and a tree with just
    /// a root has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&Node<K>, usize)> =
            self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left().map(|n| (n, depth + 1)));
            pending.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }

    /// The root of the tree, if any key has been inserted.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Returns a lazy in-order iterator over the keys of the tree, so the keys come out in
    /// ascending order. Each call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::tree::Tree;
    ///
    /// let tree: Tree<_> = vec![3, 1, 2].into_iter().collect();
    /// let mut iter = tree.iter();
    ///
    /// assert_eq!(iter.len(), 3);
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            inner: SubtreeIter::new(self.root()),
            remaining: self.len,
        }
    }

    /// Visits every key in order by recursing left, calling `visit` on the node's key, and then
    /// recursing right. The recursion goes as deep as the tree is tall; prefer [`Tree::iter`] for
    /// trees that may be badly skewed.
    pub fn for_each_in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&K),
    {
        if let Some(root) = self.root() {
            root.for_each_in_order(&mut visit);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single key in a [`Tree`] along with the subtrees hanging off of it.
pub struct Node<K> {
    value: K,
    left: Link<K>,
    right: Link<K>,
}

/// Shows the node's key and the keys of each subtree in order, rather than nesting every
/// descendant.
impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &Subtree(self.left()))
            .field("right", &Subtree(self.right()))
            .finish()
    }
}

/// Debug helper listing a possibly empty subtree's keys.
struct Subtree<'a, K>(Option<&'a Node<K>>);

impl<K> fmt::Debug for Subtree<'_, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(SubtreeIter::new(self.0)).finish()
    }
}

impl<K> Node<K> {
    fn new_boxed(value: K) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn value(&self) -> &K {
        &self.value
    }

    /// The root of the subtree holding every key smaller than this one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the subtree holding every key larger than this one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns a lazy in-order iterator over the subtree rooted at this node.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::tree::Tree;
    ///
    /// let tree: Tree<_> = vec![10, 5, 20, 2, 7].into_iter().collect();
    /// let left = tree.root().and_then(|root| root.left()).unwrap();
    ///
    /// assert_eq!(left.iter().copied().collect::<Vec<_>>(), [2, 5, 7]);
    /// ```
    pub fn iter(&self) -> SubtreeIter<'_, K> {
        SubtreeIter::new(Some(self))
    }

    /// Recursive in-order visit of this subtree.
    pub fn for_each_in_order<F>(&self, visit: &mut F)
    where
        F: FnMut(&K),
    {
        if let Some(left) = self.left() {
            left.for_each_in_order(visit);
        }
        visit(&self.value);
        if let Some(right) = self.right() {
            right.for_each_in_order(visit);
        }
    }

    /// Panics if either child is on the wrong side of this node.
    fn assert_local_order(&self)
    where
        K: Ord,
    {
        if let Some(left) = self.left() {
            assert!(self.value > left.value);
        }
        if let Some(right) = self.right() {
            assert!(self.value < right.value);
        }
    }
}

/// An in-order iterator over the keys of any subtree of a [`Tree`].
///
/// It keeps the not-yet-visited left spine on an explicit stack so that iterating a skewed tree
/// doesn't grow the call stack. A subtree doesn't track its own size, so unlike [`Iter`] this only
/// gives a lower bound in its `size_hint`.
pub struct SubtreeIter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<K> Clone for SubtreeIter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K> SubtreeIter<'a, K> {
    fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and all of its left descendants so the smallest key ends up on top.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a, K> Iterator for SubtreeIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}

impl<K> FusedIterator for SubtreeIter<'_, K> {}

/// An in-order iterator over all the keys of a [`Tree`]. The tree knows its length, so this one
/// is exact-size.
pub struct Iter<'a, K> {
    inner: SubtreeIter<'a, K>,
    remaining: usize,
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.inner.next()?;
        self.remaining -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}
