//! This crate exposes a few classic data structures mostly for educational
//! purposes: a [`tree::Tree`] (a Binary Search Tree), a singly linked
//! [`linked_list::List`] and a [`book_stack::BookStack`].
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores a key and will sometimes
//! have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). The tree here
//! does no balancing, so the height depends entirely on the insertion order.
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree (an "in-order" traversal).

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod book_stack;
pub mod linked_list;
pub mod tree;
