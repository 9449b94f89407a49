//! A singly linked list. Each `Node` owns the next one, so the only way in is through the head.
//!
//! # Examples
//!
//! ```
//! use classic_ds::linked_list::List;
//!
//! let mut list = List::new();
//! list.push_front(10);
//! list.push_front(20);
//! list.push_back(30);
//! assert_eq!(list.to_string(), "20 -> 10 -> 30 -> null");
//!
//! list.insert_at(1, 15).unwrap();
//! assert_eq!(list.to_string(), "20 -> 15 -> 10 -> 30 -> null");
//! assert_eq!(list.len(), 4);
//!
//! assert_eq!(list.pop_front(), Ok(20));
//! assert_eq!(list.to_string(), "15 -> 10 -> 30 -> null");
//! ```

use std::fmt;
use std::iter::FusedIterator;

use thiserror::Error;

type Link<T> = Option<Box<Node<T>>>;

/// Ways a [`List`] operation can be misused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The operation needs at least one element.
    #[error("the list is empty")]
    Empty,
    /// The index was past the end of the list.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The list's length at the time of the call.
        len: usize,
    },
}

/// A singly linked list with O(1) access to its front.
pub struct List<T> {
    head: Link<T>,
    len: usize,
}

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    // Unlink one node at a time so a long list doesn't drop recursively.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> fmt::Debug for List<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the list front to back as `a -> b -> null`.
impl<T> fmt::Display for List<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{} -> ", value)?;
        }
        write!(f, "null")
    }
}

impl<T> List<T> {
    /// Generate a new, empty `List`.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Adds `value` as the new first element.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Node::new_boxed(value, next));
        self.len += 1;
    }

    /// Adds `value` after the current last element. This walks the whole list.
    pub fn push_back(&mut self, value: T) {
        let len = self.len;
        let pushed = self.insert_at(len, value);
        debug_assert!(pushed.is_ok(), "position {} is always the end of the list", len);
    }

    /// Inserts `value` so that it ends up at position `index`, shifting everything from `index`
    /// on back by one. `index` may be anything from `0` up to and including `len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::linked_list::{List, ListError};
    ///
    /// let mut list = List::new();
    /// list.insert_at(0, 'b').unwrap();
    /// list.insert_at(0, 'a').unwrap();
    /// list.insert_at(2, 'c').unwrap();
    ///
    /// assert_eq!(list.to_string(), "a -> b -> c -> null");
    /// assert_eq!(
    ///     list.insert_at(5, 'z'),
    ///     Err(ListError::IndexOutOfRange { index: 5, len: 3 })
    /// );
    /// ```
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let len = self.len;
        let slot = self
            .slot_at(index)
            .ok_or(ListError::IndexOutOfRange { index, len })?;

        let next = slot.take();
        *slot = Some(Node::new_boxed(value, next));
        self.len += 1;
        Ok(())
    }

    /// Removes the first element and returns it.
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        let node = self.head.take().ok_or(ListError::Empty)?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Ok(value)
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterates over the elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// The link that currently holds position `index`, or `None` when the list is too short.
    /// `slot_at(len())` is the empty link after the last node.
    fn slot_at(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut slot = &mut self.head;
        for _ in 0..index {
            slot = &mut slot.as_mut()?.next;
        }

        Some(slot)
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`List`], front to back.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tutorial_list() -> List<i32> {
        let mut list = List::new();
        list.push_front(10);
        list.push_front(20);
        list.push_back(30);
        list
    }

    #[test]
    fn empty_list_renders_null() {
        let list: List<i32> = List::new();

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.to_string(), "null");
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn push_front_and_back() {
        let list = tutorial_list();

        assert_eq!(list.to_string(), "20 -> 10 -> 30 -> null");
        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().len(), 3);
    }

    #[test]
    fn push_back_on_empty_list_becomes_head() {
        let mut list = List::new();
        list.push_back(1);

        assert_eq!(list.to_string(), "1 -> null");
        assert_eq!(list.pop_front(), Ok(1));
        assert!(list.is_empty());
    }

    #[test]
    fn push_back_keeps_len_in_step_with_nodes() {
        let mut list = List::new();
        for x in 0..50 {
            list.push_back(x);
            assert_eq!(list.len(), x + 1);
            assert_eq!(list.iter().count(), list.len());
            assert_eq!(list.iter().last(), Some(&x));
        }

        list.pop_front().unwrap();
        list.push_back(50);
        assert_eq!(list.len(), 50);
        assert!(list.iter().copied().eq(1..=50));
    }

    #[test]
    fn insert_in_the_middle() {
        let mut list = tutorial_list();
        list.insert_at(1, 15).unwrap();

        assert_eq!(list.to_string(), "20 -> 15 -> 10 -> 30 -> null");
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn insert_at_both_ends() {
        let mut list = tutorial_list();
        list.insert_at(0, 1).unwrap();
        list.insert_at(list.len(), 99).unwrap();

        assert_eq!(list.to_string(), "1 -> 20 -> 10 -> 30 -> 99 -> null");
    }

    #[test]
    fn insert_out_of_range_leaves_list_alone() {
        let mut list = tutorial_list();

        assert_eq!(
            list.insert_at(4, 0),
            Err(ListError::IndexOutOfRange { index: 4, len: 3 })
        );
        assert_eq!(list.to_string(), "20 -> 10 -> 30 -> null");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn pop_front_until_empty() {
        let mut list = tutorial_list();

        assert_eq!(list.pop_front(), Ok(20));
        assert_eq!(list.to_string(), "10 -> 30 -> null");
        assert_eq!(list.len(), 2);

        assert_eq!(list.pop_front(), Ok(10));
        assert_eq!(list.pop_front(), Ok(30));
        assert_eq!(list.pop_front(), Err(ListError::Empty));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn error_messages() {
        assert_eq!(ListError::Empty.to_string(), "the list is empty");
        assert_eq!(
            ListError::IndexOutOfRange { index: 7, len: 2 }.to_string(),
            "index 7 out of range for list of length 2"
        );
    }

    #[test]
    fn long_list_drops() {
        let mut list = List::new();
        for x in 0..200_000 {
            list.push_front(x);
        }

        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
