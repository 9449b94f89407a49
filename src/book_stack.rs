//! A stack of books. The last book pushed is the first one handed back.
//!
//! # Examples
//!
//! ```
//! use classic_ds::book_stack::{Book, BookStack};
//!
//! let mut stack = BookStack::new();
//! stack.push(Book::new("The Great Gatsby", "F. Scott Fitzgerald"));
//! stack.push(Book::new("1984", "George Orwell"));
//!
//! assert_eq!(stack.peek().unwrap().to_string(), "\"1984\" by George Orwell");
//! assert_eq!(stack.pop().unwrap().title(), "1984");
//! assert_eq!(stack.len(), 1);
//! ```

use std::fmt;

use thiserror::Error;

/// Returned when reading from a [`BookStack`] that has no books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// There is no top book.
    #[error("the stack is empty")]
    Empty,
}

/// A book, identified by its title and author.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    title: String,
    author: String,
}

impl Book {
    /// Creates a book with the given title and author.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    /// The book's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The book's author.
    pub fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" by {}", self.title, self.author)
    }
}

/// A last-in, first-out pile of [`Book`]s.
#[derive(Debug, Clone, Default)]
pub struct BookStack {
    books: Vec<Book>,
}

impl BookStack {
    /// Generate a new, empty `BookStack`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `book` on top of the stack.
    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Takes the top book off the stack.
    pub fn pop(&mut self) -> Result<Book, StackError> {
        self.books.pop().ok_or(StackError::Empty)
    }

    /// Looks at the top book without removing it.
    pub fn peek(&self) -> Result<&Book, StackError> {
        self.books.last().ok_or(StackError::Empty)
    }

    /// Returns `true` if there are no books on the stack.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns how many books are on the stack.
    pub fn len(&self) -> usize {
        self.books.len()
    }
}
