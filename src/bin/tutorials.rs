//! Walks through each data structure in the crate and prints what it holds.

use std::error::Error;
use std::fmt::Display;

use classic_ds::book_stack::{Book, BookStack};
use classic_ds::linked_list::List;
use classic_ds::tree::Tree;

/// Joins the keys with single spaces, the way the traversal is shown on the console.
fn render_keys<I>(keys: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    keys.into_iter()
        .map(|key| key.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn tree_demo() {
    let mut tree = Tree::new();
    for key in [10, 5, 20, 2, 7, 15, 25] {
        tree.insert(key);
    }

    println!("In-order Traversal:");
    println!("{}", render_keys(&tree));
}

fn linked_list_demo() -> Result<(), Box<dyn Error>> {
    let mut list = List::new();
    list.push_front(10);
    list.push_front(20);
    list.push_back(30);
    println!("{}", list);
    println!("Size: {}", list.len());

    list.insert_at(1, 15)?;
    println!("{}", list);
    println!("Size: {}", list.len());

    list.pop_front()?;
    println!("{}", list);
    println!("Size: {}", list.len());

    Ok(())
}

fn book_stack_demo() -> Result<(), Box<dyn Error>> {
    let mut stack = BookStack::new();
    stack.push(Book::new("The Great Gatsby", "F. Scott Fitzgerald"));
    stack.push(Book::new("To Kill a Mockingbird", "Harper Lee"));
    stack.push(Book::new("1984", "George Orwell"));

    println!("Top book is: {}", stack.peek()?);
    println!("Popped book is: {}", stack.pop()?);
    println!("Popped book is: {}", stack.pop()?);
    println!("Is the stack empty? {}", stack.is_empty());
    println!("Stack size is: {}", stack.len());

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tree_demo();
    println!();
    linked_list_demo()?;
    println!();
    book_stack_demo()
}
