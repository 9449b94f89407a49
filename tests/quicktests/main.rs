//! Property tests run against the public API only.

mod linked_list;
mod tree;
