//! A singly linked list of `i32` values, plus the driver that walks through it operation by
//! operation.

pub mod driver;
pub mod linked_list;

pub use linked_list::LinkedList;
