//! The in-memory address book.
//!
//! One `AddressBook` is created per session and handed to each command
//! handler by mutable reference.

mod address_book;

pub use address_book::{AddressBook, UPCOMING_WINDOW_DAYS};
