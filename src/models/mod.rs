//! Data models for reading lists

pub mod book;
pub mod reading_list;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookFields};
pub use reading_list::ReadingList;
pub use user::{Identity, User};
