//! Data models for the Bookshelf catalog

pub mod author;
pub mod book;

// Re-export commonly used types
pub use author::{Author, AuthorForm, CreateAuthor};
pub use book::{Book, BookForm, BookWithAuthor, CreateBook, SearchForm, SortForm, SortKey};
