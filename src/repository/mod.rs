//! Repository layer for database operations

pub mod authors;
pub mod books;

use sqlx::{Pool, Sqlite};

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub authors: authors::AuthorsRepository,
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            pool,
        }
    }
}
