//! Books repository for database operations

use sqlx::error::ErrorKind;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookWithAuthor, CreateBook, SortKey},
};

/// Book rows joined with their author, in the storage engine's natural order
const SELECT_JOINED: &str = r#"
    SELECT b.id, b.isbn, b.title, b.publication_year, b.author_id, a.name AS author_name
    FROM books b
    JOIN authors a ON a.id = b.author_id
"#;

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// List every book joined with its author
    pub async fn list_all(&self) -> AppResult<Vec<BookWithAuthor>> {
        let books = sqlx::query_as::<_, BookWithAuthor>(SELECT_JOINED)
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    /// List every book joined with its author, ordered by the given criterion.
    /// `SortKey::Unsorted` is the plain listing.
    pub async fn sort(&self, key: SortKey) -> AppResult<Vec<BookWithAuthor>> {
        let query = match key {
            SortKey::Title => format!("{} ORDER BY b.title ASC", SELECT_JOINED),
            SortKey::Author => format!("{} ORDER BY a.name ASC", SELECT_JOINED),
            SortKey::Unsorted => return self.list_all().await,
        };

        let books = sqlx::query_as::<_, BookWithAuthor>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    /// Case-insensitive substring search on book titles.
    /// An empty query matches every title; no match is an empty result, not an error.
    pub async fn search(&self, query: &str) -> AppResult<Vec<BookWithAuthor>> {
        let sql = format!("{} WHERE b.title LIKE '%' || ?1 || '%'", SELECT_JOINED);

        let books = sqlx::query_as::<_, BookWithAuthor>(&sql)
            .bind(query)
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "SELECT id, isbn, title, publication_year, author_id FROM books WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Insert a new book and return the stored row.
    ///
    /// The storage engine enforces that `author_id` references an existing
    /// author; a foreign-key violation surfaces as a referential integrity
    /// error with no partial state.
    pub async fn create(&self, book: CreateBook) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (isbn, title, publication_year, author_id)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, isbn, title, publication_year, author_id
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(book.publication_year)
        .bind(book.author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if matches!(db.kind(), ErrorKind::ForeignKeyViolation) => {
                AppError::ReferentialIntegrity(format!(
                    "Author with id {} does not exist",
                    book.author_id
                ))
            }
            _ => AppError::from(e),
        })?;

        Ok(created)
    }

    /// Delete the book with the given ID and return the removed row
    pub async fn delete(&self, id: i64) -> AppResult<Book> {
        let book = self.get_by_id(id).await?;

        let result = sqlx::query("DELETE FROM books WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }

        Ok(book)
    }
}
