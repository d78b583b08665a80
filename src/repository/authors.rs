//! Authors repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::author::{Author, CreateAuthor},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Sqlite>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List every author, unordered
    pub async fn list_all(&self) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            "SELECT id, name, birth_date, date_of_death FROM authors",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    /// Insert a new author and return the stored row
    pub async fn create(&self, author: CreateAuthor) -> AppResult<Author> {
        let created = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (name, birth_date, date_of_death)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, birth_date, date_of_death
            "#,
        )
        .bind(&author.name)
        .bind(author.birth_date)
        .bind(author.date_of_death)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
