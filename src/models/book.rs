//! Book model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Full book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub isbn: String,
    pub title: String,
    pub publication_year: Option<NaiveDate>,
    pub author_id: i64,
}

/// Book joined with its author's name, for listing views
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookWithAuthor {
    pub id: i64,
    pub isbn: String,
    pub title: String,
    pub publication_year: Option<NaiveDate>,
    pub author_id: i64,
    pub author_name: String,
}

/// Create book request, validated at the boundary
#[derive(Debug, Validate)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub isbn: String,
    pub publication_year: NaiveDate,
    pub author_id: i64,
}

/// Raw add-book form submission
#[derive(Debug, Deserialize)]
pub struct BookForm {
    pub book_title: String,
    pub isbn: String,
    pub publication_year: String,
    pub author: String,
}

impl TryFrom<BookForm> for CreateBook {
    type Error = AppError;

    fn try_from(form: BookForm) -> AppResult<Self> {
        // Only the year component is meaningful; month and day default to Jan 1
        let year: i32 = form.publication_year.trim().parse().map_err(|_| {
            AppError::Validation("publication_year must be a 4-digit year".to_string())
        })?;
        let publication_year = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| {
            AppError::Validation("publication_year is out of range".to_string())
        })?;

        let author_id: i64 = form.author.trim().parse().map_err(|_| {
            AppError::Validation("author must be an author id".to_string())
        })?;

        let create = CreateBook {
            title: form.book_title.trim().to_string(),
            isbn: form.isbn.trim().to_string(),
            publication_year,
            author_id,
        };
        create
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(create)
    }
}

/// Sort criterion for the book listing.
///
/// Any value other than `title` or `author` falls back to the unsorted
/// listing rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Author,
    Unsorted,
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        match s {
            "title" => SortKey::Title,
            "author" => SortKey::Author,
            _ => SortKey::Unsorted,
        }
    }
}

/// Sort form submission
#[derive(Debug, Deserialize)]
pub struct SortForm {
    #[serde(rename = "sort-by", default)]
    pub sort_by: Option<String>,
}

impl SortForm {
    pub fn key(&self) -> SortKey {
        self.sort_by.as_deref().map_or(SortKey::Unsorted, SortKey::from)
    }
}

/// Search form submission
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, isbn: &str, year: &str, author: &str) -> BookForm {
        BookForm {
            book_title: title.to_string(),
            isbn: isbn.to_string(),
            publication_year: year.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn publication_year_becomes_january_first() {
        let create = CreateBook::try_from(form("Emma", "ISBN1", "1815", "1")).unwrap();
        assert_eq!(
            create.publication_year,
            NaiveDate::from_ymd_opt(1815, 1, 1).unwrap()
        );
        assert_eq!(create.author_id, 1);
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        let result = CreateBook::try_from(form("Emma", "ISBN1", "eighteen15", "1"));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn non_numeric_author_id_is_rejected() {
        let result = CreateBook::try_from(form("Emma", "ISBN1", "1815", "Jane"));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn unknown_sort_values_fall_back_to_unsorted() {
        assert_eq!(SortKey::from("title"), SortKey::Title);
        assert_eq!(SortKey::from("author"), SortKey::Author);
        assert_eq!(SortKey::from("isbn"), SortKey::Unsorted);
        assert_eq!(SortKey::from(""), SortKey::Unsorted);

        let missing = SortForm { sort_by: None };
        assert_eq!(missing.key(), SortKey::Unsorted);
    }
}
