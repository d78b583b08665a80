//! Book endpoints: listing, creation, sort, search, delete

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Form,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::{BookForm, CreateBook, SearchForm, SortForm},
    views, AppState,
};

/// Query parameters for the listing page
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    /// Confirmation carried across the post-delete redirect
    pub notice: Option<String>,
}

/// Render the book listing
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> AppResult<Markup> {
    let books = state.repository.books.list_all().await?;
    Ok(views::home_page(&books, query.notice.as_deref()))
}

/// Render the add-book form with the author selection list
pub async fn add_book_form(State(state): State<AppState>) -> AppResult<Markup> {
    let authors = state.repository.authors.list_all().await?;
    Ok(views::add_book_page(&authors, None))
}

/// Create a book from a form submission
pub async fn add_book(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> AppResult<Markup> {
    let create = CreateBook::try_from(form)?;
    let book = state.repository.books.create(create).await?;

    let authors = state.repository.authors.list_all().await?;
    let message = format!("Book '{}' successfully added!", book.title);
    Ok(views::add_book_page(&authors, Some(&message)))
}

/// Render the listing ordered by the submitted criterion.
/// Unknown criteria fall back to the unsorted listing.
pub async fn sort_books(
    State(state): State<AppState>,
    Form(form): Form<SortForm>,
) -> AppResult<Markup> {
    let books = state.repository.books.sort(form.key()).await?;
    Ok(views::home_page(&books, None))
}

/// Render the listing filtered by a title substring
pub async fn search_books(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> AppResult<Markup> {
    let books = state.repository.books.search(&form.search_query).await?;

    let notice = if books.is_empty() {
        Some("No books found matching the search query.")
    } else {
        None
    };
    Ok(views::home_page(&books, notice))
}

/// Delete a book and redirect to the listing with a confirmation
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<i64>,
) -> AppResult<Redirect> {
    let book = state.repository.books.delete(book_id).await?;

    let message = format!("Book '{}' successfully deleted.", book.title);
    Ok(Redirect::to(&format!(
        "/?notice={}",
        urlencoding::encode(&message)
    )))
}
