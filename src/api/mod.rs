//! Request handlers for the Bookshelf routes

pub mod authors;
pub mod books;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{error::AppError, AppState};

/// Fallback for known paths hit with an unsupported method
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    Router::new()
        // Listing
        .route("/", get(books::home).fallback(method_not_allowed))
        // Authors
        .route(
            "/add_author",
            get(authors::add_author_form)
                .post(authors::add_author)
                .fallback(method_not_allowed),
        )
        // Books
        .route(
            "/add_book",
            get(books::add_book_form)
                .post(books::add_book)
                .fallback(method_not_allowed),
        )
        .route("/sort", post(books::sort_books).fallback(method_not_allowed))
        .route(
            "/search",
            post(books::search_books).fallback(method_not_allowed),
        )
        .route(
            "/book/:id/delete",
            post(books::delete_book).fallback(method_not_allowed),
        )
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
}
