//! Author endpoints

use axum::{extract::State, Form};
use maud::Markup;

use crate::{
    error::AppResult,
    models::{AuthorForm, CreateAuthor},
    views, AppState,
};

/// Render the empty add-author form
pub async fn add_author_form() -> Markup {
    views::add_author_page(None)
}

/// Create an author from a form submission
pub async fn add_author(
    State(state): State<AppState>,
    Form(form): Form<AuthorForm>,
) -> AppResult<Markup> {
    let create = CreateAuthor::try_from(form)?;
    let author = state.repository.authors.create(create).await?;

    let message = format!("Author '{}' successfully added!", author.name);
    Ok(views::add_author_page(Some(&message)))
}
