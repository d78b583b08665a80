//! Server-side HTML rendering with maud.
//!
//! Each page builder returns [`Markup`], which plugs straight into the axum
//! handlers; interpolated values are escaped automatically.

use axum::http::StatusCode;
use maud::{html, Markup, DOCTYPE};

use crate::models::{Author, BookWithAuthor};

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " - Bookshelf" }
            }
            body {
                h1 { a href="/" { "Bookshelf" } }
                nav {
                    a href="/add_author" { "Add Author" }
                    " | "
                    a href="/add_book" { "Add Book" }
                }
                (body)
            }
        }
    }
}

fn notice(message: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = message {
            p class="notice" { (message) }
        }
    }
}

/// The book listing with sort and search controls
pub fn home_page(books: &[BookWithAuthor], message: Option<&str>) -> Markup {
    layout(
        "Home",
        html! {
            (notice(message))
            form action="/sort" method="post" {
                label for="sort-by" { "Sort by" }
                select name="sort-by" id="sort-by" {
                    option value="title" { "Title" }
                    option value="author" { "Author" }
                }
                button type="submit" { "Sort" }
            }
            form action="/search" method="post" {
                input type="text" name="search_query" placeholder="Search by title";
                button type="submit" { "Search" }
            }
            table {
                tr {
                    th { "Title" }
                    th { "Author" }
                    th { "ISBN" }
                    th { "Year" }
                    th {}
                }
                @for book in books {
                    tr {
                        td { (book.title) }
                        td { (book.author_name) }
                        td { (book.isbn) }
                        td {
                            @if let Some(date) = book.publication_year {
                                (date.format("%Y"))
                            }
                        }
                        td {
                            form action={ "/book/" (book.id) "/delete" } method="post" {
                                button type="submit" { "Delete" }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// The add-author entry form, with an optional confirmation message
pub fn add_author_page(message: Option<&str>) -> Markup {
    layout(
        "Add Author",
        html! {
            (notice(message))
            h2 { "Add Author" }
            form action="/add_author" method="post" {
                label for="name" { "Name" }
                input type="text" name="name" id="name" required;
                label for="birthdate" { "Birth date" }
                input type="date" name="birthdate" id="birthdate" required;
                label for="date_of_death" { "Date of death" }
                input type="date" name="date_of_death" id="date_of_death";
                button type="submit" { "Add Author" }
            }
        },
    )
}

/// The add-book entry form with the author selection list
pub fn add_book_page(authors: &[Author], message: Option<&str>) -> Markup {
    layout(
        "Add Book",
        html! {
            (notice(message))
            h2 { "Add Book" }
            form action="/add_book" method="post" {
                label for="book_title" { "Title" }
                input type="text" name="book_title" id="book_title" required;
                label for="isbn" { "ISBN" }
                input type="text" name="isbn" id="isbn" required;
                label for="publication_year" { "Publication year" }
                input type="text" name="publication_year" id="publication_year" required;
                label for="author" { "Author" }
                select name="author" id="author" {
                    @for author in authors {
                        option value=(author.id) { (author.name) }
                    }
                }
                button type="submit" { "Add Book" }
            }
        },
    )
}

/// Error page for failed requests
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    layout(
        "Error",
        html! {
            h2 { (status.to_string()) }
            p { (message) }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn book(title: &str) -> BookWithAuthor {
        BookWithAuthor {
            id: 1,
            isbn: "ISBN1".to_string(),
            title: title.to_string(),
            publication_year: NaiveDate::from_ymd_opt(1815, 1, 1),
            author_id: 1,
            author_name: "Jane Austen".to_string(),
        }
    }

    #[test]
    fn home_page_lists_books_and_notice() {
        let html = home_page(&[book("Emma")], Some("Book 'Emma' successfully deleted."))
            .into_string();
        assert!(html.contains("Emma"));
        assert!(html.contains("Jane Austen"));
        assert!(html.contains("1815"));
        assert!(html.contains("successfully deleted"));
        assert!(html.contains("/book/1/delete"));
    }

    #[test]
    fn interpolated_values_are_escaped() {
        let html = home_page(&[book("<script>alert(1)</script>")], None).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }
}
