//! Book HTTP Routes
//!
//! The five bookshelf endpoints: add, list (with filters), fetch-by-id,
//! update, and delete. Every error is converted to a response envelope
//! here; nothing propagates past the handler.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::core::{Book, BookDraft, BookFilter, BookStore, BookSummary, StoreError};
use crate::observability::Logger;

// ==================
// Shared State
// ==================

/// Book state shared across handlers.
///
/// The store owns the collection; handlers receive it through this state
/// rather than any ambient global.
#[derive(Debug, Default)]
pub struct BooksState {
    pub store: BookStore,
}

impl BooksState {
    pub fn new() -> Self {
        Self {
            store: BookStore::new(),
        }
    }
}

// ==================
// Request/Response Types
// ==================

/// Response envelope: `{status, message?, data?}`
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Success with data only
    pub fn data(data: T) -> Self {
        Self {
            status: "success",
            message: None,
            data: Some(data),
        }
    }

    /// Success with a confirmation message and data
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Success with a confirmation message only
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data: None,
        }
    }

    /// Failure with a message
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: "fail",
            message: Some(message.into()),
            data: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookIdData {
    #[serde(rename = "bookId")]
    pub book_id: String,
}

#[derive(Debug, Serialize)]
pub struct BooksData {
    pub books: Vec<BookSummary>,
}

#[derive(Debug, Serialize)]
pub struct BookData {
    pub book: Book,
}

/// List query parameters, kept as raw strings so numeric coercion happens
/// in the store, not in the extractor.
#[derive(Debug, Deserialize)]
pub struct ListBooksQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub reading: Option<String>,
    #[serde(default)]
    pub finished: Option<String>,
}

type FailResponse = (StatusCode, Json<Envelope<()>>);

/// Map a store error to its response envelope and status code
fn fail(err: StoreError) -> FailResponse {
    let status = match err {
        StoreError::Validation(_) => StatusCode::BAD_REQUEST,
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(Envelope::fail(err.to_string())))
}

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes(state: Arc<BooksState>) -> Router {
    Router::new()
        .route("/books", post(add_book_handler))
        .route("/books", get(list_books_handler))
        .route("/books/:book_id", get(get_book_handler))
        .route("/books/:book_id", put(update_book_handler))
        .route("/books/:book_id", delete(delete_book_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn add_book_handler(
    State(state): State<Arc<BooksState>>,
    Json(draft): Json<BookDraft>,
) -> Result<(StatusCode, Json<Envelope<BookIdData>>), FailResponse> {
    let id = state.store.add(draft).map_err(fail)?;

    Logger::info("BOOK_ADDED", &[("book_id", &id)]);

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success("book added", BookIdData { book_id: id })),
    ))
}

async fn list_books_handler(
    State(state): State<Arc<BooksState>>,
    Query(query): Query<ListBooksQuery>,
) -> Json<Envelope<BooksData>> {
    let filter = BookFilter::new(query.name, query.reading, query.finished);
    let books = state.store.list(&filter);

    Json(Envelope::data(BooksData { books }))
}

async fn get_book_handler(
    State(state): State<Arc<BooksState>>,
    Path(book_id): Path<String>,
) -> Result<Json<Envelope<BookData>>, FailResponse> {
    let book = state.store.get(&book_id).map_err(fail)?;

    Ok(Json(Envelope::data(BookData { book })))
}

async fn update_book_handler(
    State(state): State<Arc<BooksState>>,
    Path(book_id): Path<String>,
    Json(draft): Json<BookDraft>,
) -> Result<Json<Envelope<()>>, FailResponse> {
    state.store.update(&book_id, draft).map_err(fail)?;

    Logger::info("BOOK_UPDATED", &[("book_id", &book_id)]);

    Ok(Json(Envelope::message("book updated")))
}

async fn delete_book_handler(
    State(state): State<Arc<BooksState>>,
    Path(book_id): Path<String>,
) -> Result<Json<Envelope<()>>, FailResponse> {
    state.store.remove(&book_id).map_err(fail)?;

    Logger::info("BOOK_DELETED", &[("book_id", &book_id)]);

    Ok(Json(Envelope::message("book deleted")))
}
