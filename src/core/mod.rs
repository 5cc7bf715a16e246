//! Core domain for the bookshelf service.
//!
//! The book record, the in-memory collection, and the validation rules the
//! HTTP surface enforces.

mod book;
mod error;
mod id;
mod store;

pub use book::{timestamp, Book, BookDraft, BookFilter, BookSummary};
pub use error::{StoreError, StoreResult};
pub use id::{generate_id, ID_LENGTH};
pub use store::BookStore;
