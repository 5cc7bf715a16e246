//! In-memory book collection.
//!
//! One `BookStore` instance owns the process-lifetime collection. Handlers
//! receive it through shared state; there is no ambient global. The Vec is
//! insertion-ordered and scanned linearly. Axum serves requests on a
//! multi-threaded runtime, so the collection sits behind an RwLock to keep
//! every operation an atomic mutation.

use std::sync::RwLock;

use regex::RegexBuilder;

use super::book::{Book, BookDraft, BookFilter, BookSummary};
use super::error::{StoreError, StoreResult};

/// The shared book collection and its five operations.
#[derive(Debug, Default)]
pub struct BookStore {
    books: RwLock<Vec<Book>>,
}

impl BookStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a new book, returning its generated id.
    ///
    /// Validation order: name presence, then the readPage bound. The
    /// post-append presence check cannot fail while append semantics hold;
    /// it is kept as a safety net and surfaces as an internal error.
    pub fn add(&self, draft: BookDraft) -> StoreResult<String> {
        draft.validate()?;

        let book = draft.into_book();
        let id = book.id.clone();

        let mut books = self.books.write().unwrap();
        books.push(book);

        if !books.iter().any(|b| b.id == id) {
            return Err(StoreError::internal("failed to add book"));
        }

        Ok(id)
    }

    /// List books, projected to `{id, name, publisher}`.
    ///
    /// Exactly one filter is honored per call, by priority
    /// name > reading > finished. An empty result is a valid success.
    pub fn list(&self, filter: &BookFilter) -> Vec<BookSummary> {
        let books = self.books.read().unwrap();

        if let Some(pattern) = filter.name() {
            return match_name(&books, pattern);
        }
        if let Some(raw) = filter.reading() {
            return match_flag(&books, raw, |b| b.reading);
        }
        if let Some(raw) = filter.finished() {
            return match_flag(&books, raw, |b| b.finished);
        }

        books.iter().map(BookSummary::from).collect()
    }

    /// Fetch the full record for an id
    pub fn get(&self, id: &str) -> StoreResult<Book> {
        let books = self.books.read().unwrap();
        books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("book not found"))
    }

    /// Validate and replace all mutable fields of an existing record.
    ///
    /// Validation short-circuits before any lookup, so a bad payload for an
    /// unknown id still reports 400, not 404.
    pub fn update(&self, id: &str, draft: BookDraft) -> StoreResult<()> {
        draft.validate()?;

        let mut books = self.books.write().unwrap();
        match books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                draft.apply_to(book);
                Ok(())
            }
            None => Err(StoreError::not_found("id not found")),
        }
    }

    /// Remove a record, preserving the order of the rest
    pub fn remove(&self, id: &str) -> StoreResult<()> {
        let mut books = self.books.write().unwrap();
        match books.iter().position(|b| b.id == id) {
            Some(index) => {
                books.remove(index);
                Ok(())
            }
            None => Err(StoreError::not_found("id not found")),
        }
    }

    /// Number of stored books
    pub fn len(&self) -> usize {
        self.books.read().unwrap().len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Case-insensitive regex match against book names, with a substring
/// fallback when the query is not a valid pattern.
fn match_name(books: &[Book], pattern: &str) -> Vec<BookSummary> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(re) => books
            .iter()
            .filter(|b| re.is_match(&b.name))
            .map(BookSummary::from)
            .collect(),
        Err(_) => {
            let needle = pattern.to_lowercase();
            books
                .iter()
                .filter(|b| b.name.to_lowercase().contains(&needle))
                .map(BookSummary::from)
                .collect()
        }
    }
}

/// Numeric-coercion flag match: the raw query value is parsed as a number
/// and compared against the flag coerced to 0/1. An unparsable value
/// matches nothing.
fn match_flag(books: &[Book], raw: &str, flag: impl Fn(&Book) -> bool) -> Vec<BookSummary> {
    let wanted = match raw.trim().parse::<f64>() {
        Ok(v) => v,
        Err(_) => return Vec::new(),
    };

    books
        .iter()
        .filter(|b| (flag(b) as u8) as f64 == wanted)
        .map(BookSummary::from)
        .collect()
}
