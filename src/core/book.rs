//! Book record and request/projection types.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::error::{StoreError, StoreResult};
use super::id::generate_id;

/// A stored book record.
///
/// `finished` is derived (`page_count == read_page`) and never accepted from
/// clients; `inserted_at` is set once at creation, `updated_at` refreshed on
/// every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
    pub finished: bool,
    pub inserted_at: String,
    pub updated_at: String,
}

/// Client-supplied book payload for create and update.
///
/// Every field is optional on the wire; absent fields take zero-value
/// defaults. Only `name` is required, and only the `read_page <= page_count`
/// relation is checked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub read_page: u32,
    #[serde(default)]
    pub reading: bool,
}

impl BookDraft {
    /// Validate the draft, in the order the API contract fixes:
    /// name presence first, then the read_page bound.
    pub fn validate(&self) -> StoreResult<()> {
        match &self.name {
            Some(name) if !name.is_empty() => {}
            _ => return Err(StoreError::validation("book name required")),
        }

        if self.read_page > self.page_count {
            return Err(StoreError::validation("readPage exceeds pageCount"));
        }

        Ok(())
    }

    /// Name after validation has passed
    fn name(&self) -> String {
        self.name.clone().unwrap_or_default()
    }

    /// Build a new Book from a validated draft
    pub fn into_book(self) -> Book {
        let now = timestamp();
        Book {
            id: generate_id(),
            name: self.name(),
            year: self.year,
            author: self.author,
            summary: self.summary,
            publisher: self.publisher,
            finished: self.page_count == self.read_page,
            page_count: self.page_count,
            read_page: self.read_page,
            reading: self.reading,
            inserted_at: now.clone(),
            updated_at: now,
        }
    }

    /// Apply a validated draft onto an existing record in place.
    ///
    /// `id` and `inserted_at` are preserved; `finished` is recomputed and
    /// `updated_at` refreshed.
    pub fn apply_to(self, book: &mut Book) {
        book.name = self.name();
        book.year = self.year;
        book.author = self.author;
        book.summary = self.summary;
        book.publisher = self.publisher;
        book.finished = self.page_count == self.read_page;
        book.page_count = self.page_count;
        book.read_page = self.read_page;
        book.reading = self.reading;
        book.updated_at = timestamp();
    }
}

/// List projection: `{id, name, publisher}`
#[derive(Debug, Clone, Serialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// List filters, carried as raw query strings.
///
/// An empty string counts as absent. Priority is name > reading > finished;
/// filters are mutually exclusive by evaluation order, never combined.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    name: Option<String>,
    reading: Option<String>,
    finished: Option<String>,
}

impl BookFilter {
    pub fn new(
        name: Option<String>,
        reading: Option<String>,
        finished: Option<String>,
    ) -> Self {
        Self {
            name: non_empty(name),
            reading: non_empty(reading),
            finished: non_empty(finished),
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self::new(Some(name.into()), None, None)
    }

    pub fn by_reading(value: impl Into<String>) -> Self {
        Self::new(None, Some(value.into()), None)
    }

    pub fn by_finished(value: impl Into<String>) -> Self {
        Self::new(None, None, Some(value.into()))
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }

    pub fn finished(&self) -> Option<&str> {
        self.finished.as_deref()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Current time as ISO-8601 with millisecond precision and Z suffix
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> BookDraft {
        BookDraft {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_name_rejected() {
        let err = BookDraft::default().validate().unwrap_err();
        assert_eq!(err, StoreError::validation("book name required"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = draft("").validate().unwrap_err();
        assert_eq!(err, StoreError::validation("book name required"));
    }

    #[test]
    fn test_name_checked_before_page_bound() {
        let bad = BookDraft {
            name: None,
            page_count: 10,
            read_page: 20,
            ..Default::default()
        };
        assert_eq!(
            bad.validate().unwrap_err(),
            StoreError::validation("book name required")
        );
    }

    #[test]
    fn test_read_page_bound_rejected() {
        let bad = BookDraft {
            page_count: 100,
            read_page: 150,
            ..draft("B")
        };
        assert_eq!(
            bad.validate().unwrap_err(),
            StoreError::validation("readPage exceeds pageCount")
        );
    }

    #[test]
    fn test_finished_derivation() {
        let done = BookDraft {
            page_count: 100,
            read_page: 100,
            ..draft("A")
        };
        assert!(done.into_book().finished);

        let in_progress = BookDraft {
            page_count: 100,
            read_page: 40,
            ..draft("A")
        };
        assert!(!in_progress.into_book().finished);
    }

    #[test]
    fn test_empty_draft_counts_as_finished() {
        // Both counts default to zero, so 0 == 0 holds
        assert!(draft("A").into_book().finished);
    }

    #[test]
    fn test_apply_preserves_id_and_inserted_at() {
        let mut book = draft("before").into_book();
        let id = book.id.clone();
        let inserted_at = book.inserted_at.clone();

        let update = BookDraft {
            page_count: 20,
            read_page: 20,
            ..draft("after")
        };
        update.apply_to(&mut book);

        assert_eq!(book.id, id);
        assert_eq!(book.inserted_at, inserted_at);
        assert_eq!(book.name, "after");
        assert!(book.finished);
    }

    #[test]
    fn test_filter_treats_empty_string_as_absent() {
        let filter = BookFilter::new(Some(String::new()), Some("1".to_string()), None);
        assert!(filter.name().is_none());
        assert_eq!(filter.reading(), Some("1"));
    }

    #[test]
    fn test_book_serializes_camel_case() {
        let book = draft("A").into_book();
        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains("\"pageCount\""));
        assert!(json.contains("\"insertedAt\""));
        assert!(json.contains("\"updatedAt\""));
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp();
        // e.g. 2026-08-25T12:34:56.789Z
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.len(), 24);
    }
}
