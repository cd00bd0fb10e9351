//! State shared by all documents of one export.
//!
//! Every piece of shared state is append-only and keyed by document, so
//! documents may be rendered on separate threads behind plain mutexes.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Title tuple recorded for each document, used by the table of contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookTitles {
    /// Running heading (`h`).
    pub heading: String,
    /// Long table-of-contents title (`toc`).
    pub long: String,
    /// Short table-of-contents title (`toc2`).
    pub short: String,
    /// Abbreviation (`toc3`).
    pub abbreviation: String,
}

impl BookTitles {
    pub fn repeated(title: &str) -> Self {
        Self {
            heading: title.to_string(),
            long: title.to_string(),
            short: title.to_string(),
            abbreviation: title.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: log::Level,
    pub message: String,
    pub document_key: String,
}

/// Destination for finished documents.
pub trait PackageSink: Send + Sync {
    fn store(&self, document_key: &str, markup: &str);
}

/// A sink that keeps every stored document in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<BTreeMap<String, String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, document_key: &str) -> Option<String> {
        self.lock().get(document_key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    /// Take every stored document, leaving the sink empty.
    pub fn drain(&self) -> BTreeMap<String, String> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PackageSink for MemorySink {
    fn store(&self, document_key: &str, markup: &str) {
        self.lock()
            .insert(document_key.to_string(), markup.to_string());
    }
}

/// Title registry, log and packaging sink shared across documents.
pub struct DocSetState {
    titles: Mutex<BTreeMap<String, BookTitles>>,
    log: Mutex<Vec<LogEntry>>,
    sink: Arc<dyn PackageSink>,
}

impl DocSetState {
    pub fn new(sink: Arc<dyn PackageSink>) -> Self {
        Self {
            titles: Mutex::new(BTreeMap::new()),
            log: Mutex::new(Vec::new()),
            sink,
        }
    }

    pub fn record_titles(&self, book_code: &str, titles: BookTitles) {
        self.titles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(book_code.to_string(), titles);
    }

    pub fn titles(&self, book_code: &str) -> Option<BookTitles> {
        self.titles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(book_code)
            .cloned()
    }

    pub fn all_titles(&self) -> BTreeMap<String, BookTitles> {
        self.titles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Log a content anomaly against a document and keep it for the export report.
    pub fn warn(&self, message: impl Into<String>, document_key: &str) {
        let message = message.into();
        log::warn!("{document_key}: {message}");
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LogEntry {
                level: log::Level::Warn,
                message,
                document_key: document_key.to_string(),
            });
    }

    pub fn log_entries(&self) -> Vec<LogEntry> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn store(&self, document_key: &str, markup: &str) {
        self.sink.store(document_key, markup);
    }
}

impl std::fmt::Debug for DocSetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocSetState")
            .field("titles", &self.titles)
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}
