//! # scripture-epub-engine
//!
//! Renders parsed scripture markup, delivered as a stream of
//! [`MarkupEvent`]s, into EPUB-ready XHTML documents.
//!
//! ```text
//! SourceDocument ──events──▶ RenderSession ──first match──▶ handler
//!                                 │                            │
//!                                 │◀──── grafted sequences ────┘
//!                                 ▼
//!                         DocSetState (titles, log, PackageSink)
//! ```
//!
//! Canonical books and peripheral documents share the same handlers; a
//! [`DocumentProfile`] decides which rules are registered for each.

pub mod config;
pub mod docset;
pub mod document;
pub mod error;
pub mod events;
pub mod profile;
pub mod render;

pub use config::{FrenchSpacing, RenderConfig, TextDirection};
pub use docset::{BookTitles, DocSetState, LogEntry, MemorySink, PackageSink};
pub use document::{DocumentHeaders, SequenceSource, SourceDocument};
pub use error::RenderError;
pub use events::{EventKind, MarkupEvent, SequenceType};
pub use profile::{DocumentProfile, ProfileKind, TitleSource};
pub use render::{
    ChapterLink, DocumentRenderer, RenderSession, RenderedDocument, render_doc_set,
};
