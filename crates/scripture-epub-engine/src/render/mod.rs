//! # Markup Rendering
//!
//! A [`DocumentRenderer`] owns the action table built for one
//! [`DocumentProfile`]. Rendering a document opens a [`RenderSession`], which
//! holds the per-document [`RenderState`] and feeds each event to the first
//! matching rule of the table.
//!
//! ## Modules
//!
//! - **`dispatch`**: `ActionTable`, first-match routing per event kind
//! - **`stack`**: nested row buffers for inline content
//! - **`trackers`**: deferred chapter and verse labels
//! - **`footnotes`**: note collection under sequential ids
//! - **`spacing`**: French punctuation spacing of tokens
//! - **`assembler`**: head, navigation and final document composition
//! - **`handlers`**: the rule handlers registered in the table
//!
//! Grafted sequences (titles, introductions, notes) are replayed through the
//! same session, synchronously, at the point where the graft appears.

pub mod assembler;
pub mod dispatch;
pub mod footnotes;
pub mod handlers;
pub mod spacing;
pub mod stack;
pub mod state;
pub mod trackers;

use serde::Serialize;

use crate::config::RenderConfig;
use crate::docset::DocSetState;
use crate::document::{DocumentHeaders, SequenceSource, SourceDocument};
use crate::error::RenderError;
use crate::events::{EventKind, MarkupEvent};
use crate::profile::{DocumentProfile, ProfileKind};

use dispatch::ActionTable;
pub use state::{ChapterLink, RenderState};

/// A finished document as handed to the packaging sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    pub key: String,
    pub markup: String,
    pub chapters: Vec<ChapterLink>,
}

/// Renders documents of one profile.
#[derive(Debug)]
pub struct DocumentRenderer {
    profile: DocumentProfile,
    table: ActionTable,
}

impl DocumentRenderer {
    pub fn new(profile: DocumentProfile) -> Self {
        Self {
            table: ActionTable::for_profile(&profile),
            profile,
        }
    }

    pub fn canonical() -> Self {
        Self::new(DocumentProfile::canonical())
    }

    pub fn peripheral() -> Self {
        Self::new(DocumentProfile::peripheral())
    }

    pub fn for_kind(kind: ProfileKind) -> Self {
        Self::new(kind.profile())
    }

    pub fn profile(&self) -> &DocumentProfile {
        &self.profile
    }

    pub fn actions(&self) -> &ActionTable {
        &self.table
    }

    /// Open a session that accepts the events of one document.
    pub fn session<'r>(
        &'r self,
        headers: DocumentHeaders,
        config: &'r RenderConfig,
        doc_set: &'r DocSetState,
        sequences: &'r dyn SequenceSource,
    ) -> RenderSession<'r> {
        RenderSession {
            table: &self.table,
            profile: &self.profile,
            config,
            doc_set,
            sequences,
            document_key: headers.document_key(),
            headers,
            started: false,
            replaying: Vec::new(),
            state: RenderState::new(),
            output: None,
        }
    }

    /// Replay a complete document through a fresh session.
    pub fn render(
        &self,
        document: &SourceDocument,
        config: &RenderConfig,
        doc_set: &DocSetState,
    ) -> Result<RenderedDocument, RenderError> {
        let mut session = self.session(document.headers.clone(), config, doc_set, document);
        for event in &document.events {
            session.dispatch(event)?;
        }
        session.finish()
    }
}

/// Render every document with the renderer of its profile.
///
/// A failing document is reported in its slot; the others still render.
pub fn render_doc_set<'a>(
    documents: impl IntoIterator<Item = &'a SourceDocument>,
    config: &RenderConfig,
    doc_set: &DocSetState,
) -> Vec<(String, Result<RenderedDocument, RenderError>)> {
    let canonical = DocumentRenderer::canonical();
    let peripheral = DocumentRenderer::peripheral();

    documents
        .into_iter()
        .map(|document| {
            let renderer = match document.profile {
                ProfileKind::Canonical => &canonical,
                ProfileKind::Peripheral => &peripheral,
            };
            let result = renderer.render(document, config, doc_set);
            if let Err(e) = &result {
                log::error!("{}: rendering aborted: {e}", document.headers.book_code);
            }
            (document.headers.book_code.clone(), result)
        })
        .collect()
}

/// Rendering of a single document, one event at a time.
pub struct RenderSession<'r> {
    table: &'r ActionTable,
    profile: &'r DocumentProfile,
    config: &'r RenderConfig,
    doc_set: &'r DocSetState,
    sequences: &'r dyn SequenceSource,
    headers: DocumentHeaders,
    document_key: String,
    started: bool,
    /// Ids of the grafted sequences being replayed, outermost first.
    replaying: Vec<String>,
    state: RenderState,
    output: Option<RenderedDocument>,
}

impl<'r> RenderSession<'r> {
    /// Route an event to the first rule of its kind whose predicate matches.
    pub fn dispatch(&mut self, event: &MarkupEvent) -> Result<(), RenderError> {
        if !self.started && event.kind != EventKind::DocumentStart {
            return Err(RenderError::DocumentNotStarted(event.kind));
        }
        let table = self.table;
        match table.first_match(event) {
            Some(action) => action.run(self, event),
            None => Ok(()),
        }
    }

    /// Replay a grafted sequence through this session.
    ///
    /// A sequence may not graft itself, directly or through other sequences.
    pub fn render_sequence(&mut self, sequence_id: &str) -> Result<(), RenderError> {
        if self.replaying.iter().any(|id| id == sequence_id) {
            return Err(RenderError::RecursiveSequence(sequence_id.to_string()));
        }
        let sequences = self.sequences;
        let events = sequences
            .events(sequence_id)
            .ok_or_else(|| RenderError::UnknownSequence(sequence_id.to_string()))?;

        self.replaying.push(sequence_id.to_string());
        let result = events.iter().try_for_each(|event| self.dispatch(event));
        self.replaying.pop();
        result
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut RenderState {
        &mut self.state
    }

    pub fn config(&self) -> &'r RenderConfig {
        self.config
    }

    pub fn profile(&self) -> &'r DocumentProfile {
        self.profile
    }

    pub fn headers(&self) -> &DocumentHeaders {
        &self.headers
    }

    pub fn document_key(&self) -> &str {
        &self.document_key
    }

    /// Report a content anomaly for this document.
    pub fn warn(&self, message: impl Into<String>) {
        self.doc_set.warn(message, &self.headers.book_code);
    }

    /// The composed document; fails when the main sequence never ended.
    pub fn finish(self) -> Result<RenderedDocument, RenderError> {
        self.output
            .ok_or(RenderError::DocumentIncomplete(self.headers.book_code))
    }
}
