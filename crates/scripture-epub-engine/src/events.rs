//! # Markup Events
//!
//! The renderer consumes a flat, ordered stream of typed events produced by
//! a scripture-text parser. Nesting is expressed by start/end pairs rather
//! than by a tree:
//!
//! ```text
//! DocumentStart
//! BlockStart(blockTag/p)          ← push a stack row
//!   Scope start(chapter/3)        ← buffered until the next content token
//!   Scope start(span/add)         ← push a stack row
//!     Token(wordLike, "In")
//!   Scope end(span/add)           ← pop, wrap, append to parent row
//!   InlineGraft(footnote, seq-7)  ← replay sequence seq-7 synchronously
//! BlockEnd(blockTag/p)            ← pop, emit <div class="p">
//! SequenceEnd                     ← compose the document
//! ```
//!
//! Payloads are slash-delimited paths. Block events carry the block scope
//! (`blockTag/p`) and grafts carry the id of the referenced sequence.

use serde::{Deserialize, Serialize};

/// The kind of a [`MarkupEvent`]; each kind has its own action list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    DocumentStart,
    SequenceEnd,
    BlockGraft,
    InlineGraft,
    BlockStart,
    BlockEnd,
    Scope,
    Token,
}

/// The type of the sequence an event belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SequenceType {
    #[default]
    Main,
    Introduction,
    Title,
    Heading,
    Footnote,
    Xref,
    /// Any sequence type the renderer has no rules for.
    #[serde(untagged)]
    Other(String),
}

/// Sub type of a scope event that opens a span.
pub const SCOPE_START: &str = "start";
/// Sub type of a scope event that closes a span.
pub const SCOPE_END: &str = "end";

/// A single event of the markup stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkupEvent {
    pub kind: EventKind,
    #[serde(default)]
    pub sub_type: String,
    #[serde(default)]
    pub payload: String,
    #[serde(default)]
    pub sequence: SequenceType,
}

impl MarkupEvent {
    pub fn new(
        kind: EventKind,
        sequence: SequenceType,
        sub_type: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            sub_type: sub_type.into(),
            payload: payload.into(),
            sequence,
        }
    }

    pub fn document_start() -> Self {
        Self::new(EventKind::DocumentStart, SequenceType::Main, "", "")
    }

    pub fn sequence_end(sequence: SequenceType) -> Self {
        Self::new(EventKind::SequenceEnd, sequence, "", "")
    }

    /// Start of a block; `scope` is the block scope path, e.g. `blockTag/p`.
    pub fn block_start(sequence: SequenceType, scope: impl Into<String>) -> Self {
        Self::new(EventKind::BlockStart, sequence, "", scope)
    }

    pub fn block_end(sequence: SequenceType, scope: impl Into<String>) -> Self {
        Self::new(EventKind::BlockEnd, sequence, "", scope)
    }

    pub fn scope_start(sequence: SequenceType, payload: impl Into<String>) -> Self {
        Self::new(EventKind::Scope, sequence, SCOPE_START, payload)
    }

    pub fn scope_end(sequence: SequenceType, payload: impl Into<String>) -> Self {
        Self::new(EventKind::Scope, sequence, SCOPE_END, payload)
    }

    /// A token; `sub_type` is the lexer class (`wordLike`, `punctuation`,
    /// `lineSpace`, `eol`).
    pub fn token(
        sequence: SequenceType,
        sub_type: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(EventKind::Token, sequence, sub_type, text)
    }

    pub fn word(sequence: SequenceType, text: impl Into<String>) -> Self {
        Self::token(sequence, "wordLike", text)
    }

    pub fn punctuation(sequence: SequenceType, text: impl Into<String>) -> Self {
        Self::token(sequence, "punctuation", text)
    }

    pub fn line_space(sequence: SequenceType) -> Self {
        Self::token(sequence, "lineSpace", " ")
    }

    /// A graft of another sequence into the current inline content.
    pub fn inline_graft(
        sequence: SequenceType,
        sub_type: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::new(EventKind::InlineGraft, sequence, sub_type, target)
    }

    /// A graft of another sequence between blocks.
    pub fn block_graft(
        sequence: SequenceType,
        sub_type: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::new(EventKind::BlockGraft, sequence, sub_type, target)
    }

    pub fn is_scope_start(&self) -> bool {
        self.sub_type == SCOPE_START
    }

    /// Whether this is a whitespace token that never triggers deferred output.
    pub fn is_whitespace_token(&self) -> bool {
        self.kind == EventKind::Token && matches!(self.sub_type.as_str(), "lineSpace" | "eol")
    }

    /// The `index`th segment of the slash-delimited payload.
    pub fn segment(&self, index: usize) -> Option<&str> {
        self.payload.split('/').nth(index)
    }

    /// The final segment of the payload, e.g. the value of an attribute path.
    pub fn last_segment(&self) -> &str {
        self.payload.rsplit('/').next().unwrap_or_default()
    }

    /// The label following a structural prefix: `chapter/3` → `3`.
    pub fn label_after(&self, prefix: &str) -> Option<&str> {
        self.payload
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('/'))
            .map(|rest| rest.split('/').next().unwrap_or(rest))
    }

    /// The id of the sequence referenced by a graft event.
    pub fn graft_target(&self) -> &str {
        &self.payload
    }
}
