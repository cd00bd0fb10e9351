use serde::Serialize;

use super::footnotes::FootnoteCollector;
use super::stack::RenderStack;
use super::trackers::{ChapterTracker, VerseTracker};

/// One entry of a document's chapter navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterLink {
    pub id: String,
    pub label: String,
}

impl ChapterLink {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Everything accumulated while rendering one document.
///
/// Created fresh at document start and never shared between documents.
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub stack: RenderStack,
    pub head: Vec<String>,
    pub body_head: Vec<String>,
    pub body: Vec<String>,
    pub footnotes: FootnoteCollector,
    pub chapter: ChapterTracker,
    pub verses: VerseTracker,
    pub chapters: Vec<ChapterLink>,
    /// Lemma of the glossary word being rendered. A single slot: nested
    /// glossary words share it.
    pub pending_glossary_lemma: Option<String>,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }
}
