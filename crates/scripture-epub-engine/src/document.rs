use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::docset::BookTitles;
use crate::events::MarkupEvent;
use crate::profile::{ProfileKind, TitleSource};

/// Headers of the document being rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHeaders {
    pub book_code: String,
    #[serde(default)]
    pub h: Option<String>,
    #[serde(default)]
    pub toc: Option<String>,
    #[serde(default)]
    pub toc2: Option<String>,
    #[serde(default)]
    pub toc3: Option<String>,
    /// Title of a peripheral document, taken from its id.
    #[serde(default)]
    pub periph_title: Option<String>,
}

impl DocumentHeaders {
    pub fn new(book_code: impl Into<String>) -> Self {
        Self {
            book_code: book_code.into(),
            ..Self::default()
        }
    }

    pub fn with_heading(mut self, h: impl Into<String>) -> Self {
        self.h = Some(h.into());
        self
    }

    pub fn with_toc(
        mut self,
        toc: impl Into<String>,
        toc2: impl Into<String>,
        toc3: impl Into<String>,
    ) -> Self {
        self.toc = Some(toc.into());
        self.toc2 = Some(toc2.into());
        self.toc3 = Some(toc3.into());
        self
    }

    pub fn with_periph_title(mut self, title: impl Into<String>) -> Self {
        self.periph_title = Some(title.into());
        self
    }

    /// Stable key under which the finished document is stored.
    pub fn document_key(&self) -> String {
        format!("OEBPS/XHTML/{code}/{code}.xhtml", code = self.book_code)
    }

    pub fn heading(&self) -> &str {
        self.h.as_deref().unwrap_or_default()
    }

    pub fn titles(&self, source: TitleSource) -> BookTitles {
        match source {
            TitleSource::Headers => BookTitles {
                heading: self.heading().to_string(),
                long: self.toc.clone().unwrap_or_default(),
                short: self.toc2.clone().unwrap_or_default(),
                abbreviation: self.toc3.clone().unwrap_or_default(),
            },
            TitleSource::Peripheral => {
                BookTitles::repeated(self.periph_title.as_deref().unwrap_or_default())
            }
        }
    }
}

/// Looks up the events of a grafted sequence so they can be replayed.
pub trait SequenceSource {
    fn events(&self, sequence_id: &str) -> Option<&[MarkupEvent]>;
}

impl SequenceSource for HashMap<String, Vec<MarkupEvent>> {
    fn events(&self, sequence_id: &str) -> Option<&[MarkupEvent]> {
        self.get(sequence_id).map(Vec::as_slice)
    }
}

/// A complete document: its main event stream and every grafted sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDocument {
    pub headers: DocumentHeaders,
    #[serde(default)]
    pub profile: ProfileKind,
    pub events: Vec<MarkupEvent>,
    #[serde(default)]
    pub sequences: HashMap<String, Vec<MarkupEvent>>,
}

impl SourceDocument {
    pub fn new(headers: DocumentHeaders, profile: ProfileKind) -> Self {
        Self {
            headers,
            profile,
            ..Self::default()
        }
    }

    pub fn with_events(mut self, events: impl IntoIterator<Item = MarkupEvent>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn with_sequence(
        mut self,
        sequence_id: impl Into<String>,
        events: impl IntoIterator<Item = MarkupEvent>,
    ) -> Self {
        self.sequences
            .insert(sequence_id.into(), events.into_iter().collect());
        self
    }
}

impl SequenceSource for SourceDocument {
    fn events(&self, sequence_id: &str) -> Option<&[MarkupEvent]> {
        self.sequences.events(sequence_id)
    }
}
