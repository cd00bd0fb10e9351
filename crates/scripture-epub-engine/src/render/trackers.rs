//! Deferred chapter and verse labels.
//!
//! A structural scope start only records its label. The label is flushed by
//! the next content token of the main sequence, so the heading lands right
//! before the text it introduces rather than wherever the scope opened.

use crate::error::RenderError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrackerState {
    #[default]
    Idle,
    Waiting,
}

/// A chapter label ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterLabel {
    pub id: String,
    pub display: String,
    pub annotation: Option<String>,
}

impl ChapterLabel {
    pub fn heading(&self) -> String {
        let float = match &self.annotation {
            Some(annotation) => format!(
                "{}<br/><span class=\"altChapter\">({annotation})</span>",
                self.display
            ),
            None => self.display.clone(),
        };
        format!(
            "<h3 id=\"chapter_{}\" class=\"chapter\"><a href=\"#top\">{float}</a></h3>\n",
            self.id
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChapterTracker {
    state: TrackerState,
    primary: Option<String>,
    alternate: Option<String>,
    alternate_count: u32,
    annotation: Option<String>,
    chapter_count: u32,
}

impl ChapterTracker {
    /// `chapter/<label>`: replaces any label still waiting to be flushed.
    pub fn start_primary(&mut self, label: &str) {
        self.primary = Some(label.to_string());
        self.alternate = None;
        self.alternate_count = 0;
        self.annotation = None;
        self.chapter_count += 1;
        self.state = TrackerState::Waiting;
    }

    /// `pubChapter/<label>`: the published numbering shown instead of the primary label.
    pub fn start_alternate(&mut self, label: &str) {
        self.alternate = Some(label.to_string());
        self.alternate_count += 1;
    }

    /// `altChapter/<label>`: a secondary label shown under the heading.
    pub fn annotate(&mut self, label: &str) {
        self.annotation = Some(label.to_string());
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn is_waiting(&self) -> bool {
        self.state == TrackerState::Waiting
    }

    pub fn chapter_count(&self) -> u32 {
        self.chapter_count
    }

    pub fn flush(&mut self) -> Result<ChapterLabel, RenderError> {
        if self.state != TrackerState::Waiting {
            return Err(RenderError::TrackerNotWaiting { tracker: "chapter" });
        }
        self.state = TrackerState::Idle;

        let primary = self.primary.clone().unwrap_or_default();
        let display = self.alternate.clone().unwrap_or_else(|| primary.clone());
        let id = if self.alternate_count > 0 {
            format!("{primary}_{}", self.alternate_count)
        } else {
            primary
        };
        Ok(ChapterLabel {
            id,
            display,
            annotation: self.annotation.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct VerseTracker {
    state: TrackerState,
    primary: Option<String>,
    alternate: Option<String>,
    verse_count: u32,
}

impl VerseTracker {
    /// `verses/<label>`: replaces any label still waiting to be flushed.
    pub fn start_primary(&mut self, label: &str) {
        self.primary = Some(label.to_string());
        self.alternate = None;
        self.verse_count += 1;
        self.state = TrackerState::Waiting;
    }

    /// `pubVerse/<label>`
    pub fn start_alternate(&mut self, label: &str) {
        self.alternate = Some(label.to_string());
        self.verse_count += 1;
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn is_waiting(&self) -> bool {
        self.state == TrackerState::Waiting
    }

    pub fn verse_count(&self) -> u32 {
        self.verse_count
    }

    /// Flush the pending label as the verse number marker.
    pub fn flush(&mut self) -> Result<String, RenderError> {
        if self.state != TrackerState::Waiting {
            return Err(RenderError::TrackerNotWaiting { tracker: "verse" });
        }
        self.state = TrackerState::Idle;

        let label = self
            .alternate
            .as_deref()
            .or(self.primary.as_deref())
            .unwrap_or_default();
        Ok(format!("<span class=\"verses\">{label}</span>&#160;"))
    }
}
