use serde::{Deserialize, Serialize};

/// Where a document's entry in the title registry comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    /// `h`, `toc`, `toc2` and `toc3` headers.
    Headers,
    /// The peripheral title, repeated for every slot.
    Peripheral,
}

/// Capabilities of one kind of document.
///
/// The action table registers a rule only when the profile enables the
/// capability it implements; every profile shares the same handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentProfile {
    pub chapters: bool,
    pub verses: bool,
    /// Cross references are collected with footnotes.
    pub xref_notes: bool,
    pub table_cells: bool,
    pub glossary_links: bool,
    pub custom_css: bool,
    pub chapter_navigation: bool,
    /// Separate the introduction from the main text with a rule.
    pub introduction_separator: bool,
    /// Honour `reversed_document_ids` when picking the text direction.
    pub reversible_direction: bool,
    pub title_source: TitleSource,
}

impl DocumentProfile {
    /// A canonical book with chapters and verses.
    pub const fn canonical() -> Self {
        Self {
            chapters: true,
            verses: true,
            xref_notes: true,
            table_cells: false,
            glossary_links: true,
            custom_css: true,
            chapter_navigation: true,
            introduction_separator: true,
            reversible_direction: false,
            title_source: TitleSource::Headers,
        }
    }

    /// Front or back matter: no chapter structure, may contain tables.
    pub const fn peripheral() -> Self {
        Self {
            chapters: false,
            verses: false,
            xref_notes: false,
            table_cells: true,
            glossary_links: true,
            custom_css: false,
            chapter_navigation: false,
            introduction_separator: false,
            reversible_direction: true,
            title_source: TitleSource::Peripheral,
        }
    }
}

/// Named profiles, as selected by hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileKind {
    #[default]
    Canonical,
    Peripheral,
}

impl ProfileKind {
    pub fn profile(self) -> DocumentProfile {
        match self {
            ProfileKind::Canonical => DocumentProfile::canonical(),
            ProfileKind::Peripheral => DocumentProfile::peripheral(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_selected_by_name() {
        let kind: ProfileKind = serde_json::from_str("\"peripheral\"").unwrap();
        assert_eq!(kind.profile(), DocumentProfile::peripheral());
        assert_eq!(ProfileKind::default().profile(), DocumentProfile::canonical());
    }

    #[test]
    fn peripherals_take_titles_from_their_id() {
        let profile = DocumentProfile::peripheral();
        assert_eq!(profile.title_source, TitleSource::Peripheral);
        assert!(profile.reversible_direction);
        assert!(!profile.chapters);
    }
}
