use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// How French-style spacing around high punctuation is applied to tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrenchSpacing {
    /// Tokens are escaped and appended verbatim.
    #[default]
    Off,
    /// A non-breaking space is inserted next to the punctuation.
    Add,
    /// An existing trailing space before the punctuation is made non-breaking.
    Change,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            TextDirection::Ltr => TextDirection::Rtl,
            TextDirection::Rtl => TextDirection::Ltr,
        }
    }
}

/// Read-only configuration consulted while rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Glossary term (or lemma) to glossary entry index.
    pub glossary_terms: HashMap<String, u32>,
    /// Glossary entry index to the aside id in the glossary notes document.
    pub glossary_n_to_aside: HashMap<u32, String>,
    pub french_spacing: FrenchSpacing,
    pub text_direction: TextDirection,
    /// Documents rendered against the configured direction.
    pub reversed_document_ids: HashSet<String>,
    /// Link the optional custom stylesheet from document heads.
    pub custom_css: bool,
}

impl RenderConfig {
    pub fn with_french_spacing(mut self, mode: FrenchSpacing) -> Self {
        self.french_spacing = mode;
        self
    }

    pub fn with_text_direction(mut self, direction: TextDirection) -> Self {
        self.text_direction = direction;
        self
    }

    /// Register a glossary term and the aside its index points to.
    pub fn with_glossary_term(
        mut self,
        term: impl Into<String>,
        index: u32,
        aside: impl Into<String>,
    ) -> Self {
        self.glossary_terms.insert(term.into(), index);
        self.glossary_n_to_aside.insert(index, aside.into());
        self
    }

    pub fn with_reversed_document(mut self, book_code: impl Into<String>) -> Self {
        self.reversed_document_ids.insert(book_code.into());
        self
    }

    pub fn with_custom_css(mut self, custom_css: bool) -> Self {
        self.custom_css = custom_css;
        self
    }
}
