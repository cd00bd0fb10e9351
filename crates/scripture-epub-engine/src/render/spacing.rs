//! French-style spacing around high punctuation.
//!
//! In `add` mode the space is emitted together with the punctuation token.
//! In `change` mode the punctuation is appended unchanged and the trailing
//! space already sitting in the top row is rewritten in place. That rewrite
//! only ever touches the last fragment of the top row.

use crate::config::FrenchSpacing;

pub const NARROW_NBSP: &str = "&#8239;";
pub const NBSP: &str = "&#160;";

/// Punctuation preceded by a narrow no-break space.
const NARROW_SPACED: [&str; 3] = [";", "!", "?"];
/// Punctuation preceded by a full no-break space.
const WIDE_SPACED: [&str; 2] = [":", "»"];
/// Punctuation followed by a full no-break space.
const OPENING_QUOTE: &str = "«";

#[derive(Debug, Clone, Copy)]
pub struct PunctuationSpacer {
    mode: FrenchSpacing,
}

impl PunctuationSpacer {
    pub fn new(mode: FrenchSpacing) -> Self {
        Self { mode }
    }

    /// Text to append for a token. May rewrite the last fragment of `top_row`.
    pub fn render(&self, sub_type: &str, text: &str, top_row: &mut [String]) -> String {
        if matches!(sub_type, "lineSpace" | "eol") {
            return " ".to_string();
        }
        match self.mode {
            FrenchSpacing::Off => escape(text),
            FrenchSpacing::Add => {
                if NARROW_SPACED.contains(&text) {
                    format!("{NARROW_NBSP}{text}")
                } else if WIDE_SPACED.contains(&text) {
                    format!("{NBSP}{text}")
                } else if text == OPENING_QUOTE {
                    format!("{text}{NBSP}")
                } else {
                    text.to_string()
                }
            }
            FrenchSpacing::Change => {
                if NARROW_SPACED.contains(&text) {
                    respace_last(top_row, NARROW_NBSP);
                    text.to_string()
                } else if WIDE_SPACED.contains(&text) {
                    respace_last(top_row, NBSP);
                    text.to_string()
                } else {
                    escape(text)
                }
            }
        }
    }
}

fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Replace one trailing space of the last fragment. An empty row is left alone.
fn respace_last(row: &mut [String], space: &str) {
    if let Some(last) = row.last_mut()
        && last.ends_with(' ')
    {
        last.pop();
        last.push_str(space);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn render(mode: FrenchSpacing, text: &str, row: &mut Vec<String>) -> String {
        PunctuationSpacer::new(mode).render("punctuation", text, row)
    }

    #[rstest]
    #[case(FrenchSpacing::Off)]
    #[case(FrenchSpacing::Add)]
    #[case(FrenchSpacing::Change)]
    fn line_space_is_a_single_space(#[case] mode: FrenchSpacing) {
        let mut row = vec!["word".to_string()];
        let spacer = PunctuationSpacer::new(mode);
        assert_eq!(spacer.render("lineSpace", "\t", &mut row), " ");
        assert_eq!(spacer.render("eol", "\n", &mut row), " ");
        assert_eq!(row, vec!["word".to_string()]);
    }

    #[test]
    fn off_escapes_markup_characters() {
        let mut row = Vec::new();
        assert_eq!(
            render(FrenchSpacing::Off, "a<b>&c", &mut row),
            "a&lt;b&gt;&amp;c"
        );
        assert_eq!(render(FrenchSpacing::Off, "!", &mut row), "!");
    }

    #[rstest]
    #[case(";", "&#8239;;")]
    #[case("!", "&#8239;!")]
    #[case("?", "&#8239;?")]
    #[case(":", "&#160;:")]
    #[case("»", "&#160;»")]
    #[case("«", "«&#160;")]
    #[case("word", "word")]
    #[case("a&b", "a&b")]
    fn add_mode(#[case] token: &str, #[case] expected: &str) {
        let mut row = vec!["Hello ".to_string()];
        assert_eq!(render(FrenchSpacing::Add, token, &mut row), expected);
        assert_eq!(row, vec!["Hello ".to_string()]);
    }

    #[rstest]
    #[case("!", "Hello&#8239;")]
    #[case(";", "Hello&#8239;")]
    #[case(":", "Hello&#160;")]
    #[case("»", "Hello&#160;")]
    fn change_mode_rewrites_the_trailing_space(#[case] token: &str, #[case] rewritten: &str) {
        let mut row = vec!["Hello ".to_string()];
        assert_eq!(render(FrenchSpacing::Change, token, &mut row), token);
        assert_eq!(row, vec![rewritten.to_string()]);
    }

    #[test]
    fn change_mode_only_strips_one_space() {
        let mut row = vec!["a".to_string(), "  ".to_string()];
        render(FrenchSpacing::Change, "?", &mut row);
        assert_eq!(row, vec!["a".to_string(), " &#8239;".to_string()]);
    }

    #[test]
    fn change_mode_without_trailing_space_keeps_the_fragment() {
        let mut row = vec!["Hello".to_string()];
        assert_eq!(render(FrenchSpacing::Change, "!", &mut row), "!");
        assert_eq!(row, vec!["Hello".to_string()]);
    }

    #[test]
    fn change_mode_on_an_empty_row_skips_the_rewrite() {
        let mut row = Vec::new();
        assert_eq!(render(FrenchSpacing::Change, "!", &mut row), "!");
        assert!(row.is_empty());
    }

    #[test]
    fn change_mode_escapes_other_tokens() {
        let mut row = Vec::new();
        assert_eq!(render(FrenchSpacing::Change, "<i>", &mut row), "&lt;i&gt;");
    }
}
