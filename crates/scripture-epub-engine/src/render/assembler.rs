//! Final XHTML composition.

use crate::config::{RenderConfig, TextDirection};
use crate::document::DocumentHeaders;
use crate::profile::DocumentProfile;

use super::footnotes::FootnoteCollector;
use super::state::ChapterLink;

const STYLESHEET: &str = "../../CSS/styles.css";
const CUSTOM_STYLESHEET: &str = "../../CSS/custom.css";
const TOC_HREF: &str = "../../toc.xhtml";

/// Head fragments of a document, in output order.
pub fn head(profile: &DocumentProfile, config: &RenderConfig, title: &str) -> Vec<String> {
    let mut head = vec![
        "<meta charset=\"utf-8\"/>\n".to_string(),
        format!("<link type=\"text/css\" rel=\"stylesheet\" href=\"{STYLESHEET}\" />\n"),
    ];
    if profile.custom_css && config.custom_css {
        head.push(format!(
            "<link type=\"text/css\" rel=\"stylesheet\" href=\"{CUSTOM_STYLESHEET}\" />\n"
        ));
    }
    head.push(format!("<title>{}</title>", html_escape::encode_text(title)));
    head
}

/// The configured direction, flipped for reversed documents when the profile allows it.
pub fn direction(
    profile: &DocumentProfile,
    config: &RenderConfig,
    headers: &DocumentHeaders,
) -> TextDirection {
    if profile.reversible_direction && config.reversed_document_ids.contains(&headers.book_code) {
        config.text_direction.reversed()
    } else {
        config.text_direction
    }
}

pub fn chapter_navigation(chapters: &[ChapterLink]) -> String {
    let mut nav = format!(
        "<div class=\"chapter_nav\"><span class=\"chapter_link\"><a href=\"{TOC_HREF}\">^</a></span>"
    );
    for chapter in chapters {
        nav.push_str(&format!(
            " <span class=\"chapter_link\"><a href=\"#chapter_{}\">{}</a></span>",
            chapter.id, chapter.label
        ));
    }
    nav.push_str("</div>\n");
    nav
}

/// Parts of a finished document.
#[derive(Debug, Clone, Copy)]
pub struct Composition<'a> {
    pub direction: TextDirection,
    pub head: &'a [String],
    /// `None` when the profile has no chapter navigation.
    pub chapters: Option<&'a [ChapterLink]>,
    pub body_head: &'a [String],
    pub body: &'a [String],
    pub footnotes: &'a FootnoteCollector,
}

impl Composition<'_> {
    pub fn compose(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n");
        out.push_str(&format!(
            "<html xmlns=\"http://www.w3.org/1999/xhtml\" xmlns:epub=\"http://www.idpf.org/2007/ops\" dir=\"{}\">\n",
            self.direction.as_str()
        ));
        out.push_str(&format!("<head>\n{}\n</head>\n", self.head.concat()));
        out.push_str("<body id=\"top\">\n");
        if let Some(chapters) = self.chapters
            && !chapters.is_empty()
        {
            out.push_str(&chapter_navigation(chapters));
        }
        out.push_str(&format!("<header>\n{}\n</header>\n", self.body_head.concat()));
        out.push_str("<section epub:type=\"bodymatter\">\n");
        out.push_str(&self.body.concat());
        out.push_str("\n</section>\n");
        out.push_str(&self.footnotes.asides());
        out.push_str("</body>\n</html>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn head_includes_custom_css_only_when_both_allow_it() {
        let config = RenderConfig::default().with_custom_css(true);

        let canonical = head(&DocumentProfile::canonical(), &config, "Mark");
        assert_eq!(canonical.len(), 4);
        assert!(canonical[2].contains("custom.css"));

        let peripheral = head(&DocumentProfile::peripheral(), &config, "Glossary");
        assert_eq!(peripheral.len(), 3);

        let without = head(&DocumentProfile::canonical(), &RenderConfig::default(), "Mark");
        assert_eq!(without.len(), 3);
    }

    #[test]
    fn title_is_escaped() {
        let fragments = head(&DocumentProfile::canonical(), &RenderConfig::default(), "A & B");
        assert_eq!(fragments.last().map(String::as_str), Some("<title>A &amp; B</title>"));
    }

    #[test]
    fn direction_flips_only_for_reversible_profiles() {
        let config = RenderConfig::default()
            .with_text_direction(TextDirection::Ltr)
            .with_reversed_document("GLO");
        let headers = DocumentHeaders::new("GLO");

        assert_eq!(
            direction(&DocumentProfile::peripheral(), &config, &headers),
            TextDirection::Rtl
        );
        assert_eq!(
            direction(&DocumentProfile::canonical(), &config, &headers),
            TextDirection::Ltr
        );
        assert_eq!(
            direction(&DocumentProfile::peripheral(), &config, &DocumentHeaders::new("FRT")),
            TextDirection::Ltr
        );
    }

    #[test]
    fn navigation_links_every_chapter() {
        let chapters = vec![ChapterLink::new("1", "1"), ChapterLink::new("2_1", "B")];
        assert_eq!(
            chapter_navigation(&chapters),
            concat!(
                "<div class=\"chapter_nav\"><span class=\"chapter_link\"><a href=\"../../toc.xhtml\">^</a></span>",
                " <span class=\"chapter_link\"><a href=\"#chapter_1\">1</a></span>",
                " <span class=\"chapter_link\"><a href=\"#chapter_2_1\">B</a></span>",
                "</div>\n",
            )
        );
    }

    #[test]
    fn compose_without_chapters() {
        let mut footnotes = FootnoteCollector::default();
        footnotes.collect("note".to_string());
        let head = vec!["<title>T</title>".to_string()];
        let body_head = vec!["<h1 class=\"mt\">T</h1>\n".to_string()];
        let body = vec!["<div class=\"p\">x</div>\n".to_string()];

        let markup = Composition {
            direction: TextDirection::Ltr,
            head: &head,
            chapters: Some(&[]),
            body_head: &body_head,
            body: &body,
            footnotes: &footnotes,
        }
        .compose();

        assert_eq!(
            markup,
            concat!(
                "<!DOCTYPE html>\n",
                "<html xmlns=\"http://www.w3.org/1999/xhtml\" xmlns:epub=\"http://www.idpf.org/2007/ops\" dir=\"ltr\">\n",
                "<head>\n<title>T</title>\n</head>\n",
                "<body id=\"top\">\n",
                "<header>\n<h1 class=\"mt\">T</h1>\n\n</header>\n",
                "<section epub:type=\"bodymatter\">\n",
                "<div class=\"p\">x</div>\n",
                "\n</section>\n",
                "<aside epub:type=\"footnote\" id=\"footnote_1\" class=\"footnote_number\"><p>note</p></aside>\n",
                "</body>\n</html>\n",
            )
        );
    }
}
