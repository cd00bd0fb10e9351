//! Glossary cross references.
//!
//! A glossary word is keyed by its lemma attribute when present, otherwise by
//! its rendered content. The attribute scope arrives after the word's own
//! start, so the lemma slot is cleared on start and filled afterwards.

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::events::MarkupEvent;
use crate::render::RenderSession;

pub fn is_lemma_attribute(event: &MarkupEvent) -> bool {
    event.is_scope_start() && event.payload.starts_with("attribute/spanWithAtts/w/lemma")
}

pub fn capture_lemma(session: &mut RenderSession<'_>, event: &MarkupEvent) -> Result<(), RenderError> {
    session.state.pending_glossary_lemma = Some(event.last_segment().to_string());
    Ok(())
}

pub fn is_glossary_word(event: &MarkupEvent) -> bool {
    event.payload == "spanWithAtts/w"
}

pub fn glossary_word(session: &mut RenderSession<'_>, event: &MarkupEvent) -> Result<(), RenderError> {
    if event.is_scope_start() {
        session.state.stack.push();
        session.state.pending_glossary_lemma = None;
        return Ok(());
    }

    let content = session.state.stack.pop()?;
    let key = session
        .state
        .pending_glossary_lemma
        .clone()
        .unwrap_or_else(|| content.clone());
    session.state.stack.append(content);

    match glossary_marker(session.config, &key)? {
        Some(marker) => session.state.stack.append(marker),
        None => session.warn(format!("Unresolved glossary term '{key}'")),
    }
    Ok(())
}

/// The noteref for `key`, if it names a glossary entry.
pub fn glossary_marker(config: &RenderConfig, key: &str) -> Result<Option<String>, RenderError> {
    let Some(&index) = config.glossary_terms.get(key) else {
        return Ok(None);
    };
    let aside = config
        .glossary_n_to_aside
        .get(&index)
        .ok_or(RenderError::MissingGlossaryAside { index })?;
    Ok(Some(format!(
        "<a epub:type=\"noteref\" class=\"glossaryLink\" href=\"../glossary_notes.xhtml#glo_{aside}\">*</a>"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_targets_the_aside() {
        let config = RenderConfig::default().with_glossary_term("agape", 2, "g2");
        let marker = glossary_marker(&config, "agape").unwrap().unwrap();
        assert!(marker.ends_with("href=\"../glossary_notes.xhtml#glo_g2\">*</a>"));
    }

    #[test]
    fn unknown_terms_have_no_marker() {
        let config = RenderConfig::default().with_glossary_term("agape", 2, "g2");
        assert_eq!(glossary_marker(&config, "eros"), Ok(None));
    }

    #[test]
    fn index_without_aside_is_an_invariant_violation() {
        let mut config = RenderConfig::default();
        config.glossary_terms.insert("agape".to_string(), 7);
        assert_eq!(
            glossary_marker(&config, "agape"),
            Err(RenderError::MissingGlossaryAside { index: 7 })
        );
    }
}
