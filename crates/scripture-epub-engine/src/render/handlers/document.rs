use crate::error::RenderError;
use crate::events::{MarkupEvent, SequenceType};
use crate::render::assembler::{self, Composition};
use crate::render::{RenderSession, RenderState, RenderedDocument};

/// Reset per-document state, build the head and register the book titles.
///
/// The `<title>` always comes from the `h` header; the peripheral title only
/// feeds the registry.
pub fn start_document(session: &mut RenderSession<'_>, _event: &MarkupEvent) -> Result<(), RenderError> {
    let titles = session.headers.titles(session.profile.title_source);

    session.state = RenderState::new();
    session.state.head =
        assembler::head(session.profile, session.config, session.headers.heading());
    session.output = None;
    session.started = true;

    log::debug!("{}: rendering started", session.headers.book_code);
    session.doc_set.record_titles(&session.headers.book_code, titles);
    Ok(())
}

pub fn is_main_end(event: &MarkupEvent) -> bool {
    event.sequence == SequenceType::Main
}

pub fn is_introduction_end(event: &MarkupEvent) -> bool {
    event.sequence == SequenceType::Introduction
}

/// Compose the document and hand it to the packaging sink.
pub fn compose_document(
    session: &mut RenderSession<'_>,
    _event: &MarkupEvent,
) -> Result<(), RenderError> {
    let depth = session.state.stack.depth();
    if depth != 1 {
        return Err(RenderError::UnbalancedStack { depth });
    }

    let profile = session.profile;
    let state = &session.state;
    let markup = Composition {
        direction: assembler::direction(profile, session.config, &session.headers),
        head: &state.head,
        chapters: profile.chapter_navigation.then_some(state.chapters.as_slice()),
        body_head: &state.body_head,
        body: &state.body,
        footnotes: &state.footnotes,
    }
    .compose();

    session.doc_set.store(&session.document_key, &markup);
    log::debug!(
        "{}: stored {} ({} chapters, {} bytes)",
        session.headers.book_code,
        session.document_key,
        state.chapters.len(),
        markup.len()
    );
    session.output = Some(RenderedDocument {
        key: session.document_key.clone(),
        markup,
        chapters: state.chapters.clone(),
    });
    Ok(())
}

pub fn separate_introduction(
    session: &mut RenderSession<'_>,
    _event: &MarkupEvent,
) -> Result<(), RenderError> {
    session.state.body.push("<hr/>\n".to_string());
    Ok(())
}
