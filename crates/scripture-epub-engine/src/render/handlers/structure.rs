use crate::error::RenderError;
use crate::events::{MarkupEvent, SequenceType};
use crate::render::{ChapterLink, RenderSession};

pub fn is_chapter_start(event: &MarkupEvent) -> bool {
    event.is_scope_start() && event.label_after("chapter").is_some()
}

pub fn start_chapter(session: &mut RenderSession<'_>, event: &MarkupEvent) -> Result<(), RenderError> {
    if let Some(label) = event.label_after("chapter") {
        session.state.chapter.start_primary(label);
    }
    Ok(())
}

pub fn is_pub_chapter_start(event: &MarkupEvent) -> bool {
    event.is_scope_start() && event.label_after("pubChapter").is_some()
}

pub fn start_pub_chapter(
    session: &mut RenderSession<'_>,
    event: &MarkupEvent,
) -> Result<(), RenderError> {
    if let Some(label) = event.label_after("pubChapter") {
        session.state.chapter.start_alternate(label);
    }
    Ok(())
}

pub fn is_alt_chapter_start(event: &MarkupEvent) -> bool {
    event.is_scope_start() && event.label_after("altChapter").is_some()
}

pub fn annotate_chapter(
    session: &mut RenderSession<'_>,
    event: &MarkupEvent,
) -> Result<(), RenderError> {
    if let Some(label) = event.label_after("altChapter") {
        session.state.chapter.annotate(label);
    }
    Ok(())
}

pub fn is_verses_start(event: &MarkupEvent) -> bool {
    event.is_scope_start() && event.label_after("verses").is_some()
}

pub fn start_verses(session: &mut RenderSession<'_>, event: &MarkupEvent) -> Result<(), RenderError> {
    if let Some(label) = event.label_after("verses") {
        session.state.verses.start_primary(label);
    }
    Ok(())
}

pub fn is_pub_verse_start(event: &MarkupEvent) -> bool {
    event.is_scope_start() && event.label_after("pubVerse").is_some()
}

pub fn start_pub_verse(
    session: &mut RenderSession<'_>,
    event: &MarkupEvent,
) -> Result<(), RenderError> {
    if let Some(label) = event.label_after("pubVerse") {
        session.state.verses.start_alternate(label);
    }
    Ok(())
}

/// Flush waiting chapter and verse labels ahead of a content token.
///
/// The chapter heading goes to the body, before the block holding the token;
/// the verse marker goes into the current row, right before the token.
pub fn flush_pending(session: &mut RenderSession<'_>, event: &MarkupEvent) -> Result<(), RenderError> {
    if event.sequence != SequenceType::Main || event.is_whitespace_token() {
        return Ok(());
    }
    let state = &mut session.state;
    if state.chapter.is_waiting() {
        let label = state.chapter.flush()?;
        state
            .chapters
            .push(ChapterLink::new(label.id.as_str(), label.display.as_str()));
        state.body.push(label.heading());
    }
    if state.verses.is_waiting() {
        let marker = state.verses.flush()?;
        state.stack.append(marker);
    }
    Ok(())
}
