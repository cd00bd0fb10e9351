use crate::error::RenderError;
use crate::events::MarkupEvent;
use crate::render::RenderSession;

/// Character markers rendered as `<span class="{tag}">`.
const CHARACTER_TAGS: [&str; 26] = [
    "add", "bd", "bk", "dc", "em", "fdc", "ft", "fq", "fqa", "fr", "fv", "it", "k", "nd", "ord",
    "pn", "qac", "qs", "sc", "qt", "sls", "tl", "wj", "xdc", "xo", "xt",
];

pub fn is_span(event: &MarkupEvent) -> bool {
    event.payload.starts_with("span")
}

pub fn is_character_span(event: &MarkupEvent) -> bool {
    is_span(event)
        && event
            .segment(1)
            .is_some_and(|tag| CHARACTER_TAGS.contains(&tag))
}

pub fn character_span(session: &mut RenderSession<'_>, event: &MarkupEvent) -> Result<(), RenderError> {
    if event.is_scope_start() {
        session.state.stack.push();
        return Ok(());
    }
    let content = session.state.stack.pop()?;
    let tag = event.segment(1).unwrap_or_default();
    session
        .state
        .stack
        .append(format!("<span class=\"{tag}\">{content}</span>"));
    Ok(())
}

pub fn is_cell(event: &MarkupEvent) -> bool {
    event.payload.starts_with("cell/")
}

/// `cell/<role>/<alignment>/…` → fixed-width cell span.
pub fn table_cell(session: &mut RenderSession<'_>, event: &MarkupEvent) -> Result<(), RenderError> {
    if event.is_scope_start() {
        session.state.stack.push();
        return Ok(());
    }
    let content = session.state.stack.pop()?;
    let role = if event.segment(1) == Some("colHeading") {
        "cellHeading"
    } else {
        "cell"
    };
    let alignment = if event.segment(2) == Some("left") {
        "Left"
    } else {
        "Right"
    };
    session
        .state
        .stack
        .append(format!("<span class=\"{role}{alignment}\">{content}</span>"));
    Ok(())
}

/// Fallback for spans no other rule recognised: warn once, render nothing.
pub fn warn_unhandled_span(
    session: &mut RenderSession<'_>,
    event: &MarkupEvent,
) -> Result<(), RenderError> {
    if event.is_scope_start() {
        session.warn(format!("Unhandled span '{}'", event.payload));
    }
    Ok(())
}
