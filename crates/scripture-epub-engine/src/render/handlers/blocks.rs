use crate::error::RenderError;
use crate::events::{MarkupEvent, SequenceType};
use crate::render::RenderSession;

/// Block grafts whose sequences are rendered in place.
const FOLLOWED_GRAFTS: [&str; 3] = ["title", "heading", "introduction"];

pub fn is_followed_graft(event: &MarkupEvent) -> bool {
    FOLLOWED_GRAFTS.contains(&event.sub_type.as_str())
}

pub fn follow_block_graft(
    session: &mut RenderSession<'_>,
    event: &MarkupEvent,
) -> Result<(), RenderError> {
    session.render_sequence(event.graft_target())
}

pub fn start_block(session: &mut RenderSession<'_>, _event: &MarkupEvent) -> Result<(), RenderError> {
    session.state.stack.push();
    Ok(())
}

pub fn in_title(event: &MarkupEvent) -> bool {
    event.sequence == SequenceType::Title
}

pub fn in_heading(event: &MarkupEvent) -> bool {
    event.sequence == SequenceType::Heading
}

pub fn in_main_or_introduction(event: &MarkupEvent) -> bool {
    matches!(event.sequence, SequenceType::Main | SequenceType::Introduction)
}

/// Title blocks go to the document header: `mt`/`ms` as `h1`, others as `h2`.
pub fn end_title_block(session: &mut RenderSession<'_>, event: &MarkupEvent) -> Result<(), RenderError> {
    let class = block_class(event);
    let tag = if matches!(class, "mt" | "ms") { "h1" } else { "h2" };
    let content = session.state.stack.pop()?;
    session
        .state
        .body_head
        .push(format!("<{tag} class=\"{class}\">{}</{tag}>\n", content.trim()));
    Ok(())
}

/// Section headings: `s`/`is` as `h3`, others as `h4`.
pub fn end_heading_block(
    session: &mut RenderSession<'_>,
    event: &MarkupEvent,
) -> Result<(), RenderError> {
    let class = block_class(event);
    let tag = if matches!(class, "s" | "is") { "h3" } else { "h4" };
    let content = session.state.stack.pop()?;
    session
        .state
        .body
        .push(format!("<{tag} class=\"{class}\">{}</{tag}>\n", content.trim()));
    Ok(())
}

pub fn end_paragraph_block(
    session: &mut RenderSession<'_>,
    event: &MarkupEvent,
) -> Result<(), RenderError> {
    let class = block_class(event);
    let content = session.state.stack.pop()?;
    session
        .state
        .body
        .push(format!("<div class=\"{class}\">{}</div>\n", content.trim()));
    Ok(())
}

/// `blockTag/p` → `p`
fn block_class(event: &MarkupEvent) -> &str {
    event.segment(1).unwrap_or(event.payload.as_str())
}
