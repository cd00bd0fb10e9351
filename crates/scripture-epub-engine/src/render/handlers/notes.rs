use crate::error::RenderError;
use crate::events::{MarkupEvent, SequenceType};
use crate::render::RenderSession;

pub fn in_footnote(event: &MarkupEvent) -> bool {
    event.sequence == SequenceType::Footnote
}

pub fn in_note(event: &MarkupEvent) -> bool {
    matches!(event.sequence, SequenceType::Footnote | SequenceType::Xref)
}

/// Add the block to the note under the still-open id.
pub fn end_note_block(session: &mut RenderSession<'_>, _event: &MarkupEvent) -> Result<(), RenderError> {
    let content = session.state.stack.pop()?;
    session.state.footnotes.collect(content);
    Ok(())
}

pub fn is_footnote_graft(event: &MarkupEvent) -> bool {
    event.sub_type == "footnote"
}

pub fn is_note_graft(event: &MarkupEvent) -> bool {
    matches!(event.sub_type.as_str(), "footnote" | "xref")
}

/// Place the anchor, render the note sequence, then move to the next id.
pub fn graft_note(session: &mut RenderSession<'_>, event: &MarkupEvent) -> Result<(), RenderError> {
    let anchor = session.state.footnotes.anchor();
    session.state.stack.append(anchor);
    session.render_sequence(event.graft_target())?;
    session.state.footnotes.advance();
    Ok(())
}
