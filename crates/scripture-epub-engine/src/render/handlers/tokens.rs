use super::structure;
use crate::error::RenderError;
use crate::events::MarkupEvent;
use crate::render::RenderSession;
use crate::render::spacing::PunctuationSpacer;

pub fn render_token(session: &mut RenderSession<'_>, event: &MarkupEvent) -> Result<(), RenderError> {
    structure::flush_pending(session, event)?;

    let spacer = PunctuationSpacer::new(session.config.french_spacing);
    let stack = &mut session.state.stack;
    let text = spacer.render(&event.sub_type, &event.payload, stack.top_mut());
    stack.append(text);
    Ok(())
}
