use std::collections::HashMap;

use super::RenderSession;
use super::handlers::{always, blocks, document, glossary, notes, scopes, structure, tokens};
use crate::error::RenderError;
use crate::events::{EventKind, MarkupEvent};
use crate::profile::DocumentProfile;

pub type Predicate = fn(&MarkupEvent) -> bool;
pub type Handler = fn(&mut RenderSession<'_>, &MarkupEvent) -> Result<(), RenderError>;

/// A rule: the handler runs when the predicate accepts the event.
#[derive(Debug, Clone, Copy)]
pub struct Action {
    pub name: &'static str,
    predicate: Predicate,
    handler: Handler,
}

impl Action {
    pub fn matches(&self, event: &MarkupEvent) -> bool {
        (self.predicate)(event)
    }

    pub fn run(&self, session: &mut RenderSession<'_>, event: &MarkupEvent) -> Result<(), RenderError> {
        (self.handler)(session, event)
    }
}

/// Ordered rules per event kind. Only the first matching rule runs.
#[derive(Debug, Clone, Default)]
pub struct ActionTable {
    actions: HashMap<EventKind, Vec<Action>>,
}

impl ActionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule after every rule already registered for `kind`.
    pub fn add(
        &mut self,
        kind: EventKind,
        name: &'static str,
        predicate: Predicate,
        handler: Handler,
    ) -> &mut Self {
        self.actions.entry(kind).or_default().push(Action {
            name,
            predicate,
            handler,
        });
        self
    }

    pub fn first_match(&self, event: &MarkupEvent) -> Option<&Action> {
        self.actions
            .get(&event.kind)?
            .iter()
            .find(|action| action.matches(event))
    }

    /// Rule names for `kind`, in registration order.
    pub fn names(&self, kind: EventKind) -> Vec<&'static str> {
        self.actions
            .get(&kind)
            .map(|actions| actions.iter().map(|action| action.name).collect())
            .unwrap_or_default()
    }

    /// The rules of a document profile. Registration order is priority order.
    pub fn for_profile(profile: &DocumentProfile) -> Self {
        use EventKind::*;

        let mut table = Self::new();

        table.add(DocumentStart, "start_document", always, document::start_document);

        table.add(
            BlockGraft,
            "follow_block_graft",
            blocks::is_followed_graft,
            blocks::follow_block_graft,
        );
        table.add(BlockStart, "start_block", always, blocks::start_block);

        table
            .add(BlockEnd, "end_title_block", blocks::in_title, blocks::end_title_block)
            .add(BlockEnd, "end_heading_block", blocks::in_heading, blocks::end_heading_block);
        if profile.xref_notes {
            table.add(BlockEnd, "end_note_block", notes::in_note, notes::end_note_block);
        } else {
            table.add(BlockEnd, "end_note_block", notes::in_footnote, notes::end_note_block);
        }
        table.add(
            BlockEnd,
            "end_paragraph_block",
            blocks::in_main_or_introduction,
            blocks::end_paragraph_block,
        );

        if profile.chapters {
            table
                .add(Scope, "chapter", structure::is_chapter_start, structure::start_chapter)
                .add(
                    Scope,
                    "pub_chapter",
                    structure::is_pub_chapter_start,
                    structure::start_pub_chapter,
                );
        }
        if profile.verses {
            table
                .add(Scope, "verses", structure::is_verses_start, structure::start_verses)
                .add(
                    Scope,
                    "pub_verse",
                    structure::is_pub_verse_start,
                    structure::start_pub_verse,
                );
        }
        if profile.glossary_links {
            table.add(
                Scope,
                "glossary_lemma",
                glossary::is_lemma_attribute,
                glossary::capture_lemma,
            );
        }
        if profile.chapters {
            table.add(
                Scope,
                "alt_chapter",
                structure::is_alt_chapter_start,
                structure::annotate_chapter,
            );
        }
        table.add(
            Scope,
            "character_span",
            scopes::is_character_span,
            scopes::character_span,
        );
        if profile.table_cells {
            table.add(Scope, "table_cell", scopes::is_cell, scopes::table_cell);
        }
        if profile.glossary_links {
            table.add(
                Scope,
                "glossary_word",
                glossary::is_glossary_word,
                glossary::glossary_word,
            );
        }
        table.add(Scope, "unhandled_span", scopes::is_span, scopes::warn_unhandled_span);

        table.add(Token, "token", always, tokens::render_token);

        if profile.xref_notes {
            table.add(InlineGraft, "note_graft", notes::is_note_graft, notes::graft_note);
        } else {
            table.add(InlineGraft, "note_graft", notes::is_footnote_graft, notes::graft_note);
        }

        table.add(
            SequenceEnd,
            "compose_document",
            document::is_main_end,
            document::compose_document,
        );
        if profile.introduction_separator {
            table.add(
                SequenceEnd,
                "separate_introduction",
                document::is_introduction_end,
                document::separate_introduction,
            );
        }

        table
    }
}
