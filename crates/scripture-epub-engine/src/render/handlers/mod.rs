//! Rule handlers.
//!
//! Each handler is a plain function over the session and the event; the
//! [`ActionTable`](super::dispatch::ActionTable) pairs them with predicates
//! according to the document profile.

pub mod blocks;
pub mod document;
pub mod glossary;
pub mod notes;
pub mod scopes;
pub mod structure;
pub mod tokens;

use crate::events::MarkupEvent;

pub fn always(_event: &MarkupEvent) -> bool {
    true
}
