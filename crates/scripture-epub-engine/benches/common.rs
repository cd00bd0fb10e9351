// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
use scripture_epub_engine::{
    DocumentHeaders, MarkupEvent, ProfileKind, SequenceType, SourceDocument,
};

/// A canonical book with `chapters` chapters of `verses` verses, each verse
/// carrying a footnote.
#[allow(dead_code)]
pub fn generate_book(chapters: usize, verses: usize) -> SourceDocument {
    let main = SequenceType::Main;
    let mut document = SourceDocument::new(
        DocumentHeaders::new("MRK")
            .with_heading("Mark")
            .with_toc("The Gospel of Mark", "Mark", "Mk"),
        ProfileKind::Canonical,
    );
    let mut events = vec![MarkupEvent::document_start()];
    let mut note = 0;

    for chapter in 1..=chapters {
        events.push(MarkupEvent::block_start(main.clone(), "blockTag/p"));
        events.push(MarkupEvent::scope_start(main.clone(), format!("chapter/{chapter}")));
        for verse in 1..=verses {
            events.push(MarkupEvent::scope_start(main.clone(), format!("verses/{verse}")));
            events.push(MarkupEvent::word(main.clone(), "In"));
            events.push(MarkupEvent::line_space(main.clone()));
            events.push(MarkupEvent::word(main.clone(), "principio"));
            events.push(MarkupEvent::punctuation(main.clone(), ";"));

            note += 1;
            let id = format!("note-{note}");
            events.push(MarkupEvent::inline_graft(main.clone(), "footnote", id.clone()));
            document = document.with_sequence(id, footnote_sequence());

            events.push(MarkupEvent::line_space(main.clone()));
            events.push(MarkupEvent::scope_end(main.clone(), format!("verses/{verse}")));
        }
        events.push(MarkupEvent::scope_end(main.clone(), format!("chapter/{chapter}")));
        events.push(MarkupEvent::block_end(main.clone(), "blockTag/p"));
    }
    events.push(MarkupEvent::sequence_end(main));

    document.with_events(events)
}

fn footnote_sequence() -> Vec<MarkupEvent> {
    let note = SequenceType::Footnote;
    vec![
        MarkupEvent::block_start(note.clone(), "blockTag/f"),
        MarkupEvent::scope_start(note.clone(), "span/ft"),
        MarkupEvent::word(note.clone(), "Or"),
        MarkupEvent::line_space(note.clone()),
        MarkupEvent::word(note.clone(), "beginning"),
        MarkupEvent::scope_end(note.clone(), "span/ft"),
        MarkupEvent::block_end(note.clone(), "blockTag/f"),
        MarkupEvent::sequence_end(note),
    ]
}
