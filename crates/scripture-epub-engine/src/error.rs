use crate::events::EventKind;

/// Invariant violations that abort rendering of the current document.
///
/// Content anomalies (unknown spans, unresolved glossary words) are never
/// reported here; they are logged and the content passes through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("render stack underflow: the document root row cannot be popped")]
    StackUnderflow,
    #[error("render stack unbalanced at main sequence end: {depth} rows open")]
    UnbalancedStack { depth: usize },
    #[error("{tracker} tracker flushed while idle")]
    TrackerNotWaiting { tracker: &'static str },
    #[error("glossary index {index} has no aside id configured")]
    MissingGlossaryAside { index: u32 },
    #[error("unknown sequence: {0}")]
    UnknownSequence(String),
    #[error("sequence {0} is grafted into itself")]
    RecursiveSequence(String),
    #[error("{0:?} event received before document start")]
    DocumentNotStarted(EventKind),
    #[error("document {0} ended without a main sequence end")]
    DocumentIncomplete(String),
}
