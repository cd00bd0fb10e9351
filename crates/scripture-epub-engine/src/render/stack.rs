use crate::error::RenderError;

/// Nested accumulation buffers for inline content.
///
/// Each open span or block owns one row; closing it joins the row and hands
/// the text to the row below. The root row belongs to the document and can
/// never be popped.
#[derive(Debug, Clone, Default)]
pub struct RenderStack {
    root: Vec<String>,
    open: Vec<Vec<String>>,
}

impl RenderStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self) {
        self.open.push(Vec::new());
    }

    /// Remove the top row and return its fragments joined.
    pub fn pop(&mut self) -> Result<String, RenderError> {
        self.open
            .pop()
            .map(|row| row.concat())
            .ok_or(RenderError::StackUnderflow)
    }

    pub fn append(&mut self, text: impl Into<String>) {
        self.top_mut().push(text.into());
    }

    pub fn peek_joined(&self) -> String {
        self.top().concat()
    }

    pub fn top(&self) -> &[String] {
        self.open.last().unwrap_or(&self.root)
    }

    /// Mutable access to the top row, for rewriting its last fragment.
    pub fn top_mut(&mut self) -> &mut Vec<String> {
        match self.open.last_mut() {
            Some(row) => row,
            None => &mut self.root,
        }
    }

    /// Number of rows, including the root row.
    pub fn depth(&self) -> usize {
        self.open.len() + 1
    }
}
