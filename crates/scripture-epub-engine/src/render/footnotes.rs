/// Collects footnote and cross-reference content under sequential ids.
///
/// The current id stays open while its grafted sequence renders, so a note
/// made of several blocks accumulates under one id. Ids are advanced once
/// per anchor, starting at 1.
#[derive(Debug, Clone)]
pub struct FootnoteCollector {
    next_id: u32,
    notes: Vec<(u32, Vec<String>)>,
}

impl Default for FootnoteCollector {
    fn default() -> Self {
        Self {
            next_id: 1,
            notes: Vec::new(),
        }
    }
}

impl FootnoteCollector {
    pub fn current_id(&self) -> u32 {
        self.next_id
    }

    /// The noteref placed in the text for the current id.
    pub fn anchor(&self) -> String {
        let n = self.next_id;
        format!(
            "<a epub:type=\"noteref\" id=\"footnote_anchor_{n}\" href=\"#footnote_{n}\" class=\"footnote_anchor\"><sup>{n}</sup></a>"
        )
    }

    /// Add one rendered block to the note under the current id.
    pub fn collect(&mut self, fragment: String) {
        let id = self.next_id;
        match self.notes.iter_mut().find(|(note_id, _)| *note_id == id) {
            Some((_, fragments)) => fragments.push(fragment),
            None => self.notes.push((id, vec![fragment])),
        }
    }

    pub fn advance(&mut self) {
        self.next_id += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Note ids in first-insertion order.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.notes.iter().map(|(id, _)| *id)
    }

    pub fn content(&self, id: u32) -> Option<String> {
        self.notes
            .iter()
            .find(|(note_id, _)| *note_id == id)
            .map(|(_, fragments)| fragments.concat())
    }

    /// One `<aside>` per note, in first-insertion order.
    pub fn asides(&self) -> String {
        self.notes
            .iter()
            .map(|(id, fragments)| {
                format!(
                    "<aside epub:type=\"footnote\" id=\"footnote_{id}\" class=\"footnote_number\"><p>{}</p></aside>\n",
                    fragments.concat()
                )
            })
            .collect()
    }
}
