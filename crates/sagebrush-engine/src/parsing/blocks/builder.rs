use super::{classify::LineClass, types::ContentBlock};

/// Separator for lines flushed at a blank line or when a list interrupts them.
const PARAGRAPH_BREAK: &str = "\n\n";
/// Separator for lines flushed by a heading or at end of document.
const LINE_BREAK: &str = "\n";

/// The single block that can be open while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
enum OpenBlock {
    /// `title` is `None` for the untitled continuation opened when a
    /// subheading interrupts a list. It is emitted as a paragraph.
    Section { title: Option<String> },
    List { items: Vec<String> },
}

/// Single-pass state machine turning classified lines into [`ContentBlock`]s.
///
/// Holds at most one open block plus a buffer of pending text lines. Text in
/// the buffer becomes the body of the open section when it is flushed, or a
/// standalone paragraph when nothing is open.
pub struct BlockBuilder {
    open: Option<OpenBlock>,
    pending: Vec<String>,
    out: Vec<ContentBlock>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            open: None,
            pending: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &LineClass<'_>) {
        match *line {
            LineClass::SectionHeading(title) => {
                if self.open.is_some() {
                    self.flush_open(LINE_BREAK);
                }
                self.pending.clear();
                self.open = Some(OpenBlock::Section {
                    title: Some(title.to_string()),
                });
            }
            LineClass::Subheading(title) => {
                if self.open.is_some() && !self.pending.is_empty() {
                    // Text after the subheading keeps attaching to a section
                    // named like the one just flushed, untitled after a list.
                    let carried = self.flush_open(LINE_BREAK);
                    self.open = Some(OpenBlock::Section { title: carried });
                }
                self.out.push(ContentBlock::Subheading {
                    title: title.to_string(),
                });
            }
            LineClass::ListItem(item) => {
                match self.open {
                    Some(OpenBlock::List { .. }) => {}
                    Some(OpenBlock::Section { .. }) => {
                        self.flush_open(PARAGRAPH_BREAK);
                        self.open = Some(OpenBlock::List { items: vec![] });
                    }
                    None => self.open = Some(OpenBlock::List { items: vec![] }),
                }
                if let Some(OpenBlock::List { items }) = &mut self.open {
                    items.push(item.to_string());
                }
            }
            LineClass::Blank => {
                if !self.pending.is_empty() {
                    self.flush_pending(PARAGRAPH_BREAK);
                }
            }
            LineClass::Text(text) => {
                if matches!(self.open, Some(OpenBlock::List { .. })) {
                    self.close_list();
                }
                self.pending.push(text.to_string());
            }
            LineClass::Ignored => {}
        }
    }

    pub fn finish(mut self) -> Vec<ContentBlock> {
        // EOF flush
        let open_list_has_items =
            matches!(&self.open, Some(OpenBlock::List { items }) if !items.is_empty());
        if !self.pending.is_empty() || open_list_has_items {
            self.flush_pending(LINE_BREAK);
        }

        self.out.retain(|block| !block.is_vacuous());
        self.out
    }

    /// Emits the open block (if any) with the pending lines as its body,
    /// or a bare paragraph when nothing is open. Leaves nothing open.
    fn flush_pending(&mut self, separator: &str) {
        if self.open.is_some() {
            self.flush_open(separator);
        } else {
            self.out.push(ContentBlock::Paragraph {
                body: self.pending.join(separator),
            });
            self.pending.clear();
        }
    }

    /// Emits the open block using the pending lines as its body and clears
    /// the buffer. Returns the title of the flushed block when it had one.
    ///
    /// Lists carry no body, so pending lines flushed into a list are dropped.
    fn flush_open(&mut self, separator: &str) -> Option<String> {
        let body = self.pending.join(separator);
        self.pending.clear();

        match self.open.take()? {
            OpenBlock::Section { title: Some(title) } => {
                self.out.push(ContentBlock::Section {
                    title: title.clone(),
                    body,
                });
                Some(title)
            }
            OpenBlock::Section { title: None } => {
                self.out.push(ContentBlock::Paragraph { body });
                None
            }
            OpenBlock::List { items } => {
                self.out.push(ContentBlock::List { items });
                None
            }
        }
    }

    /// Emits the open list as-is, leaving the pending lines untouched.
    fn close_list(&mut self) {
        if let Some(OpenBlock::List { items }) = self.open.take() {
            self.out.push(ContentBlock::List { items });
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
