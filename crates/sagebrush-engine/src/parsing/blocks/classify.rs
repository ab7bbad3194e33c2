/// Marker that opens a section (level-2 heading).
pub const SECTION_MARKER: &str = "## ";
/// Marker that opens a subheading (level-3 heading).
pub const SUBHEADING_MARKER: &str = "### ";
/// Marker that opens a list item.
pub const LIST_ITEM_MARKER: &str = "- ";

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block building: each line is classified independently
/// without reference to surrounding context. Borrowed text is already trimmed
/// and has its marker stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `## Title`
    SectionHeading(&'a str),
    /// `### Title`
    Subheading(&'a str),
    /// `- item`
    ListItem(&'a str),
    /// Whitespace only.
    Blank,
    /// Any other line that does not start with `#`.
    Text(&'a str),
    /// A `#` line that is not a recognised heading (`#`, `####`, `#tag`).
    Ignored,
}

/// Classifies post body lines for the block building phase.
pub struct PostLineClassifier;

impl PostLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Surrounding whitespace (including a trailing `\r`) is ignored, so
    /// indented markers are still recognised.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            LineClass::Blank
        } else if let Some(title) = trimmed.strip_prefix(SECTION_MARKER) {
            LineClass::SectionHeading(title.trim())
        } else if let Some(title) = trimmed.strip_prefix(SUBHEADING_MARKER) {
            LineClass::Subheading(title.trim())
        } else if let Some(item) = trimmed.strip_prefix(LIST_ITEM_MARKER) {
            LineClass::ListItem(item.trim())
        } else if trimmed.starts_with('#') {
            LineClass::Ignored
        } else {
            LineClass::Text(trimmed)
        }
    }
}

/// Splits a document into the lines the classifier sees.
///
/// Splits on `\n` only, so a trailing newline yields a final blank line.
pub fn document_lines(document: &str) -> impl Iterator<Item = &str> {
    document.split('\n')
}
