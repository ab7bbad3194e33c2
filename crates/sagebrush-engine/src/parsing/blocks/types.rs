use serde::{Deserialize, Serialize};

/// A typed unit of post content, ready for display.
///
/// Blocks are produced in document order by
/// [`build_content_blocks`](crate::parsing::build_content_blocks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Introduced by a `## ` heading line. `body` holds only the free text
    /// directly under the heading.
    Section { title: String, body: String },
    /// Introduced by a `### ` heading line. Never carries text of its own.
    Subheading { title: String },
    /// Free text lines outside any open section.
    Paragraph { body: String },
    /// Consecutive `- ` item lines.
    List { items: Vec<String> },
}

impl ContentBlock {
    /// Heading text for sections and subheadings.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            ContentBlock::Section { title, .. } | ContentBlock::Subheading { title } => {
                Some(title)
            }
            ContentBlock::Paragraph { .. } | ContentBlock::List { .. } => None,
        }
    }

    /// Free text carried by sections and paragraphs.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            ContentBlock::Section { body, .. } | ContentBlock::Paragraph { body } => Some(body),
            ContentBlock::Subheading { .. } | ContentBlock::List { .. } => None,
        }
    }

    #[must_use]
    pub fn is_section(&self) -> bool {
        matches!(self, ContentBlock::Section { .. })
    }

    /// True when the block has nothing a reader could see: a list without
    /// items, or a block with neither a title nor body text.
    #[must_use]
    pub fn is_vacuous(&self) -> bool {
        match self {
            ContentBlock::List { items } => items.is_empty(),
            other => {
                other.title().is_none_or(str::is_empty) && other.body().is_none_or(str::is_empty)
            }
        }
    }
}
