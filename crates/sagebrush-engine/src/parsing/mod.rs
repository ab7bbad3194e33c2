pub mod blocks;
pub mod sections;
pub mod snapshot;

#[cfg(test)]
mod tests;

use serde::Serialize;

use blocks::{BlockBuilder, ContentBlock, PostLineClassifier, document_lines};
pub use sections::list_section_titles;

/// Table of contents and display blocks of one post body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDocument {
    pub sections: Vec<String>,
    pub blocks: Vec<ContentBlock>,
}

/// Segments a post body into display blocks in a single top-to-bottom scan.
///
/// Total over all input: text without markers degrades to paragraphs and
/// lists, blank input to an empty sequence.
pub fn build_content_blocks(document: &str) -> Vec<ContentBlock> {
    let classifier = PostLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in document_lines(document) {
        builder.push(&classifier.classify(line));
    }

    builder.finish()
}

/// Convenience: both projections of a post body.
pub fn parse_document(document: &str) -> ParsedDocument {
    ParsedDocument {
        sections: list_section_titles(document),
        blocks: build_content_blocks(document),
    }
}
