use super::blocks::{LineClass, PostLineClassifier, document_lines};

/// Collects the level-2 heading titles of a document, in order.
///
/// Used for a post's table of contents. Lines are classified exactly as the
/// block builder classifies them, so every title here names a heading the
/// builder also saw.
pub fn list_section_titles(document: &str) -> Vec<String> {
    let classifier = PostLineClassifier;

    document_lines(document)
        .filter_map(|line| match classifier.classify(line) {
            LineClass::SectionHeading(title) => Some(title.to_string()),
            _ => None,
        })
        .collect()
}
