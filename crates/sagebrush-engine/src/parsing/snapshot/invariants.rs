use crate::parsing::{ParsedDocument, blocks::ContentBlock};

pub fn check(doc: &ParsedDocument) {
    for b in &doc.blocks {
        assert!(!b.is_vacuous(), "vacuous block emitted: {b:?}");

        if let ContentBlock::Section { title, .. } = b {
            assert!(
                doc.sections.contains(title),
                "section {title:?} missing from table of contents {:?}",
                doc.sections
            );
        }

        if let ContentBlock::List { items } = b {
            for item in items {
                assert_eq!(item, item.trim(), "list item not trimmed: {item:?}");
            }
        }

        if let Some(body) = b.body() {
            for line in body.lines() {
                assert_eq!(line, line.trim(), "body line not trimmed: {line:?}");
            }
        }
    }
}
