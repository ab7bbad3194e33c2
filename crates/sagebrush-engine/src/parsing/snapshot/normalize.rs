use serde::Serialize;

use crate::parsing::{ParsedDocument, blocks::ContentBlock};

#[derive(Serialize)]
pub struct Snap {
    pub toc: Vec<String>,
    pub blocks: Vec<BlockSnap>,
}

#[derive(Serialize)]
pub struct BlockSnap {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
}

pub fn normalize(doc: &ParsedDocument) -> Snap {
    let blocks = doc
        .blocks
        .iter()
        .map(|b| {
            let (kind, text) = match b {
                ContentBlock::Section { body, .. } => ("Section", preview(body, 60)),
                ContentBlock::Subheading { .. } => ("Subheading", String::new()),
                ContentBlock::Paragraph { body } => ("Paragraph", preview(body, 60)),
                ContentBlock::List { items } => ("List", preview(&items.join(" / "), 60)),
            };

            BlockSnap {
                kind: kind.to_string(),
                title: b.title().map(str::to_string),
                text,
            }
        })
        .collect();

    Snap {
        toc: doc.sections.clone(),
        blocks,
    }
}

/// Flattens line breaks and truncates to `max` characters with "..." suffix
/// if needed.
///
/// Used for human-readable snapshot output.
pub fn preview(text: &str, max: usize) -> String {
    let flat = text.replace('\n', "⏎");
    if flat.chars().count() > max {
        let mut s: String = flat.chars().take(max).collect();
        s.push_str("...");
        s
    } else {
        flat
    }
}
