pub mod io;
pub mod leads;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::{CatalogError, Post, PostCatalog, PostParseError};
pub use parsing::{
    ParsedDocument, blocks::ContentBlock, build_content_blocks, list_section_titles,
    parse_document,
};
