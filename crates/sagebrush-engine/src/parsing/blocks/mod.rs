//! # Block Building
//!
//! Two-phase conversion of a post body into display blocks.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified on its own
//!    into a `LineClass` (section heading, subheading, list item, blank, text,
//!    ignored)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps one open block
//!    and a buffer of pending text lines, and emits `ContentBlock`s as blocks
//!    close
//!
//! ## Key Invariants
//!
//! - Output order follows document order
//! - Only the `## `, `### ` and `- ` prefixes are interpreted
//! - No vacuous block (empty list, untitled block without body) is emitted

pub mod builder;
pub mod classify;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, PostLineClassifier, document_lines};
pub use types::ContentBlock;
