//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed structures to a compact, serializable
//!   `Snap` format for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (no vacuous
//!   blocks, trimmed text, section titles backed by the table of contents)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize, preview};
