pub mod catalog;
pub mod post;

pub use catalog::{CatalogError, PostCatalog};
pub use post::{Post, PostParseError};
