//! Document text extraction.
//!
//! This module provides a `DocumentExtractor` trait for pulling the raw
//! text out of a source document page by page, with a production backend
//! built on `lopdf`. A page that fails to extract contributes an empty
//! page; only a document that cannot be opened at all fails the item.

mod error;
mod lopdf;
mod traits;
mod types;

pub use error::ExtractError;
pub use lopdf::LopdfExtractor;
pub use traits::DocumentExtractor;
pub use types::{ExtractedDocument, PageText};
