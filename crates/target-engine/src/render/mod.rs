//! lopdf backend: draw items to a single-page PDF

mod document;
mod ops;

pub use document::{build_document, to_bytes};
pub use ops::{escape_text, page_content};
