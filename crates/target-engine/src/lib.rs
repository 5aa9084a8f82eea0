pub mod annotate;
pub mod catalog;
mod compose;
pub mod constants;
mod generate;
pub mod geometry;
mod options;
pub mod page;
pub mod render;
pub mod scale;
mod types;
pub mod units;

pub use compose::{compose, ComposedPage};
pub use generate::{generate, generate_many, generate_pdf_bytes, render_page, save_pdf};
pub use options::*;
pub use types::*;
