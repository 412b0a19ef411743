//! hearwell-export
//!
//! Visit summaries: analysis → Markdown-subset text (via Tera) → DOCX.

pub mod context;
pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
