//! PDF output for the resume layout engine.
//!
//! `PdfBackend` records positioned drawing operations page by page and
//! serialises them through `StreamingPdfWriter` when finalised. Text uses the
//! standard Type 1 faces with WinAnsi encoding, so no font data is embedded.

mod backend;
mod encoding;
mod page;
mod writer;

pub use backend::PdfBackend;
pub use encoding::to_win_ansi;
pub use page::{DrawOp, TextRun};
pub use writer::StreamingPdfWriter;
