//! # folio-core
//!
//! Turns a `ResumeData` record into a finished PDF or Word document.
//!
//! - **sections**: one renderer per resume section, backend-agnostic
//! - **assembler**: header plus sections in template order, columns included
//! - **pipeline**: option resolution, validation, status reporting
//! - **filename**: the suggested download name

pub mod assembler;
pub mod error;
pub mod filename;
pub mod pipeline;
pub mod sections;
pub mod titles;

pub use assembler::{assemble, contact_items, lay_out};
pub use error::ExportError;
pub use filename::suggested_filename;
pub use pipeline::{
    render_html, render_pdf, ExportFormat, ExportPipeline, ExportPipelineBuilder, RenderStatus,
    StatusObserver,
};
pub use titles::section_title;
