//! # folio
//!
//! A paginated resume layout engine. One `ResumeData` record plus a set of
//! `ExportOptions` renders to a PDF or to a Word-compatible HTML document,
//! with the same sections in the same order in both.
//!
//! ```no_run
//! use folio::{ExportFormat, ExportPipeline, ResumeData, UserType};
//!
//! let data: ResumeData = serde_json::from_str(r#"{ "name": "Jane Doe" }"#)?;
//! let pipeline = ExportPipeline::builder()
//!     .with_user_type(UserType::Experienced)
//!     .build();
//! let artifact = pipeline.render(&data, ExportFormat::Pdf)?;
//! println!("{} bytes of {}", artifact.len(), artifact.mime_type());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

pub use folio_core::{
    assemble, lay_out, render_html, render_pdf, section_title, suggested_filename, ExportError,
    ExportFormat, ExportPipeline, ExportPipelineBuilder, RenderStatus, StatusObserver,
};
pub use folio_render_core::{Artifact, DocumentBackend, RenderError};
pub use folio_render_html::HtmlBackend;
pub use folio_render_lopdf::PdfBackend;
pub use folio_style::{
    resolve_options, ExportOptions, ExportOverrides, FontFamily, SectionKind, TemplateId,
};
pub use folio_types::{
    Certification, ContactInfo, Education, Origin, Project, ResumeData, SkillCategory, UserType,
    WorkExperience,
};

/// Reads a resume record from a JSON file.
pub fn load_resume(path: impl AsRef<Path>) -> Result<ResumeData, ExportError> {
    let source = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&source)?)
}

/// Reads partial export options from a JSON file.
pub fn load_overrides(path: impl AsRef<Path>) -> Result<ExportOverrides, ExportError> {
    let source = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&source)?)
}

/// Writes an artifact into `dir` under `file_name`, returning the full path.
pub fn save_artifact(
    dir: impl AsRef<Path>,
    file_name: &str,
    artifact: &Artifact,
) -> Result<PathBuf, ExportError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, artifact.as_bytes())?;
    log::info!("Saved {} ({} bytes)", path.display(), artifact.len());
    Ok(path)
}
