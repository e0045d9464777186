#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use folio::{
    lay_out, render_html, render_pdf, DocumentBackend, ExportError, ExportOptions,
    ExportOverrides, HtmlBackend, PdfBackend, ResumeData, UserType,
};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    pub fn text(&self) -> String {
        pdf_assertions::extract_text(&self.doc)
    }
}

/// Render through the full pipeline and parse the result.
pub fn generate_pdf(
    data: &ResumeData,
    user_type: UserType,
    overrides: Option<ExportOverrides>,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = render_pdf(data, user_type, overrides)?;
    GeneratedPdf::from_bytes(bytes)
}

pub fn generate_html(
    data: &ResumeData,
    user_type: UserType,
    overrides: Option<ExportOverrides>,
) -> Result<String, ExportError> {
    render_html(data, user_type, overrides)
}

/// Section headings each backend draws for the same input, PDF first.
pub fn headings_for(
    data: &ResumeData,
    user_type: UserType,
    options: &ExportOptions,
) -> Result<(Vec<String>, Vec<String>), Box<dyn std::error::Error>> {
    let mut pdf = PdfBackend::new(options.clone());
    lay_out(&mut pdf, data, user_type)?;
    let mut html = HtmlBackend::new(options.clone());
    lay_out(&mut html, data, user_type)?;
    Ok((pdf.headings().to_vec(), html.headings().to_vec()))
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
