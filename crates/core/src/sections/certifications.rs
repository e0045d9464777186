use super::SectionStyles;
use folio_render_core::{DocumentBackend, RenderError};
use folio_types::ResumeData;

/// Bold lead per certification; any detail follows on its own line in PDF.
pub(super) fn render<B: DocumentBackend>(
    backend: &mut B,
    data: &ResumeData,
    styles: &SectionStyles,
) -> Result<f32, RenderError> {
    let mut height = 0.0;
    backend.begin_list()?;
    for cert in data.present_certifications() {
        let (lead, detail) = cert.parts();
        height += backend.draw_detailed_bullet(&lead, detail.as_deref(), &styles.body)?;
    }
    backend.end_list()?;
    Ok(height)
}
