use super::SectionStyles;
use folio_render_core::{DocumentBackend, RenderError};
use folio_types::ResumeData;

pub(super) fn render<B: DocumentBackend>(
    backend: &mut B,
    data: &ResumeData,
    styles: &SectionStyles,
) -> Result<f32, RenderError> {
    let mut height = 0.0;
    backend.begin_list()?;
    for achievement in data.present_achievements() {
        height += backend.draw_bullet(achievement, &styles.body)?;
    }
    backend.end_list()?;
    Ok(height)
}
