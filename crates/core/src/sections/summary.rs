use super::SectionStyles;
use folio_render_core::{DocumentBackend, RenderError};
use folio_types::{ResumeData, UserType};

/// The summary paragraph, or the career objective for students. Never both.
pub(super) fn render<B: DocumentBackend>(
    backend: &mut B,
    data: &ResumeData,
    user_type: UserType,
    styles: &SectionStyles,
) -> Result<f32, RenderError> {
    match data.summary_for(user_type) {
        Some(text) => backend.draw_text(text, 0.0, &styles.body),
        None => Ok(0.0),
    }
}
