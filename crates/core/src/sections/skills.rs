use super::SectionStyles;
use folio_render_core::{Card, DocumentBackend, RenderError};
use folio_types::ResumeData;
use itertools::Itertools;

/// One "Category: a, b, c" line per category, or a card grid for templates
/// that focus on skills.
pub(super) fn render<B: DocumentBackend>(
    backend: &mut B,
    data: &ResumeData,
    styles: &SectionStyles,
) -> Result<f32, RenderError> {
    if styles.template.config().focused_skills {
        let cards: Vec<Card> = data
            .present_skills()
            .map(|skill| Card {
                title: skill.category.trim().to_string(),
                items: skill.items().map(str::to_string).collect(),
            })
            .collect();
        return backend.draw_card_grid(&cards);
    }

    let mut height = 0.0;
    for skill in data.present_skills() {
        let list = skill.items().join(", ");
        height += backend.draw_labelled_text(skill.category.trim(), &list, &styles.body)?;
    }
    Ok(height)
}
