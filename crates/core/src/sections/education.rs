use super::SectionStyles;
use folio_render_core::{DocumentBackend, RenderError, Row};
use folio_types::{non_blank, Color, Education, ResumeData, UserType};
use itertools::Itertools;

pub(super) fn render<B: DocumentBackend>(
    backend: &mut B,
    data: &ResumeData,
    user_type: UserType,
    styles: &SectionStyles,
) -> Result<f32, RenderError> {
    let highlight = styles.template.config().highlight_education || user_type == UserType::Student;
    let mut height = 0.0;
    for (i, entry) in data.present_education().enumerate() {
        if i > 0 {
            height += backend.add_gap(styles.entry_spacing)?;
        }
        height += render_entry(backend, entry, styles, highlight)?;
    }
    Ok(height)
}

fn render_entry<B: DocumentBackend>(
    backend: &mut B,
    entry: &Education,
    styles: &SectionStyles,
    highlight: bool,
) -> Result<f32, RenderError> {
    let mut label_style = styles.sub_header.clone();
    let mut body_style = styles.body.clone();
    if highlight {
        label_style = label_style.with_background(Color::HIGHLIGHT);
        body_style = body_style.with_background(Color::HIGHLIGHT);
    }

    let degree = non_blank(Some(&entry.degree));
    let school = non_blank(Some(&entry.school));
    let place = [school, non_blank(entry.location.as_deref())]
        .into_iter()
        .flatten()
        .join(", ");

    // A school without a degree takes the heading row itself.
    let (label, detail) = match degree {
        Some(degree) => (degree.to_string(), place),
        None => (place, String::new()),
    };
    let mut height = backend.draw_row(&Row {
        label: &label,
        label_style,
        value: entry.year.trim(),
        value_style: styles.value.clone(),
        value_href: None,
    })?;
    if !detail.is_empty() {
        height += backend.draw_text(&detail, 0.0, &body_style)?;
    }
    if let Some(cgpa) = non_blank(entry.cgpa.as_deref()) {
        height += backend.draw_labelled_text("CGPA", cgpa, &styles.body)?;
    }
    let coursework = entry
        .relevant_coursework
        .iter()
        .filter_map(|c| non_blank(Some(c)))
        .join(", ");
    if !coursework.is_empty() {
        height += backend.draw_labelled_text("Relevant Coursework", &coursework, &styles.body)?;
    }
    Ok(height)
}
