use super::SectionStyles;
use folio_render_core::{DocumentBackend, RenderError, Row};
use folio_style::TemplateId;
use folio_types::{non_blank, ResumeData, WorkExperience};

pub(super) fn render<B: DocumentBackend>(
    backend: &mut B,
    data: &ResumeData,
    styles: &SectionStyles,
) -> Result<f32, RenderError> {
    let mut height = 0.0;
    for (i, entry) in data.present_work().enumerate() {
        if i > 0 {
            height += backend.add_gap(styles.entry_spacing)?;
        }
        height += render_entry(backend, entry, styles)?;
    }
    Ok(height)
}

/// "Role - Company" in the label, year flush right.
fn heading(entry: &WorkExperience) -> String {
    let role = entry.role.trim();
    match non_blank(Some(&entry.company)) {
        Some(company) => format!("{} - {}", role, company),
        None => role.to_string(),
    }
}

fn render_entry<B: DocumentBackend>(
    backend: &mut B,
    entry: &WorkExperience,
    styles: &SectionStyles,
) -> Result<f32, RenderError> {
    let label = heading(entry);
    let mut height = backend.draw_row(&Row {
        label: &label,
        label_style: styles.sub_header.clone(),
        value: entry.year.trim(),
        value_style: styles.value.clone(),
        value_href: None,
    })?;
    if let Some(location) = non_blank(entry.location.as_deref()) {
        height += backend.draw_text(location, 0.0, &styles.muted)?;
    }

    let mut bullets = entry.bullets.iter().filter_map(|b| non_blank(Some(b)));
    if styles.template == TemplateId::Functional {
        // Condensed history: the lead bullet only, as plain prose.
        if let Some(first) = bullets.next() {
            height += backend.draw_text(first, 0.0, &styles.body)?;
        }
        return Ok(height);
    }

    let bullets: Vec<&str> = bullets.collect();
    if !bullets.is_empty() {
        backend.begin_list()?;
        for bullet in bullets {
            height += backend.draw_bullet(bullet, &styles.body)?;
        }
        backend.end_list()?;
    }
    Ok(height)
}
