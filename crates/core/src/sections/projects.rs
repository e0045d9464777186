use super::SectionStyles;
use folio_render_core::{web_href, DocumentBackend, RenderError, Row};
use folio_types::{non_blank, Project, ResumeData};

pub(super) fn render<B: DocumentBackend>(
    backend: &mut B,
    data: &ResumeData,
    styles: &SectionStyles,
) -> Result<f32, RenderError> {
    let mut height = 0.0;
    for (i, project) in data.present_projects().enumerate() {
        if i > 0 {
            height += backend.add_gap(styles.entry_spacing)?;
        }
        height += render_project(backend, project, styles)?;
    }
    Ok(height)
}

/// Title row with the repository link flush right, then the bullets.
fn render_project<B: DocumentBackend>(
    backend: &mut B,
    project: &Project,
    styles: &SectionStyles,
) -> Result<f32, RenderError> {
    let url = non_blank(project.github_url.as_deref());
    let mut height = backend.draw_row(&Row {
        label: project.title.trim(),
        label_style: styles.sub_header.clone(),
        value: url.unwrap_or_default(),
        value_style: styles.muted.clone(),
        value_href: url.map(web_href),
    })?;

    let bullets: Vec<&str> = project
        .bullets
        .iter()
        .filter_map(|b| non_blank(Some(b)))
        .collect();
    if !bullets.is_empty() {
        backend.begin_list()?;
        for bullet in bullets {
            height += backend.draw_bullet(bullet, &styles.body)?;
        }
        backend.end_list()?;
    }
    Ok(height)
}
