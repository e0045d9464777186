//! One renderer per resume section, each written once against
//! `DocumentBackend` and shared by the PDF and Word paths.
//!
//! A renderer draws nothing and returns zero when its section has no
//! present entries, so empty sections never leave a bare heading.

mod achievements;
mod certifications;
mod education;
mod experience;
mod projects;
mod skills;
mod summary;

use crate::titles::section_title;
use folio_layout::TextStyle;
use folio_render_core::{DocumentBackend, RenderError};
use folio_style::{ExportOptions, SectionKind, TemplateId};
use folio_types::{Color, ResumeData, UserType};

/// Styles derived once per section from the export options.
pub(crate) struct SectionStyles {
    pub template: TemplateId,
    pub sub_header: TextStyle,
    pub body: TextStyle,
    pub muted: TextStyle,
    /// Dates and other right-aligned row values.
    pub value: TextStyle,
    pub entry_spacing: f32,
}

impl SectionStyles {
    fn new(options: &ExportOptions) -> Self {
        let body = TextStyle::body(options);
        Self {
            template: options.template,
            sub_header: TextStyle::sub_header(options),
            muted: body.clone().with_color(Color::MUTED),
            value: body.clone().bold(),
            body,
            entry_spacing: options.entry_spacing,
        }
    }
}

/// True when `kind` has anything to draw for this user type.
pub fn has_content(kind: SectionKind, data: &ResumeData, user_type: UserType) -> bool {
    match kind {
        SectionKind::Summary => data.summary_for(user_type).is_some(),
        SectionKind::WorkExperience => data.present_work().next().is_some(),
        SectionKind::Education => data.present_education().next().is_some(),
        SectionKind::Projects => data.present_projects().next().is_some(),
        SectionKind::Skills => data.present_skills().next().is_some(),
        SectionKind::Certifications => data.present_certifications().next().is_some(),
        SectionKind::Achievements => data.present_achievements().next().is_some(),
    }
}

/// Renders one section. Returns the height consumed, zero if omitted.
pub fn render_section<B: DocumentBackend>(
    backend: &mut B,
    kind: SectionKind,
    data: &ResumeData,
    user_type: UserType,
) -> Result<f32, RenderError> {
    if !has_content(kind, data, user_type) {
        log::debug!("Omitting empty section {}", kind.as_str());
        return Ok(0.0);
    }
    let styles = SectionStyles::new(backend.options());
    let title = section_title(kind, styles.template, user_type);

    backend.begin_section(kind)?;
    let mut height = backend.draw_section_title(title)?;
    height += match kind {
        SectionKind::Summary => summary::render(backend, data, user_type, &styles)?,
        SectionKind::WorkExperience => experience::render(backend, data, &styles)?,
        SectionKind::Education => education::render(backend, data, user_type, &styles)?,
        SectionKind::Projects => projects::render(backend, data, &styles)?,
        SectionKind::Skills => skills::render(backend, data, &styles)?,
        SectionKind::Certifications => certifications::render(backend, data, &styles)?,
        SectionKind::Achievements => achievements::render(backend, data, &styles)?,
    };
    backend.end_section()?;
    Ok(height)
}
