//! Drives one backend through a whole resume: header, then every planned
//! section in order, then `finalize`.

use crate::sections::{has_content, render_section};
use folio_render_core::{Column, ContactItem, ContactKind, DocumentBackend, RenderError};
use folio_style::SectionKind;
use folio_types::{non_blank, ResumeData, UserType};

/// Contact segments in display order, blank fields skipped.
pub fn contact_items(data: &ResumeData) -> Vec<ContactItem> {
    let contact = &data.contact;
    [
        (ContactKind::Email, contact.email.as_deref()),
        (ContactKind::Phone, contact.phone.as_deref()),
        (ContactKind::Location, contact.location.as_deref()),
        (ContactKind::LinkedIn, contact.linkedin.as_deref()),
        (ContactKind::GitHub, contact.github.as_deref()),
    ]
    .into_iter()
    .filter_map(|(kind, value)| non_blank(value).map(|text| ContactItem::new(kind, text)))
    .collect()
}

/// Lays the whole resume out on `backend` without finalising it, so callers
/// can still inspect the backend afterwards.
pub fn lay_out<B: DocumentBackend>(
    backend: &mut B,
    data: &ResumeData,
    user_type: UserType,
) -> Result<(), RenderError> {
    let plan = backend
        .options()
        .template
        .config()
        .section_plan(user_type);
    backend.draw_header(&data.name, &contact_items(data))?;

    if plan.sidebar.is_empty() {
        render_sequence(backend, &plan.main, data, user_type)?;
    } else {
        backend.begin_columns()?;
        backend.begin_column(Column::Main)?;
        render_sequence(backend, &plan.main, data, user_type)?;
        backend.begin_column(Column::Sidebar)?;
        render_sequence(backend, &plan.sidebar, data, user_type)?;
        backend.end_columns()?;
    }
    Ok(())
}

/// Lays out and finalises in one go.
pub fn assemble<B: DocumentBackend>(
    mut backend: B,
    data: &ResumeData,
    user_type: UserType,
) -> Result<B::Output, RenderError> {
    lay_out(&mut backend, data, user_type)?;
    backend.finalize()
}

/// Renders `kinds` in order with section spacing between the ones present.
fn render_sequence<B: DocumentBackend>(
    backend: &mut B,
    kinds: &[SectionKind],
    data: &ResumeData,
    user_type: UserType,
) -> Result<(), RenderError> {
    let spacing = backend.options().section_spacing;
    let mut first = true;
    for &kind in kinds {
        if !has_content(kind, data, user_type) {
            continue;
        }
        if !first {
            backend.add_gap(spacing)?;
        }
        render_section(backend, kind, data, user_type)?;
        first = false;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::ContactInfo;

    #[test]
    fn contact_items_skip_blank_fields_and_keep_order() {
        let data = ResumeData {
            name: "Jane".into(),
            contact: ContactInfo {
                email: Some("jane@example.com".into()),
                phone: Some("  ".into()),
                location: Some("Berlin".into()),
                linkedin: None,
                github: Some("github.com/jane".into()),
            },
            ..Default::default()
        };
        let kinds: Vec<ContactKind> = contact_items(&data).iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ContactKind::Email, ContactKind::Location, ContactKind::GitHub]
        );
    }
}
