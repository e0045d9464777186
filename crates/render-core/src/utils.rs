use crate::constants::{CONTACT_SEPARATOR, MINIMAL_RULE_PT, SECTION_RULE_PT};
use crate::types::ContactItem;

/// Convert a top-down y coordinate to PDF's bottom-up space.
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Displayed heading text: uppercased unless the template keeps title case.
pub fn heading_text(title: &str, uppercase: bool) -> String {
    if uppercase {
        title.to_uppercase()
    } else {
        title.to_string()
    }
}

/// Width in points of the rule under a section title.
pub fn section_rule_pt(uppercase: bool) -> f32 {
    if uppercase { SECTION_RULE_PT } else { MINIMAL_RULE_PT }
}

/// Non-empty contact segments joined with pipes.
pub fn contact_line(contacts: &[ContactItem]) -> String {
    contacts
        .iter()
        .map(|c| c.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(CONTACT_SEPARATOR)
}
