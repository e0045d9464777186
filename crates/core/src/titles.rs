use folio_style::{SectionKind, TemplateId};
use folio_types::UserType;

/// Title-case heading for a section. Backends decide whether to uppercase it.
pub fn section_title(kind: SectionKind, template: TemplateId, user_type: UserType) -> &'static str {
    use TemplateId::*;
    match kind {
        SectionKind::Summary => match (template, user_type) {
            (_, UserType::Student) => "Career Objective",
            (Functional, _) => "Professional Profile",
            _ => "Professional Summary",
        },
        SectionKind::WorkExperience => match (template, user_type) {
            (_, UserType::Student | UserType::Fresher) => "Internships & Training",
            (Functional, _) => "Work History",
            _ => "Experience",
        },
        SectionKind::Projects => match (template, user_type) {
            (_, UserType::Student | UserType::Fresher) => "Academic Projects",
            (Functional | Combination, _) => "Relevant Projects",
            _ => "Projects",
        },
        SectionKind::Skills => match template {
            Functional | Combination => "Key Skills",
            _ => "Technical Skills",
        },
        SectionKind::Education => "Education",
        SectionKind::Certifications => "Certifications",
        SectionKind::Achievements => "Achievements",
    }
}
