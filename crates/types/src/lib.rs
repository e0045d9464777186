pub mod certification;
pub mod color;
pub mod geometry;
pub mod resume;

pub use certification::Certification;
pub use color::Color;
pub use geometry::Rect;
pub use resume::{
    ContactInfo, Education, Origin, Project, ResumeData, SkillCategory, UserType, WorkExperience,
};

/// Returns the trimmed value when it carries visible text.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
