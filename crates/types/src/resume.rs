//! The structured resume record consumed by the layout engine.
//!
//! Field names follow the camelCase JSON produced upstream; contact fields sit
//! flat on the resume object.

use crate::certification::Certification;
use crate::non_blank;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Career stage of the resume owner. Drives section titles and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Fresher,
    #[default]
    Experienced,
}

impl UserType {
    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Fresher => "fresher",
            UserType::Experienced => "experienced",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(UserType::Student),
            "fresher" => Ok(UserType::Fresher),
            "experienced" => Ok(UserType::Experienced),
            other => Err(format!(
                "Unknown user type '{}', expected student, fresher or experienced",
                other
            )),
        }
    }
}

/// How the resume content was produced. Not used by layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Guided,
    Upload,
    #[default]
    Manual,
    JdOptimized,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cgpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relevant_coursework: Vec<String>,
}

impl Education {
    pub fn is_present(&self) -> bool {
        non_blank(Some(&self.degree)).is_some() || non_blank(Some(&self.school)).is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

impl WorkExperience {
    /// Entries without a role are dropped from the layout.
    pub fn is_present(&self) -> bool {
        non_blank(Some(&self.role)).is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

impl Project {
    pub fn is_present(&self) -> bool {
        non_blank(Some(&self.title)).is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub list: Vec<String>,
}

impl SkillCategory {
    pub fn count(&self) -> usize {
        self.list.len()
    }

    /// Non-blank items, trimmed, in input order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.list.iter().filter_map(|s| non_blank(Some(s)))
    }

    pub fn is_present(&self) -> bool {
        non_blank(Some(&self.category)).is_some() && self.items().next().is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub contact: ContactInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_objective: Option<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub origin: Origin,
}

impl ResumeData {
    /// The summary paragraph appropriate for the user type. Students only ever
    /// get their career objective; everyone else only their summary.
    pub fn summary_for(&self, user_type: UserType) -> Option<&str> {
        match user_type {
            UserType::Student => non_blank(self.career_objective.as_deref()),
            UserType::Fresher | UserType::Experienced => non_blank(self.summary.as_deref()),
        }
    }

    pub fn present_work(&self) -> impl Iterator<Item = &WorkExperience> {
        self.work_experience.iter().filter(|w| w.is_present())
    }

    pub fn present_education(&self) -> impl Iterator<Item = &Education> {
        self.education.iter().filter(|e| e.is_present())
    }

    pub fn present_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.is_present())
    }

    pub fn present_skills(&self) -> impl Iterator<Item = &SkillCategory> {
        self.skills.iter().filter(|s| s.is_present())
    }

    pub fn present_certifications(&self) -> impl Iterator<Item = &Certification> {
        self.certifications.iter().filter(|c| c.is_present())
    }

    pub fn present_achievements(&self) -> impl Iterator<Item = &str> {
        self.achievements.iter().filter_map(|a| non_blank(Some(a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_flat_contact_fields() {
        let data: ResumeData = serde_json::from_value(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "github": "github.com/jane",
            "workExperience": [{ "role": "Engineer", "company": "Acme", "year": "2020", "bullets": [] }],
            "skills": [{ "category": "Languages", "list": ["Rust"], "count": 7 }],
            "origin": "jd_optimized"
        }))
        .unwrap();

        assert_eq!(data.contact.email.as_deref(), Some("jane@example.com"));
        assert_eq!(data.contact.github.as_deref(), Some("github.com/jane"));
        assert_eq!(data.origin, Origin::JdOptimized);
        assert_eq!(data.skills[0].count(), 1);
    }

    #[test]
    fn student_summary_uses_career_objective_only() {
        let data = ResumeData {
            summary: Some("Seasoned engineer".into()),
            career_objective: Some("Aspiring engineer".into()),
            ..Default::default()
        };
        assert_eq!(data.summary_for(UserType::Student), Some("Aspiring engineer"));
        assert_eq!(data.summary_for(UserType::Experienced), Some("Seasoned engineer"));

        let no_objective = ResumeData {
            summary: Some("Seasoned engineer".into()),
            ..Default::default()
        };
        assert_eq!(no_objective.summary_for(UserType::Student), None);
    }

    #[test]
    fn work_entries_without_role_are_not_present() {
        let data = ResumeData {
            work_experience: vec![WorkExperience {
                role: "   ".into(),
                company: "Acme".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(data.present_work().count(), 0);
    }

    #[test]
    fn skill_category_needs_visible_items() {
        let empty = SkillCategory {
            category: "Tools".into(),
            list: vec![" ".into()],
        };
        assert!(!empty.is_present());
    }

    #[test]
    fn parses_user_type_case_insensitively() {
        assert_eq!("Student".parse::<UserType>(), Ok(UserType::Student));
        assert!("intern".parse::<UserType>().is_err());
    }
}
