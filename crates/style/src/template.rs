//! The static template table: which sections a template shows, in what
//! order, and in how many columns.

use folio_types::UserType;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    #[default]
    Chronological,
    Functional,
    Combination,
    Minimalist,
    TwoColumnSafe,
}

impl TemplateId {
    pub const ALL: [TemplateId; 5] = [
        TemplateId::Chronological,
        TemplateId::Functional,
        TemplateId::Combination,
        TemplateId::Minimalist,
        TemplateId::TwoColumnSafe,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Chronological => "chronological",
            TemplateId::Functional => "functional",
            TemplateId::Combination => "combination",
            TemplateId::Minimalist => "minimalist",
            TemplateId::TwoColumnSafe => "two_column_safe",
        }
    }

    pub fn config(self) -> &'static TemplateConfig {
        &TEMPLATES[&self]
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| format!("Unknown template '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Summary,
    WorkExperience,
    Education,
    Projects,
    Skills,
    Certifications,
    Achievements,
}

impl SectionKind {
    /// The camelCase key used in resume JSON and markup.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::WorkExperience => "workExperience",
            SectionKind::Education => "education",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Certifications => "certifications",
            SectionKind::Achievements => "achievements",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLayout {
    SingleColumn,
    /// A wide main column next to a narrow sidebar, each paginated on its own.
    TwoColumn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateConfig {
    pub id: TemplateId,
    pub display_name: &'static str,
    pub layout: SectionLayout,
    /// Skills are pulled up to sit directly after the summary.
    pub skills_first: bool,
    /// Skills render as a grid of category cards instead of one line each.
    pub focused_skills: bool,
    /// Section titles are uppercased and underlined with a rule.
    pub uppercase_titles: bool,
    pub highlight_education: bool,
    pub ats_notes: &'static str,
}

/// The sections to lay out, split by column. `sidebar` is empty for
/// single-column templates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionPlan {
    pub main: Vec<SectionKind>,
    pub sidebar: Vec<SectionKind>,
}

const SIDEBAR_SECTIONS: [SectionKind; 3] = [
    SectionKind::Skills,
    SectionKind::Certifications,
    SectionKind::Achievements,
];

fn base_order(user_type: UserType) -> [SectionKind; 7] {
    use SectionKind::*;
    match user_type {
        UserType::Experienced => [
            Summary,
            WorkExperience,
            Skills,
            Projects,
            Education,
            Certifications,
            Achievements,
        ],
        UserType::Fresher => [
            Summary,
            Education,
            Skills,
            WorkExperience,
            Projects,
            Certifications,
            Achievements,
        ],
        UserType::Student => [
            Summary,
            Education,
            Skills,
            Projects,
            WorkExperience,
            Certifications,
            Achievements,
        ],
    }
}

impl TemplateConfig {
    pub fn section_plan(&self, user_type: UserType) -> SectionPlan {
        let mut order = base_order(user_type).to_vec();
        if self.skills_first {
            order.retain(|k| *k != SectionKind::Skills);
            let after_summary = order
                .iter()
                .position(|k| *k == SectionKind::Summary)
                .map_or(0, |i| i + 1);
            order.insert(after_summary, SectionKind::Skills);
        }

        match self.layout {
            SectionLayout::SingleColumn => SectionPlan {
                main: order,
                sidebar: Vec::new(),
            },
            SectionLayout::TwoColumn => {
                let (sidebar, main): (Vec<SectionKind>, Vec<SectionKind>) = order
                    .into_iter()
                    .partition(|k| SIDEBAR_SECTIONS.contains(k));
                SectionPlan { main, sidebar }
            }
        }
    }
}

static TEMPLATES: Lazy<HashMap<TemplateId, TemplateConfig>> = Lazy::new(|| {
    [
        TemplateConfig {
            id: TemplateId::Chronological,
            display_name: "Chronological",
            layout: SectionLayout::SingleColumn,
            skills_first: false,
            focused_skills: false,
            uppercase_titles: true,
            highlight_education: false,
            ats_notes: "Single column, standard headings, reverse-chronological entries.",
        },
        TemplateConfig {
            id: TemplateId::Functional,
            display_name: "Functional",
            layout: SectionLayout::SingleColumn,
            skills_first: true,
            focused_skills: true,
            uppercase_titles: true,
            highlight_education: false,
            ats_notes: "Skills lead; work history is condensed to one line per role.",
        },
        TemplateConfig {
            id: TemplateId::Combination,
            display_name: "Combination",
            layout: SectionLayout::SingleColumn,
            skills_first: true,
            focused_skills: true,
            uppercase_titles: true,
            highlight_education: false,
            ats_notes: "Skills summary followed by full chronological experience.",
        },
        TemplateConfig {
            id: TemplateId::Minimalist,
            display_name: "Minimalist",
            layout: SectionLayout::SingleColumn,
            skills_first: false,
            focused_skills: false,
            uppercase_titles: false,
            highlight_education: true,
            ats_notes: "Sentence-case headings with a bottom border, no rules or colour blocks.",
        },
        TemplateConfig {
            id: TemplateId::TwoColumnSafe,
            display_name: "Two Column (ATS Safe)",
            layout: SectionLayout::TwoColumn,
            skills_first: false,
            focused_skills: false,
            uppercase_titles: true,
            highlight_education: false,
            ats_notes: "Table-based columns that parsers read left to right.",
        },
    ]
    .into_iter()
    .map(|config| (config.id, config))
    .collect()
});
