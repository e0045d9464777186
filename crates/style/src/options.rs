//! User-tunable typography and spacing for one export call.

use crate::font::FontFamily;
use crate::template::TemplateId;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Invalid export options JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fully resolved export options. Sizes are in points, spacings in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    pub template: TemplateId,
    pub font_family: FontFamily,
    pub name_size: f32,
    pub section_header_size: f32,
    pub sub_header_size: f32,
    pub body_text_size: f32,
    pub section_spacing: f32,
    pub entry_spacing: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            template: TemplateId::Chronological,
            font_family: FontFamily::Calibri,
            name_size: 26.0,
            section_header_size: 11.0,
            sub_header_size: 10.5,
            body_text_size: 10.0,
            section_spacing: 3.0,
            entry_spacing: 2.0,
        }
    }
}

/// Documented ranges for the numeric options. Values outside them are
/// tolerated; the drawing layer clamps what it must.
pub const NAME_SIZE_RANGE: RangeInclusive<f32> = 16.0..=30.0;
pub const SECTION_HEADER_SIZE_RANGE: RangeInclusive<f32> = 9.0..=16.0;
pub const SUB_HEADER_SIZE_RANGE: RangeInclusive<f32> = 9.0..=14.0;
pub const BODY_TEXT_SIZE_RANGE: RangeInclusive<f32> = 8.0..=12.0;
pub const SECTION_SPACING_RANGE: RangeInclusive<f32> = 0.0..=10.0;
pub const ENTRY_SPACING_RANGE: RangeInclusive<f32> = 0.0..=5.0;

impl ExportOptions {
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let overrides: ExportOverrides = serde_json::from_str(json)?;
        Ok(resolve_options(Some(&overrides)))
    }

    /// Names of the numeric fields that fall outside their documented range.
    pub fn out_of_range(&self) -> Vec<&'static str> {
        [
            ("nameSize", self.name_size, NAME_SIZE_RANGE),
            ("sectionHeaderSize", self.section_header_size, SECTION_HEADER_SIZE_RANGE),
            ("subHeaderSize", self.sub_header_size, SUB_HEADER_SIZE_RANGE),
            ("bodyTextSize", self.body_text_size, BODY_TEXT_SIZE_RANGE),
            ("sectionSpacing", self.section_spacing, SECTION_SPACING_RANGE),
            ("entrySpacing", self.entry_spacing, ENTRY_SPACING_RANGE),
        ]
        .into_iter()
        .filter(|(_, value, range)| !range.contains(value))
        .map(|(name, _, _)| name)
        .collect()
    }
}

/// The partial options a caller supplies; anything missing takes the default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_header_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_header_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_text_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_spacing: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_spacing: Option<f32>,
}

impl ExportOverrides {
    /// Layers `other` on top of `self`; fields set in `other` win.
    pub fn merged_with(self, other: ExportOverrides) -> ExportOverrides {
        ExportOverrides {
            template: other.template.or(self.template),
            font_family: other.font_family.or(self.font_family),
            name_size: other.name_size.or(self.name_size),
            section_header_size: other.section_header_size.or(self.section_header_size),
            sub_header_size: other.sub_header_size.or(self.sub_header_size),
            body_text_size: other.body_text_size.or(self.body_text_size),
            section_spacing: other.section_spacing.or(self.section_spacing),
            entry_spacing: other.entry_spacing.or(self.entry_spacing),
        }
    }
}

/// Merges the caller's overrides over the template defaults. Never fails.
pub fn resolve_options(overrides: Option<&ExportOverrides>) -> ExportOptions {
    let defaults = ExportOptions::default();
    let Some(o) = overrides else {
        return defaults;
    };
    ExportOptions {
        template: o.template.unwrap_or(defaults.template),
        font_family: o.font_family.unwrap_or(defaults.font_family),
        name_size: o.name_size.unwrap_or(defaults.name_size),
        section_header_size: o.section_header_size.unwrap_or(defaults.section_header_size),
        sub_header_size: o.sub_header_size.unwrap_or(defaults.sub_header_size),
        body_text_size: o.body_text_size.unwrap_or(defaults.body_text_size),
        section_spacing: o.section_spacing.unwrap_or(defaults.section_spacing),
        entry_spacing: o.entry_spacing.unwrap_or(defaults.entry_spacing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_overrides_yields_documented_defaults() {
        let options = resolve_options(None);
        assert_eq!(options.template, TemplateId::Chronological);
        assert_eq!(options.font_family, FontFamily::Calibri);
        assert_eq!(options.name_size, 26.0);
        assert_eq!(options.section_header_size, 11.0);
        assert_eq!(options.sub_header_size, 10.5);
        assert_eq!(options.body_text_size, 10.0);
        assert_eq!(options.section_spacing, 3.0);
        assert_eq!(options.entry_spacing, 2.0);
    }

    #[test]
    fn overrides_win_field_by_field() {
        let overrides = ExportOverrides {
            template: Some(TemplateId::Minimalist),
            entry_spacing: Some(0.0),
            ..Default::default()
        };
        let options = resolve_options(Some(&overrides));
        assert_eq!(options.template, TemplateId::Minimalist);
        assert_eq!(options.entry_spacing, 0.0);
        assert_eq!(options.body_text_size, 10.0);
    }

    #[test]
    fn out_of_range_values_are_reported_not_rejected() {
        let options = ExportOptions::from_json(r#"{"nameSize": 48, "sectionSpacing": -1}"#).unwrap();
        assert_eq!(options.name_size, 48.0);
        assert_eq!(options.out_of_range(), vec!["nameSize", "sectionSpacing"]);
        assert!(ExportOptions::default().out_of_range().is_empty());
    }

    #[test]
    fn later_overrides_take_precedence_when_merged() {
        let file = ExportOverrides {
            body_text_size: Some(9.0),
            name_size: Some(20.0),
            ..Default::default()
        };
        let flags = ExportOverrides {
            name_size: Some(24.0),
            ..Default::default()
        };
        let merged = file.merged_with(flags);
        assert_eq!(merged.name_size, Some(24.0));
        assert_eq!(merged.body_text_size, Some(9.0));
    }
}
