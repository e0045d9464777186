//! Fixed layout measurements shared by both backends. Lengths are in mm.

pub const PDF_LINE_HEIGHT: f32 = 1.2;
pub const HTML_LINE_HEIGHT: f32 = 1.25;

pub const NAME_AFTER_MM: f32 = 1.5;
pub const CONTACT_AFTER_MM: f32 = 4.0;
pub const CONTACT_SEPARATOR: &str = " | ";

/// One CSS pixel.
pub const SECTION_RULE_PT: f32 = 0.75;
/// The thinner bottom border of title-case headings.
pub const MINIMAL_RULE_PT: f32 = 0.5;
pub const SECTION_RULE_GAP_MM: f32 = 1.0;
pub const SECTION_AFTER_MM: f32 = 2.0;

pub const BULLET_GLYPH: &str = "•";
pub const BULLET_INDENT_MM: f32 = 3.0;
/// Distance from the bullet glyph to its text.
pub const BULLET_TEXT_GAP_MM: f32 = 3.0;
/// Indent of the detail line under a certification.
pub const DETAIL_INDENT_MM: f32 = 4.0;

pub const ROW_GAP_MM: f32 = 4.0;

pub const MAIN_COLUMN_RATIO: f32 = 0.62;
pub const COLUMN_GUTTER_MM: f32 = 6.0;

pub const CARD_COLUMNS: usize = 2;
pub const CARD_GUTTER_MM: f32 = 4.0;
pub const CARD_PADDING_MM: f32 = 2.0;
pub const CARD_BORDER_PT: f32 = 0.3;

pub const FOOTER_FONT_SIZE: f32 = 8.0;
