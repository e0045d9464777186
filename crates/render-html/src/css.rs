//! Print stylesheet embedded in every Word document.

use folio_render_core::constants::{
    BULLET_INDENT_MM, BULLET_TEXT_GAP_MM, CARD_BORDER_PT, CARD_GUTTER_MM, CARD_PADDING_MM,
    COLUMN_GUTTER_MM, CONTACT_AFTER_MM, HTML_LINE_HEIGHT, MAIN_COLUMN_RATIO, NAME_AFTER_MM,
    MINIMAL_RULE_PT, SECTION_AFTER_MM, SECTION_RULE_GAP_MM, SECTION_RULE_PT,
};
use folio_style::units::{mm_to_device_units, pt_to_device_units, MM_PER_INCH};
use folio_style::{ExportOptions, FontWeight, PageGeometry};
use folio_types::Color;
use std::fmt::Write;

fn round2(px: f32) -> f32 {
    (px * 100.0).round() / 100.0
}

/// Device pixels for a width in points, to two decimals.
fn pt_px(pt: f32) -> f32 {
    round2(pt_to_device_units(pt))
}

fn mm_px(mm: f32) -> f32 {
    round2(mm_to_device_units(mm))
}

/// Builds the stylesheet for one document.
///
/// Margins come from the page geometry in inches, so Word reproduces the
/// same content box as the PDF.
pub fn stylesheet(options: &ExportOptions, page: &PageGeometry) -> Result<String, std::fmt::Error> {
    let mut css = String::new();
    let margin = |mm: f32| mm / MM_PER_INCH;
    let bold = FontWeight::Bold.numeric_value();

    writeln!(
        css,
        "@page Section1 {{ size: {:.0}mm {:.0}mm; margin: {:.2}in {:.2}in {:.2}in {:.2}in; }}",
        page.width,
        page.height,
        margin(page.margin_top),
        margin(page.margin_right),
        margin(page.margin_bottom),
        margin(page.margin_left),
    )?;
    writeln!(css, "div.Section1 {{ page: Section1; }}")?;
    writeln!(
        css,
        "body {{ font-family: {}; font-size: {:.1}pt; line-height: {}; color: {}; margin: 0; }}",
        options.font_family.css_stack(),
        options.body_text_size,
        HTML_LINE_HEIGHT,
        Color::BLACK,
    )?;
    writeln!(css, "p {{ margin: 0; }}")?;
    writeln!(
        css,
        "h1 {{ font-size: {:.1}pt; font-weight: {bold}; text-align: center; margin: 0 0 {:.2}mm 0; }}",
        options.name_size, NAME_AFTER_MM,
    )?;
    writeln!(
        css,
        "p.contact {{ text-align: center; color: {}; margin: 0 0 {:.2}mm 0; }}",
        Color::MUTED,
        CONTACT_AFTER_MM,
    )?;
    writeln!(css, "p.contact a {{ color: {}; text-decoration: none; }}", Color::MUTED)?;
    writeln!(
        css,
        "h2.section-title {{ font-size: {:.1}pt; font-weight: {bold}; margin: 0 0 {}px 0; padding-bottom: {}px; border-bottom: {}px solid {}; }}",
        options.section_header_size,
        mm_px(SECTION_AFTER_MM),
        mm_px(SECTION_RULE_GAP_MM),
        pt_px(SECTION_RULE_PT),
        Color::RULE,
    )?;
    writeln!(
        css,
        "h2.section-title.minimal {{ border-bottom-width: {}px; }}",
        pt_px(MINIMAL_RULE_PT),
    )?;
    writeln!(css, "table.row {{ width: 100%; border-collapse: collapse; }}")?;
    writeln!(css, "table.row td {{ padding: 0; vertical-align: top; }}")?;
    writeln!(css, "table.row td.value {{ text-align: right; white-space: nowrap; }}")?;
    writeln!(
        css,
        "ul.bullets {{ margin: 0; padding-left: {:.2}mm; }}",
        BULLET_INDENT_MM + BULLET_TEXT_GAP_MM,
    )?;
    writeln!(css, "ul.bullets li {{ margin: 0; }}")?;
    writeln!(css, ".detail {{ color: {}; }}", Color::MUTED)?;
    writeln!(css, ".highlight {{ background: {}; }}", Color::HIGHLIGHT)?;
    writeln!(
        css,
        "table.cards {{ width: 100%; border-collapse: separate; border-spacing: {:.2}mm; }}",
        CARD_GUTTER_MM,
    )?;
    writeln!(
        css,
        "table.cards td.card {{ width: 50%; vertical-align: top; padding: {:.2}mm; border: {}px solid {}; }}",
        CARD_PADDING_MM,
        pt_px(CARD_BORDER_PT),
        Color::RULE,
    )?;
    writeln!(css, ".card-title {{ font-size: {:.1}pt; font-weight: {bold}; }}", options.sub_header_size)?;
    writeln!(css, "table.columns {{ width: 100%; border-collapse: collapse; }}")?;
    writeln!(
        css,
        "table.columns td.main {{ width: {:.0}%; vertical-align: top; padding: 0 {:.2}mm 0 0; }}",
        MAIN_COLUMN_RATIO * 100.0,
        COLUMN_GUTTER_MM,
    )?;
    writeln!(css, "table.columns td.sidebar {{ vertical-align: top; padding: 0; }}")?;
    write!(css, "div.spacer {{ font-size: 1pt; line-height: 1pt; }}")?;
    Ok(css)
}
