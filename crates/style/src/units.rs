//! Fixed linear conversions between millimetres, points and CSS pixels.
//!
//! The PDF backend lays out in millimetres and writes points; the HTML
//! backend writes points and pixels. Both go through these functions so the
//! same options produce the same physical sizes.

/// CSS pixels per millimetre at the 96 DPI reference.
pub const PX_PER_MM: f32 = 3.779528;
/// CSS pixels per typographic point.
pub const PX_PER_PT: f32 = 1.333;
/// Points per millimetre (72 / 25.4).
pub const PT_PER_MM: f32 = 2.834_646;
/// Millimetres per point (25.4 / 72).
pub const MM_PER_PT: f32 = 0.352_778;
pub const MM_PER_INCH: f32 = 25.4;

pub fn mm_to_device_units(mm: f32) -> f32 {
    mm * PX_PER_MM
}

pub fn pt_to_device_units(pt: f32) -> f32 {
    pt * PX_PER_PT
}

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

pub fn pt_to_mm(pt: f32) -> f32 {
    pt * MM_PER_PT
}

pub fn inch_to_mm(inches: f32) -> f32 {
    inches * MM_PER_INCH
}

/// Height of one text line in millimetres for a font size in points.
pub fn line_height_mm(font_size_pt: f32, factor: f32) -> f32 {
    pt_to_mm(font_size_pt * factor)
}
