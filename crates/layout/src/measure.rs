use crate::metrics::FontMetrics;
use folio_style::units::MM_PER_PT;
use folio_style::{FontFamily, FontWeight};

/// The measurement oracle the wrapper and the drawing layer consult.
///
/// Widths are returned in millimetres at the given point size.
pub trait TextMeasurer {
    fn text_width(&self, text: &str, font_size: f32, weight: FontWeight) -> f32;
}

/// Measures with the standard-14 metrics of the face a family maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StandardFontMetrics {
    family: FontFamily,
}

impl StandardFontMetrics {
    pub fn new(family: FontFamily) -> Self {
        Self { family }
    }
}

impl TextMeasurer for StandardFontMetrics {
    fn text_width(&self, text: &str, font_size: f32, weight: FontWeight) -> f32 {
        let metrics = FontMetrics::for_font(self.family.standard_font(weight));
        metrics.str_width(text) as f32 / 1000.0 * font_size * MM_PER_PT
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn text_width(&self, text: &str, font_size: f32, weight: FontWeight) -> f32 {
        (**self).text_width(text, font_size, weight)
    }
}
