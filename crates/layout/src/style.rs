use folio_style::{ExportOptions, FontWeight, TextAlign};
use folio_types::Color;

pub const MIN_FONT_SIZE: f32 = 1.0;
pub const MAX_FONT_SIZE: f32 = 96.0;
const FALLBACK_FONT_SIZE: f32 = 10.0;

/// Clamps a point size into the range the drawing layer can render.
pub fn clamp_font_size(size: f32) -> f32 {
    if size.is_finite() {
        size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
    } else {
        FALLBACK_FONT_SIZE
    }
}

/// Spacing in millimetres, never negative.
pub fn clamp_spacing(mm: f32) -> f32 {
    if mm.is_finite() { mm.max(0.0) } else { 0.0 }
}

/// How a single text run is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub weight: FontWeight,
    pub color: Color,
    pub align: TextAlign,
    /// Wrap width in mm. `None` means the rest of the current column.
    pub max_width: Option<f32>,
    pub background: Option<Color>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: FALLBACK_FONT_SIZE,
            weight: FontWeight::Regular,
            color: Color::BLACK,
            align: TextAlign::Left,
            max_width: None,
            background: None,
        }
    }
}

impl TextStyle {
    pub fn sized(font_size: f32) -> Self {
        Self {
            font_size: clamp_font_size(font_size),
            ..Default::default()
        }
    }

    pub fn name(options: &ExportOptions) -> Self {
        Self::sized(options.name_size)
            .bold()
            .aligned(TextAlign::Center)
    }

    pub fn section_header(options: &ExportOptions) -> Self {
        Self::sized(options.section_header_size).bold()
    }

    pub fn sub_header(options: &ExportOptions) -> Self {
        Self::sized(options.sub_header_size).bold()
    }

    pub fn body(options: &ExportOptions) -> Self {
        Self::sized(options.body_text_size)
    }

    pub fn bold(self) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..self
        }
    }

    pub fn regular(self) -> Self {
        Self {
            weight: FontWeight::Regular,
            ..self
        }
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    pub fn aligned(self, align: TextAlign) -> Self {
        Self { align, ..self }
    }

    pub fn with_max_width(self, max_width: f32) -> Self {
        Self {
            max_width: Some(max_width.max(0.0)),
            ..self
        }
    }

    pub fn with_background(self, background: Color) -> Self {
        Self {
            background: Some(background),
            ..self
        }
    }

    /// Font size after clamping, for styles built by hand.
    pub fn effective_font_size(&self) -> f32 {
        clamp_font_size(self.font_size)
    }

    /// The wrap width given the space left in the current column.
    pub fn wrap_width(&self, available: f32) -> f32 {
        self.max_width.map_or(available, |w| w.min(available)).max(0.0)
    }
}
