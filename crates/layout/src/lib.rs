use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Cannot advance the cursor by {0}mm; advances must be finite and non-negative.")]
    InvalidAdvance(f32),
}

pub mod cursor;
pub mod measure;
pub mod metrics;
pub mod style;
pub mod wrapper;

pub use self::cursor::LayoutCursor;
pub use self::measure::{StandardFontMetrics, TextMeasurer};
pub use self::metrics::FontMetrics;
pub use self::style::{clamp_font_size, clamp_spacing, TextStyle};
pub use self::wrapper::{wrap_text, TextLine};

#[cfg(test)]
mod cursor_test;
