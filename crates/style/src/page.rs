use crate::units::inch_to_mm;

/// Physical page size and margins, all in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_right: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
}

/// Shared with the Word stylesheet's `@page` rule so both outputs agree.
pub const PAGE_MARGIN_INCHES: f32 = 0.7;

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageGeometry {
    pub fn a4() -> Self {
        let margin = inch_to_mm(PAGE_MARGIN_INCHES);
        Self {
            width: 210.0,
            height: 297.0,
            margin_top: margin,
            margin_right: margin,
            margin_bottom: margin,
            margin_left: margin,
        }
    }

    pub fn content_width(&self) -> f32 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    /// Lowest y (from the page top) content may reach.
    pub fn content_bottom(&self) -> f32 {
        self.height - self.margin_bottom
    }

    pub fn content_height(&self) -> f32 {
        (self.content_bottom() - self.margin_top).max(0.0)
    }
}
