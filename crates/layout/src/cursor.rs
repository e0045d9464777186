use crate::LayoutError;
use folio_style::PageGeometry;

/// Slack for comparing accumulated float offsets against the page bottom.
const EPSILON: f32 = 1e-3;

/// Where the next block goes: a page number and a vertical offset in
/// millimetres from the top edge of that page.
///
/// The cursor is a value. Every transition returns a new cursor, so a
/// renderer can keep the snapshot it started from and compare.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    page_index: usize,
    offset: f32,
    top: f32,
    bottom: f32,
}

impl LayoutCursor {
    /// A cursor at the top of the first page's content area.
    pub fn new(page: &PageGeometry) -> Self {
        Self {
            page_index: 1,
            offset: page.margin_top,
            top: page.margin_top,
            bottom: page.content_bottom(),
        }
    }

    /// One-based page number.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn content_bottom(&self) -> f32 {
        self.bottom
    }

    pub fn remaining(&self) -> f32 {
        (self.bottom - self.offset).max(0.0)
    }

    pub fn is_at_top(&self) -> bool {
        self.offset <= self.top + EPSILON
    }

    /// True iff a block of `height` mm still ends above the bottom margin.
    pub fn has_space(&self, height: f32) -> bool {
        self.offset + height <= self.bottom + EPSILON
    }

    /// Moves down by `amount` mm. Zero is a valid advance.
    pub fn advance(self, amount: f32) -> Result<Self, LayoutError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(LayoutError::InvalidAdvance(amount));
        }
        Ok(Self {
            offset: self.offset + amount,
            ..self
        })
    }

    /// The top of the next page.
    pub fn break_page(self) -> Self {
        log::debug!("Page break after page {} at {:.2}mm", self.page_index, self.offset);
        Self {
            page_index: self.page_index + 1,
            offset: self.top,
            ..self
        }
    }

    /// Breaks the page first unless `height` fits here or the cursor already
    /// sits at a page top, where a taller block is accepted as overflow.
    pub fn reserve(self, height: f32) -> Self {
        if self.has_space(height) || self.is_at_top() {
            if !self.has_space(height) {
                log::debug!(
                    "Block of {:.2}mm exceeds the page content height, drawing it anyway",
                    height
                );
            }
            self
        } else {
            self.break_page()
        }
    }
}
