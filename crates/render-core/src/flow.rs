//! Cursor and column bookkeeping shared by every backend.
//!
//! A backend owns one `Flow` per render call. The PDF backend runs it with
//! pagination on; the Word backend runs it with pagination off and only uses
//! it to keep a nominal vertical position.

use crate::constants::{COLUMN_GUTTER_MM, MAIN_COLUMN_RATIO};
use crate::error::RenderError;
use crate::types::Column;
use folio_layout::{
    clamp_spacing, wrap_text, LayoutCursor, StandardFontMetrics, TextLine, TextMeasurer, TextStyle,
};
use folio_style::units::line_height_mm;
use folio_style::{FontFamily, PageGeometry};

/// Horizontal extent of the column being filled, in absolute page mm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnFrame {
    pub x: f32,
    pub width: f32,
}

#[derive(Debug, Clone, Copy)]
struct ColumnSplit {
    start: LayoutCursor,
    furthest: LayoutCursor,
}

#[derive(Debug, Clone)]
pub struct Flow {
    page: PageGeometry,
    cursor: LayoutCursor,
    frame: ColumnFrame,
    measurer: StandardFontMetrics,
    line_height_factor: f32,
    paginate: bool,
    split: Option<ColumnSplit>,
    page_count: usize,
}

impl Flow {
    pub fn new(page: PageGeometry, family: FontFamily, line_height_factor: f32, paginate: bool) -> Self {
        Self {
            cursor: LayoutCursor::new(&page),
            frame: ColumnFrame {
                x: page.margin_left,
                width: page.content_width(),
            },
            page,
            measurer: StandardFontMetrics::new(family),
            line_height_factor,
            paginate,
            split: None,
            page_count: 1,
        }
    }

    pub fn page(&self) -> &PageGeometry {
        &self.page
    }

    pub fn cursor(&self) -> LayoutCursor {
        self.cursor
    }

    pub fn frame(&self) -> ColumnFrame {
        self.frame
    }

    pub fn measurer(&self) -> &StandardFontMetrics {
        &self.measurer
    }

    /// Highest page number any column has reached.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn line_height(&self, font_size: f32) -> f32 {
        line_height_mm(font_size, self.line_height_factor)
    }

    pub fn text_width(&self, text: &str, style: &TextStyle) -> f32 {
        self.measurer
            .text_width(text, style.effective_font_size(), style.weight)
    }

    /// Wraps `text` for a block starting `x` mm into the current column.
    pub fn wrap(&self, text: &str, x: f32, style: &TextStyle) -> Vec<TextLine> {
        let available = (self.frame.width - x).max(0.0);
        wrap_text(
            text,
            style.wrap_width(available),
            &self.measurer,
            style.effective_font_size(),
            style.weight,
        )
    }

    /// Positions a block of `height` mm, breaking the page first if it does
    /// not fit. Returns the cursor the block starts at; does not advance.
    pub fn place(&mut self, height: f32) -> LayoutCursor {
        if self.paginate {
            self.cursor = self.cursor.reserve(height);
            self.page_count = self.page_count.max(self.cursor.page_index());
        }
        self.cursor
    }

    pub fn advance(&mut self, amount: f32) -> Result<(), RenderError> {
        self.cursor = self.cursor.advance(amount)?;
        Ok(())
    }

    /// Advances by a spacing value, clamped so a gap never pushes the cursor
    /// past the bottom margin on its own.
    pub fn gap(&mut self, mm: f32) -> Result<f32, RenderError> {
        let mut amount = clamp_spacing(mm);
        if self.paginate {
            amount = amount.min(self.cursor.remaining());
        }
        self.advance(amount)?;
        Ok(amount)
    }

    /// Unconditional page break. No-op for unpaginated flows.
    pub fn break_page(&mut self) {
        if self.paginate {
            self.cursor = self.cursor.break_page();
            self.page_count = self.page_count.max(self.cursor.page_index());
        }
    }

    pub fn begin_columns(&mut self) {
        self.split = Some(ColumnSplit {
            start: self.cursor,
            furthest: self.cursor,
        });
    }

    /// Starts filling `column` from where the split began. Each column keeps
    /// its own page breaks.
    pub fn begin_column(&mut self, column: Column) {
        let Some(split) = self.split.as_mut() else {
            log::warn!("Column {:?} started outside a column split, ignoring", column);
            return;
        };
        split.furthest = further(split.furthest, self.cursor);
        self.cursor = split.start;
        self.frame = self.column_frame(column);
    }

    /// Leaves the split below the taller column.
    pub fn end_columns(&mut self) {
        if let Some(split) = self.split.take() {
            self.cursor = further(split.furthest, self.cursor);
        }
        self.frame = ColumnFrame {
            x: self.page.margin_left,
            width: self.page.content_width(),
        };
    }

    pub fn column_frame(&self, column: Column) -> ColumnFrame {
        let content = self.page.content_width();
        let main = content * MAIN_COLUMN_RATIO;
        match column {
            Column::Main => ColumnFrame {
                x: self.page.margin_left,
                width: main,
            },
            Column::Sidebar => ColumnFrame {
                x: self.page.margin_left + main + COLUMN_GUTTER_MM,
                width: (content - main - COLUMN_GUTTER_MM).max(0.0),
            },
        }
    }
}

fn further(a: LayoutCursor, b: LayoutCursor) -> LayoutCursor {
    let key = |c: &LayoutCursor| (c.page_index(), c.offset());
    if key(&b) > key(&a) { b } else { a }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow(paginate: bool) -> Flow {
        Flow::new(PageGeometry::a4(), FontFamily::Calibri, 1.2, paginate)
    }

    #[test]
    fn columns_share_a_start_and_end_below_the_taller() {
        let mut flow = flow(true);
        flow.advance(20.0).unwrap();
        let start = flow.cursor().offset();

        flow.begin_columns();
        flow.begin_column(Column::Main);
        flow.advance(30.0).unwrap();
        flow.begin_column(Column::Sidebar);
        assert_eq!(flow.cursor().offset(), start);
        assert!(flow.frame().x > PageGeometry::a4().margin_left);
        flow.advance(10.0).unwrap();
        flow.end_columns();

        assert!((flow.cursor().offset() - (start + 30.0)).abs() < 1e-4);
        assert_eq!(flow.frame().width, PageGeometry::a4().content_width());
    }

    #[test]
    fn column_frames_fill_the_content_width() {
        let flow = flow(true);
        let main = flow.column_frame(Column::Main);
        let side = flow.column_frame(Column::Sidebar);
        let total = main.width + COLUMN_GUTTER_MM + side.width;
        assert!((total - PageGeometry::a4().content_width()).abs() < 1e-4);
    }

    #[test]
    fn unpaginated_flow_never_breaks() {
        let mut flow = flow(false);
        flow.advance(400.0).unwrap();
        let at = flow.place(50.0);
        flow.break_page();
        assert_eq!(at.page_index(), 1);
        assert_eq!(flow.page_count(), 1);
    }

    #[test]
    fn gaps_stop_at_the_bottom_margin() {
        let mut flow = flow(true);
        let height = flow.page().content_height();
        flow.advance(height - 1.0).unwrap();
        let consumed = flow.gap(5.0).unwrap();
        assert!((consumed - 1.0).abs() < 1e-3);
        assert_eq!(flow.gap(-2.0).unwrap(), 0.0);
    }
}
