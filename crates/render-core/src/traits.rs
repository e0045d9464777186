use crate::error::RenderError;
use crate::flow::Flow;
use crate::types::{Card, Column, ContactItem, Row};
use folio_layout::{LayoutCursor, TextStyle};
use folio_style::{ExportOptions, SectionKind};

/// The drawing primitives section renderers are written against.
///
/// Every `draw_*` call lays out one block at the cursor, advances the cursor
/// past it and returns the height consumed in mm. Horizontal offsets are
/// relative to the left edge of the current column.
pub trait DocumentBackend {
    type Output;

    fn flow(&self) -> &Flow;

    fn options(&self) -> &ExportOptions;

    fn cursor(&self) -> LayoutCursor {
        self.flow().cursor()
    }

    fn column_width(&self) -> f32 {
        self.flow().frame().width
    }

    /// Name on top, then the contact line. Called once, before any section.
    fn draw_header(&mut self, name: &str, contacts: &[ContactItem]) -> Result<f32, RenderError>;

    fn draw_text(&mut self, content: &str, x: f32, style: &TextStyle) -> Result<f32, RenderError>;

    /// Title plus rule, reserved as one block. Records the heading as shown.
    fn draw_section_title(&mut self, title: &str) -> Result<f32, RenderError>;

    /// Label left, value right on a shared baseline. The value is measured
    /// first and the label wraps in whatever width is left.
    fn draw_row(&mut self, row: &Row<'_>) -> Result<f32, RenderError>;

    /// "Label: body" with a bold label; continuation lines hang under the
    /// body, not the margin.
    fn draw_labelled_text(
        &mut self,
        label: &str,
        body: &str,
        style: &TextStyle,
    ) -> Result<f32, RenderError>;

    fn draw_bullet(&mut self, text: &str, style: &TextStyle) -> Result<f32, RenderError>;

    /// A bullet with a bold lead and an optional detail.
    fn draw_detailed_bullet(
        &mut self,
        lead: &str,
        detail: Option<&str>,
        style: &TextStyle,
    ) -> Result<f32, RenderError>;

    fn draw_card_grid(&mut self, cards: &[Card]) -> Result<f32, RenderError>;

    /// Vertical whitespace. Zero is valid and draws nothing.
    fn add_gap(&mut self, mm: f32) -> Result<f32, RenderError>;

    /// Starts a new page. Backends without physical pages ignore it.
    fn break_page(&mut self);

    fn begin_section(&mut self, _kind: SectionKind) -> Result<(), RenderError> {
        Ok(())
    }

    fn end_section(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn begin_list(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn end_list(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn begin_columns(&mut self) -> Result<(), RenderError>;

    fn begin_column(&mut self, column: Column) -> Result<(), RenderError>;

    fn end_columns(&mut self) -> Result<(), RenderError>;

    /// Section headings in the order they were drawn, as displayed.
    fn headings(&self) -> &[String];

    /// Produces the finished artifact. Nothing is emitted before this.
    fn finalize(self) -> Result<Self::Output, RenderError>;
}
