//! Positioned drawing operations and their translation into a content stream.

use crate::encoding::to_win_ansi;
use folio_render_core::utils::flip_y;
use folio_style::units::{mm_to_pt, PT_PER_MM};
use folio_style::StandardFont;
use folio_types::{Color, Rect};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// A run of text in one face. `dx` moves the run relative to the start of
/// its line instead of continuing where the previous run ended.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub font: StandardFont,
    pub size: f32,
    pub color: Color,
    pub dx: Option<f32>,
}

/// One drawing operation in page space: millimetres from the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A single line of text; `baseline` is the y of the text baseline.
    Text {
        x: f32,
        baseline: f32,
        runs: Vec<TextRun>,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        thickness: f32,
        color: Color,
    },
    Rect {
        rect: Rect,
        fill: Option<Color>,
        /// Border colour and width in points.
        stroke: Option<(Color, f32)>,
    },
    Link { rect: Rect, uri: String },
}

impl DrawOp {
    /// Plain text of a text op, runs concatenated.
    pub fn text(&self) -> Option<String> {
        match self {
            DrawOp::Text { runs, .. } => Some(runs.iter().map(|r| r.text.as_str()).collect()),
            _ => None,
        }
    }
}

/// Baseline for a line box of `line_height` mm holding text of `font_size` pt.
pub fn baseline_in_line(top: f32, line_height: f32, font_size: f32) -> f32 {
    let size_mm = font_size / PT_PER_MM;
    top + (line_height - size_mm) / 2.0 + size_mm * 0.8
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<StandardFont>,
    font_size: f32,
    fill_color: Option<Color>,
}

/// Accumulates content-stream operations for one page.
pub struct PageContext {
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

impl PageContext {
    /// `page_height` in points.
    pub fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: Default::default(),
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    pub fn draw(&mut self, op: &DrawOp) {
        match op {
            DrawOp::Text { x, baseline, runs } => self.draw_text(*x, *baseline, runs),
            DrawOp::Rule {
                x1,
                x2,
                y,
                thickness,
                color,
            } => self.draw_rule(*x1, *x2, *y, *thickness, *color),
            DrawOp::Rect { rect, fill, stroke } => self.draw_rect(rect, *fill, *stroke),
            // Links become annotations, not content.
            DrawOp::Link { .. } => {}
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn y(&self, y_mm: f32) -> f32 {
        flip_y(mm_to_pt(y_mm), self.page_height)
    }

    fn set_font(&mut self, font: StandardFont, size: f32) {
        if self.state.font != Some(font) || self.state.font_size != size {
            self.push(
                "Tf",
                vec![
                    Object::Name(font.resource_name().as_bytes().to_vec()),
                    size.into(),
                ],
            );
            self.state.font = Some(font);
            self.state.font_size = size;
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.unit_components();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn draw_text(&mut self, x: f32, baseline: f32, runs: &[TextRun]) {
        if runs.iter().all(|r| r.text.is_empty()) {
            return;
        }
        // Every block selects its face explicitly.
        self.state.font = None;
        self.push("BT", vec![]);
        let origin: Vec<Object> = vec![mm_to_pt(x).into(), self.y(baseline).into()];
        self.push("Td", origin);
        for run in runs {
            self.set_font(run.font, run.size);
            self.set_fill_color(run.color);
            if let Some(dx) = run.dx {
                self.push("Td", vec![mm_to_pt(dx).into(), 0.0f32.into()]);
            }
            self.push(
                "Tj",
                vec![Object::String(to_win_ansi(&run.text), StringFormat::Literal)],
            );
        }
        self.push("ET", vec![]);
    }

    fn draw_rule(&mut self, x1: f32, x2: f32, y: f32, thickness: f32, color: Color) {
        let [r, g, b] = color.unit_components();
        let line_y = self.y(y);
        self.push("w", vec![mm_to_pt(thickness).into()]);
        self.push("RG", vec![r.into(), g.into(), b.into()]);
        self.push("m", vec![mm_to_pt(x1).into(), line_y.into()]);
        self.push("l", vec![mm_to_pt(x2).into(), line_y.into()]);
        self.push("S", vec![]);
    }

    fn draw_rect(&mut self, rect: &Rect, fill: Option<Color>, stroke: Option<(Color, f32)>) {
        let rect: Vec<Object> = vec![
            mm_to_pt(rect.x).into(),
            self.y(rect.bottom()).into(),
            mm_to_pt(rect.width).into(),
            mm_to_pt(rect.height).into(),
        ];
        if let Some(fill) = fill {
            self.set_fill_color(fill);
            self.push("re", rect.clone());
            self.push("f", vec![]);
        }
        if let Some((color, line_width)) = stroke {
            let [r, g, b] = color.unit_components();
            self.push("w", vec![line_width.into()]);
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.push("re", rect);
            self.push("S", vec![]);
        }
    }
}
