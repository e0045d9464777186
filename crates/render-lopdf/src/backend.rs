use crate::encoding::{to_win_ansi, unencodable_chars};
use crate::page::{baseline_in_line, DrawOp, PageContext, TextRun};
use crate::writer::StreamingPdfWriter;
use folio_layout::{TextLine, TextStyle};
use folio_render_core::constants::{
    BULLET_GLYPH, BULLET_INDENT_MM, BULLET_TEXT_GAP_MM, CARD_BORDER_PT, CARD_COLUMNS,
    CARD_GUTTER_MM, CARD_PADDING_MM, CONTACT_AFTER_MM, CONTACT_SEPARATOR, DETAIL_INDENT_MM,
    FOOTER_FONT_SIZE, NAME_AFTER_MM, PDF_LINE_HEIGHT, ROW_GAP_MM, SECTION_AFTER_MM,
    SECTION_RULE_GAP_MM,
};
use folio_render_core::utils::{heading_text, section_rule_pt};
use folio_render_core::{
    Card, Column, ContactItem, DocumentBackend, Flow, RenderError, Row,
};
use folio_style::units::{mm_to_pt, pt_to_mm};
use folio_style::{ExportOptions, FontWeight, PageGeometry, StandardFont, TextAlign};
use folio_types::{Color, Rect};
use lopdf::{dictionary, Dictionary, Object, StringFormat};
use std::io::Cursor;

const PDF_VERSION: &str = "1.7";
const PRODUCER: &str = concat!("folio ", env!("CARGO_PKG_VERSION"));

/// Lays content out onto A4 pages and serialises it with lopdf.
///
/// Drawing calls only record positioned operations per page. Pages, the
/// "Page N of M" footers and the object graph are produced in `finalize`,
/// once the total page count is known.
pub struct PdfBackend {
    options: ExportOptions,
    flow: Flow,
    pages: Vec<Vec<DrawOp>>,
    headings: Vec<String>,
    author: Option<String>,
    lossy_fields: usize,
}

impl PdfBackend {
    pub fn new(options: ExportOptions) -> Self {
        Self::with_page(options, PageGeometry::a4())
    }

    pub fn with_page(options: ExportOptions, page: PageGeometry) -> Self {
        let flow = Flow::new(page, options.font_family, PDF_LINE_HEIGHT, true);
        Self {
            options,
            flow,
            pages: vec![Vec::new()],
            headings: Vec::new(),
            author: None,
            lossy_fields: 0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.flow.page_count()
    }

    /// Operations recorded so far on a one-based page.
    pub fn page_ops(&self, page_index: usize) -> &[DrawOp] {
        page_index
            .checked_sub(1)
            .and_then(|i| self.pages.get(i))
            .map_or(&[], Vec::as_slice)
    }

    /// Fields drawn so far that had characters printed as `?`.
    pub(crate) fn lossy_field_count(&self) -> usize {
        self.lossy_fields
    }

    /// Warns once for a field the standard fonts cannot show in full.
    fn check_encoding(&mut self, text: &str) {
        let missing = unencodable_chars(text);
        if missing.is_empty() {
            return;
        }
        self.lossy_fields += 1;
        let shown: String = missing.iter().collect();
        log::warn!(
            "'{}' has {} character(s) outside WinAnsi ({}); they print as '?'",
            text.trim(),
            missing.len(),
            shown
        );
    }

    fn push(&mut self, page_index: usize, op: DrawOp) {
        if self.pages.len() < page_index {
            self.pages.resize_with(page_index, Vec::new);
        }
        self.pages[page_index.saturating_sub(1)].push(op);
    }

    fn font(&self, weight: FontWeight) -> StandardFont {
        self.options.font_family.standard_font(weight)
    }

    fn run(&self, text: impl Into<String>, style: &TextStyle) -> TextRun {
        TextRun {
            text: text.into(),
            font: self.font(style.weight),
            size: style.effective_font_size(),
            color: style.color,
            dx: None,
        }
    }

    fn line_height(&self, style: &TextStyle) -> f32 {
        self.flow.line_height(style.effective_font_size())
    }

    /// Records wrapped lines top-down from `top`, aligned within `available`.
    fn emit_lines(
        &mut self,
        page_index: usize,
        top: f32,
        x: f32,
        available: f32,
        lines: &[TextLine],
        style: &TextStyle,
    ) {
        let line_height = self.line_height(style);
        let size = style.effective_font_size();
        for (i, line) in lines.iter().enumerate() {
            let line_top = top + i as f32 * line_height;
            if let Some(background) = style.background {
                self.push(
                    page_index,
                    DrawOp::Rect {
                        rect: Rect::new(x, line_top, available, line_height),
                        fill: Some(background),
                        stroke: None,
                    },
                );
            }
            let slack = (available - line.width).max(0.0);
            let line_x = x + match style.align {
                TextAlign::Left => 0.0,
                TextAlign::Center => slack / 2.0,
                TextAlign::Right => slack,
            };
            let run = self.run(line.text.clone(), style);
            self.push(
                page_index,
                DrawOp::Text {
                    x: line_x,
                    baseline: baseline_in_line(line_top, line_height, size),
                    runs: vec![run],
                },
            );
        }
    }

    /// Records a bulleted block: glyph and first line share a text object,
    /// continuation lines hang under the text.
    fn emit_bullet_lines(
        &mut self,
        page_index: usize,
        top: f32,
        lines: &[TextLine],
        style: &TextStyle,
    ) {
        let Some((first, rest)) = lines.split_first() else {
            return;
        };
        let frame = self.flow.frame();
        let line_height = self.line_height(style);
        let size = style.effective_font_size();

        let glyph = self.run(BULLET_GLYPH, &style.clone().regular());
        let mut text = self.run(first.text.clone(), style);
        text.dx = Some(BULLET_TEXT_GAP_MM);
        self.push(
            page_index,
            DrawOp::Text {
                x: frame.x + BULLET_INDENT_MM,
                baseline: baseline_in_line(top, line_height, size),
                runs: vec![glyph, text],
            },
        );
        self.emit_lines(
            page_index,
            top + line_height,
            frame.x + BULLET_INDENT_MM + BULLET_TEXT_GAP_MM,
            frame.width,
            rest,
            style,
        );
    }

    /// Greedily packs contact segments into centred lines.
    fn pack_contacts<'c>(
        &self,
        contacts: &'c [ContactItem],
        style: &TextStyle,
    ) -> Vec<(Vec<(&'c ContactItem, f32)>, f32)> {
        let width = self.flow.frame().width;
        let separator = self.flow.text_width(CONTACT_SEPARATOR, style);
        let mut lines: Vec<(Vec<(&ContactItem, f32)>, f32)> = Vec::new();
        let mut current: Vec<(&ContactItem, f32)> = Vec::new();
        let mut current_width = 0.0f32;

        for item in contacts.iter().filter(|c| !c.text.trim().is_empty()) {
            let item_width = self.flow.text_width(item.text.trim(), style);
            if !current.is_empty() && current_width + separator + item_width > width {
                lines.push((std::mem::take(&mut current), current_width));
                current_width = 0.0;
            }
            if !current.is_empty() {
                current_width += separator;
            }
            current.push((item, item_width));
            current_width += item_width;
        }
        if !current.is_empty() {
            lines.push((current, current_width));
        }
        lines
    }

    fn draw_contacts(&mut self, contacts: &[ContactItem]) -> Result<f32, RenderError> {
        let style = TextStyle::body(&self.options).with_color(Color::MUTED);
        for item in contacts {
            self.check_encoding(&item.text);
        }
        let lines = self.pack_contacts(contacts, &style);
        if lines.is_empty() {
            return Ok(0.0);
        }
        let separator = self.flow.text_width(CONTACT_SEPARATOR, &style);
        let line_height = self.line_height(&style);
        let height = lines.len() as f32 * line_height;
        let at = self.flow.place(height);
        let frame = self.flow.frame();

        let mut ops = Vec::new();
        for (i, (segments, line_width)) in lines.iter().enumerate() {
            let top = at.offset() + i as f32 * line_height;
            let mut x = frame.x + ((frame.width - line_width) / 2.0).max(0.0);
            let text = segments
                .iter()
                .map(|(item, _)| item.text.trim())
                .collect::<Vec<_>>()
                .join(CONTACT_SEPARATOR);
            ops.push(DrawOp::Text {
                x,
                baseline: baseline_in_line(top, line_height, style.effective_font_size()),
                runs: vec![self.run(text, &style)],
            });
            for (item, item_width) in segments {
                if let Some(uri) = item.href() {
                    ops.push(DrawOp::Link {
                        rect: Rect::new(x, top, *item_width, line_height),
                        uri,
                    });
                }
                x += item_width + separator;
            }
        }
        for op in ops {
            self.push(at.page_index(), op);
        }
        self.flow.advance(height)?;
        Ok(height)
    }

    fn footer(&self, page_number: usize, total: usize) -> DrawOp {
        let page = self.flow.page();
        let style = TextStyle::sized(FOOTER_FONT_SIZE).with_color(Color::RULE);
        let label = format!("Page {} of {}", page_number, total);
        let width = self.flow.text_width(&label, &style);
        let size_mm = pt_to_mm(FOOTER_FONT_SIZE);
        DrawOp::Text {
            x: page.width - page.margin_right - width,
            baseline: page.height - page.margin_bottom / 2.0 + size_mm * 0.35,
            runs: vec![self.run(label, &style)],
        }
    }

    fn info_dictionary(&self) -> Dictionary {
        let mut info = dictionary! {
            "Producer" => Object::String(to_win_ansi(PRODUCER), StringFormat::Literal),
        };
        if let Some(author) = &self.author {
            info.set(
                "Title",
                Object::String(to_win_ansi(&format!("{} - Resume", author)), StringFormat::Literal),
            );
            info.set("Author", Object::String(to_win_ansi(author), StringFormat::Literal));
        }
        info
    }
}

fn font_dictionary() -> Dictionary {
    let mut fonts = Dictionary::new();
    for font in StandardFont::ALL {
        fonts.set(
            font.resource_name(),
            dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            },
        );
    }
    fonts
}

fn link_annotation(rect: &Rect, uri: &str, page_height: f32) -> Dictionary {
    let bounds: Vec<Object> = vec![
        mm_to_pt(rect.x).into(),
        (page_height - mm_to_pt(rect.bottom())).into(),
        mm_to_pt(rect.right()).into(),
        (page_height - mm_to_pt(rect.y)).into(),
    ];
    dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => bounds,
        "Border" => vec![Object::Integer(0), Object::Integer(0), Object::Integer(0)],
        "A" => dictionary! {
            "S" => "URI",
            "URI" => Object::String(uri.as_bytes().to_vec(), StringFormat::Literal),
        },
    }
}

impl DocumentBackend for PdfBackend {
    type Output = Vec<u8>;

    fn flow(&self) -> &Flow {
        &self.flow
    }

    fn options(&self) -> &ExportOptions {
        &self.options
    }

    fn draw_header(&mut self, name: &str, contacts: &[ContactItem]) -> Result<f32, RenderError> {
        let name = name.trim();
        self.author = Some(name.to_string());
        let style = TextStyle::name(&self.options);
        let mut height = self.draw_text(&name.to_uppercase(), 0.0, &style)?;
        height += self.add_gap(NAME_AFTER_MM)?;
        height += self.draw_contacts(contacts)?;
        height += self.add_gap(CONTACT_AFTER_MM)?;
        Ok(height)
    }

    fn draw_text(&mut self, content: &str, x: f32, style: &TextStyle) -> Result<f32, RenderError> {
        self.check_encoding(content);
        let lines = self.flow.wrap(content, x, style);
        if lines.is_empty() {
            return Ok(0.0);
        }
        let height = lines.len() as f32 * self.line_height(style);
        let at = self.flow.place(height);
        let frame = self.flow.frame();
        let available = style.wrap_width((frame.width - x).max(0.0));
        self.emit_lines(at.page_index(), at.offset(), frame.x + x, available, &lines, style);
        self.flow.advance(height)?;
        Ok(height)
    }

    fn draw_section_title(&mut self, title: &str) -> Result<f32, RenderError> {
        let uppercase = self.options.template.config().uppercase_titles;
        let shown = heading_text(title.trim(), uppercase);
        self.check_encoding(&shown);
        let style = TextStyle::section_header(&self.options);
        let lines = self.flow.wrap(&shown, 0.0, &style);
        let text_height = lines.len() as f32 * self.line_height(&style);
        let thickness = pt_to_mm(section_rule_pt(uppercase));
        let height = text_height + SECTION_RULE_GAP_MM + thickness + SECTION_AFTER_MM;

        let at = self.flow.place(height);
        let frame = self.flow.frame();
        self.emit_lines(at.page_index(), at.offset(), frame.x, frame.width, &lines, &style);
        self.push(
            at.page_index(),
            DrawOp::Rule {
                x1: frame.x,
                x2: frame.x + frame.width,
                y: at.offset() + text_height + SECTION_RULE_GAP_MM,
                thickness,
                color: Color::RULE,
            },
        );
        self.flow.advance(height)?;
        log::debug!("Section '{}' on page {}", shown, at.page_index());
        self.headings.push(shown);
        Ok(height)
    }

    fn draw_row(&mut self, row: &Row<'_>) -> Result<f32, RenderError> {
        let frame = self.flow.frame();
        let value = row.value.trim();
        self.check_encoding(row.label);
        self.check_encoding(value);
        let value_width = if value.is_empty() {
            0.0
        } else {
            self.flow.text_width(value, &row.value_style)
        };
        // A value too wide to share the line drops below the label instead.
        let inline = value.is_empty() || value_width + ROW_GAP_MM <= frame.width / 2.0;
        let label_width = if inline && !value.is_empty() {
            frame.width - value_width - ROW_GAP_MM
        } else {
            frame.width
        };

        let label_style = row.label_style.clone().with_max_width(label_width);
        let lines = self.flow.wrap(row.label, 0.0, &label_style);
        let label_line_height = self.line_height(&row.label_style);
        let value_line_height = self.line_height(&row.value_style);
        let label_height = lines.len() as f32 * label_line_height;
        let height = match (value.is_empty(), inline) {
            (true, _) => label_height,
            (false, true) => label_height.max(value_line_height),
            (false, false) => label_height + value_line_height,
        };
        if height <= 0.0 {
            return Ok(0.0);
        }

        let at = self.flow.place(height);
        let page_index = at.page_index();
        self.emit_lines(page_index, at.offset(), frame.x, label_width, &lines, &label_style);

        if !value.is_empty() {
            let (top, line_height, size) = if inline && !lines.is_empty() {
                (at.offset(), label_line_height, label_style.effective_font_size())
            } else if inline {
                (at.offset(), value_line_height, row.value_style.effective_font_size())
            } else {
                (
                    at.offset() + label_height,
                    value_line_height,
                    row.value_style.effective_font_size(),
                )
            };
            let x = frame.x + frame.width - value_width;
            let run = self.run(value, &row.value_style);
            self.push(
                page_index,
                DrawOp::Text {
                    x,
                    baseline: baseline_in_line(top, line_height, size),
                    runs: vec![run],
                },
            );
            if let Some(uri) = &row.value_href {
                self.push(
                    page_index,
                    DrawOp::Link {
                        rect: Rect::new(x, top, value_width, line_height),
                        uri: uri.clone(),
                    },
                );
            }
        }

        self.flow.advance(height)?;
        Ok(height)
    }

    fn draw_labelled_text(
        &mut self,
        label: &str,
        body: &str,
        style: &TextStyle,
    ) -> Result<f32, RenderError> {
        self.check_encoding(label);
        self.check_encoding(body);
        let frame = self.flow.frame();
        let label_text = format!("{}: ", label.trim().trim_end_matches(':'));
        let label_style = style.clone().bold();
        let body_style = style.clone().regular();
        let prefix_width = self
            .flow
            .text_width(&label_text, &label_style)
            .min(frame.width / 2.0);
        let lines = self.flow.wrap(body, prefix_width, &body_style);

        let line_height = self.line_height(style);
        let height = lines.len().max(1) as f32 * line_height;
        let at = self.flow.place(height);
        let page_index = at.page_index();
        let size = style.effective_font_size();

        let mut runs = vec![self.run(label_text, &label_style)];
        if let Some(first) = lines.first() {
            runs.push(self.run(first.text.clone(), &body_style));
        }
        self.push(
            page_index,
            DrawOp::Text {
                x: frame.x,
                baseline: baseline_in_line(at.offset(), line_height, size),
                runs,
            },
        );
        if lines.len() > 1 {
            self.emit_lines(
                page_index,
                at.offset() + line_height,
                frame.x + prefix_width,
                frame.width - prefix_width,
                &lines[1..],
                &body_style,
            );
        }
        self.flow.advance(height)?;
        Ok(height)
    }

    fn draw_bullet(&mut self, text: &str, style: &TextStyle) -> Result<f32, RenderError> {
        self.check_encoding(text);
        let lines = self
            .flow
            .wrap(text, BULLET_INDENT_MM + BULLET_TEXT_GAP_MM, style);
        if lines.is_empty() {
            return Ok(0.0);
        }
        let height = lines.len() as f32 * self.line_height(style);
        let at = self.flow.place(height);
        self.emit_bullet_lines(at.page_index(), at.offset(), &lines, style);
        self.flow.advance(height)?;
        Ok(height)
    }

    fn draw_detailed_bullet(
        &mut self,
        lead: &str,
        detail: Option<&str>,
        style: &TextStyle,
    ) -> Result<f32, RenderError> {
        let text_x = BULLET_INDENT_MM + BULLET_TEXT_GAP_MM;
        let lead_style = style.clone().bold();
        let lead_lines = self.flow.wrap(lead, text_x, &lead_style);
        if lead_lines.is_empty() {
            return self.draw_bullet(detail.unwrap_or_default(), style);
        }
        self.check_encoding(lead);
        if let Some(detail) = detail {
            self.check_encoding(detail);
        }

        let detail_style = style.clone().regular().with_color(Color::MUTED);
        let detail_x = text_x + DETAIL_INDENT_MM;
        let detail_lines = detail
            .map(|d| self.flow.wrap(d, detail_x, &detail_style))
            .unwrap_or_default();

        let line_height = self.line_height(style);
        let height = (lead_lines.len() + detail_lines.len()) as f32 * line_height;
        let at = self.flow.place(height);
        let frame = self.flow.frame();
        self.emit_bullet_lines(at.page_index(), at.offset(), &lead_lines, &lead_style);
        self.emit_lines(
            at.page_index(),
            at.offset() + lead_lines.len() as f32 * line_height,
            frame.x + detail_x,
            frame.width - detail_x,
            &detail_lines,
            &detail_style,
        );
        self.flow.advance(height)?;
        Ok(height)
    }

    fn draw_card_grid(&mut self, cards: &[Card]) -> Result<f32, RenderError> {
        let frame = self.flow.frame();
        let gutters = CARD_GUTTER_MM * (CARD_COLUMNS - 1) as f32;
        let card_width = ((frame.width - gutters) / CARD_COLUMNS as f32).max(0.0);
        let inner_width = (card_width - 2.0 * CARD_PADDING_MM).max(0.0);
        let title_style = TextStyle::sub_header(&self.options).with_max_width(inner_width);
        let body_style = TextStyle::body(&self.options).with_max_width(inner_width);
        let title_line_height = self.line_height(&title_style);
        let body_line_height = self.line_height(&body_style);

        for card in cards {
            self.check_encoding(&card.title);
            self.check_encoding(&card.items.join(", "));
        }
        let mut total = 0.0;
        for (row_index, row) in cards.chunks(CARD_COLUMNS).enumerate() {
            if row_index > 0 {
                total += self.add_gap(CARD_GUTTER_MM)?;
            }
            let laid_out: Vec<(Vec<TextLine>, Vec<TextLine>)> = row
                .iter()
                .map(|card| {
                    (
                        self.flow.wrap(&card.title, 0.0, &title_style),
                        self.flow.wrap(&card.items.join(", "), 0.0, &body_style),
                    )
                })
                .collect();
            let row_height = laid_out
                .iter()
                .map(|(title, body)| {
                    2.0 * CARD_PADDING_MM
                        + title.len() as f32 * title_line_height
                        + body.len() as f32 * body_line_height
                })
                .fold(0.0f32, f32::max);

            let at = self.flow.place(row_height);
            for (column, (title, body)) in laid_out.iter().enumerate() {
                let x = frame.x + column as f32 * (card_width + CARD_GUTTER_MM);
                let top = at.offset();
                self.push(
                    at.page_index(),
                    DrawOp::Rect {
                        rect: Rect::new(x, top, card_width, row_height),
                        fill: None,
                        stroke: Some((Color::RULE, CARD_BORDER_PT)),
                    },
                );
                let inner_x = x + CARD_PADDING_MM;
                let inner_top = top + CARD_PADDING_MM;
                self.emit_lines(at.page_index(), inner_top, inner_x, inner_width, title, &title_style);
                self.emit_lines(
                    at.page_index(),
                    inner_top + title.len() as f32 * title_line_height,
                    inner_x,
                    inner_width,
                    body,
                    &body_style,
                );
            }
            self.flow.advance(row_height)?;
            total += row_height;
        }
        Ok(total)
    }

    fn add_gap(&mut self, mm: f32) -> Result<f32, RenderError> {
        self.flow.gap(mm)
    }

    fn break_page(&mut self) {
        self.flow.break_page();
    }

    fn begin_columns(&mut self) -> Result<(), RenderError> {
        self.flow.begin_columns();
        Ok(())
    }

    fn begin_column(&mut self, column: Column) -> Result<(), RenderError> {
        self.flow.begin_column(column);
        Ok(())
    }

    fn end_columns(&mut self) -> Result<(), RenderError> {
        self.flow.end_columns();
        Ok(())
    }

    fn headings(&self) -> &[String] {
        &self.headings
    }

    fn finalize(self) -> Result<Vec<u8>, RenderError> {
        let page = *self.flow.page();
        let total_pages = self.flow.page_count().max(self.pages.len()).max(1);
        let width_pt = mm_to_pt(page.width);
        let height_pt = mm_to_pt(page.height);
        if self.lossy_field_count() > 0 {
            log::warn!(
                "{} field(s) contain characters the standard PDF fonts cannot show",
                self.lossy_field_count()
            );
        }

        // Footers need the final page count, so they are stamped in a pass
        // of their own after layout.
        let footers: Vec<DrawOp> = (1..=total_pages)
            .map(|n| self.footer(n, total_pages))
            .collect();
        let info = self.info_dictionary();
        let mut pages = self.pages;
        pages.resize_with(total_pages, Vec::new);

        let mut writer =
            StreamingPdfWriter::new(Cursor::new(Vec::new()), PDF_VERSION, font_dictionary())?;
        let mut page_ids = Vec::with_capacity(total_pages);

        for (ops, footer) in pages.iter().zip(&footers) {
            let mut ctx = PageContext::new(height_pt);
            let mut annotations = Vec::new();
            for op in ops.iter().chain(std::iter::once(footer)) {
                ctx.draw(op);
                if let DrawOp::Link { rect, uri } = op {
                    let annotation = link_annotation(rect, uri, height_pt);
                    annotations.push(Object::Reference(writer.buffer_object(annotation.into())));
                }
            }
            let content_id = writer.buffer_content_stream(ctx.finish())?;

            let media_box: Vec<Object> =
                vec![0.0f32.into(), 0.0f32.into(), width_pt.into(), height_pt.into()];
            let mut page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => writer.pages_id,
                "MediaBox" => media_box,
                "Contents" => content_id,
                "Resources" => writer.resources_id,
            };
            if !annotations.is_empty() {
                page_dict.set("Annots", Object::Array(annotations));
            }
            page_ids.push(writer.buffer_object(page_dict.into()));
        }

        writer.set_page_ids(page_ids);
        writer.set_info(info);
        let bytes = writer.finish()?.into_inner();
        log::info!("Rendered PDF: {} page(s), {} bytes", total_pages, bytes.len());
        Ok(bytes)
    }
}
