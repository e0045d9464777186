use crate::css::stylesheet;
use crate::escape::{escape_attr, escape_text};
use folio_layout::TextStyle;
use folio_render_core::constants::{
    BULLET_INDENT_MM, BULLET_TEXT_GAP_MM, CARD_COLUMNS, CONTACT_SEPARATOR, HTML_LINE_HEIGHT,
    NAME_AFTER_MM, ROW_GAP_MM, SECTION_AFTER_MM, SECTION_RULE_GAP_MM,
};
use folio_render_core::utils::{contact_line, heading_text, section_rule_pt};
use folio_render_core::{Card, Column, ContactItem, DocumentBackend, Flow, RenderError, Row};
use folio_style::units::pt_to_mm;
use folio_style::{ExportOptions, FontWeight, PageGeometry, SectionKind, TextAlign};
use folio_types::Color;
use std::fmt::Write;

/// Builds a Word-compatible HTML document.
///
/// The flow runs unpaginated: it only tracks a nominal height so drawing
/// calls report the same kind of value as the PDF backend.
pub struct HtmlBackend {
    options: ExportOptions,
    flow: Flow,
    body: String,
    headings: Vec<String>,
    title: Option<String>,
    in_list: bool,
    open_column: bool,
    open_sections: usize,
}

impl HtmlBackend {
    pub fn new(options: ExportOptions) -> Self {
        let flow = Flow::new(PageGeometry::a4(), options.font_family, HTML_LINE_HEIGHT, false);
        Self {
            options,
            flow,
            body: String::new(),
            headings: Vec::new(),
            title: None,
            in_list: false,
            open_column: false,
            open_sections: 0,
        }
    }

    /// Markup emitted so far, without the document wrapper.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Advances the nominal cursor by the wrapped height of `text`.
    fn consume(&mut self, text: &str, x: f32, style: &TextStyle) -> Result<f32, RenderError> {
        let lines = self.flow.wrap(text, x, style).len();
        let height = lines as f32 * self.flow.line_height(style.effective_font_size());
        self.flow.advance(height)?;
        Ok(height)
    }

    fn list_item(&mut self, inner: &str) -> Result<(), RenderError> {
        if self.in_list {
            write!(self.body, "<li>{}</li>", inner)?;
        } else {
            write!(self.body, "<ul class=\"bullets\"><li>{}</li></ul>", inner)?;
        }
        Ok(())
    }

    fn close_column(&mut self) {
        if self.open_column {
            self.body.push_str("</td>");
            self.open_column = false;
        }
    }
}

/// Inline declarations for whatever differs from the body defaults.
fn inline_style(style: &TextStyle, options: &ExportOptions) -> String {
    let mut css = format!("font-size:{:.1}pt", style.effective_font_size());
    if style.weight != FontWeight::Regular {
        css.push_str(&format!(";font-weight:{}", style.weight.numeric_value()));
    }
    if style.color != Color::BLACK {
        css.push_str(&format!(";color:{}", style.color));
    }
    if style.align != TextAlign::Left {
        css.push_str(&format!(";text-align:{}", style.align.as_css()));
    }
    match style.background {
        Some(background) if background != Color::HIGHLIGHT => {
            css.push_str(&format!(";background:{}", background));
        }
        _ => {}
    }
    if style.effective_font_size() != options.body_text_size {
        css.push_str(&format!(";line-height:{}", HTML_LINE_HEIGHT));
    }
    css
}

/// Highlighted text takes the stylesheet's `.highlight` class.
fn class_attr(base: &str, style: &TextStyle) -> String {
    let highlight = style.background == Some(Color::HIGHLIGHT);
    match (base.is_empty(), highlight) {
        (true, false) => String::new(),
        (true, true) => " class=\"highlight\"".to_string(),
        (false, false) => format!(" class=\"{}\"", base),
        (false, true) => format!(" class=\"{} highlight\"", base),
    }
}

/// Escaped text with newlines kept as line breaks.
fn text_markup(text: &str) -> String {
    escape_text(text.trim()).replace('\n', "<br>")
}

fn anchor(text: &str, href: Option<String>) -> String {
    match href {
        Some(href) => format!("<a href=\"{}\">{}</a>", escape_attr(&href), escape_text(text)),
        None => escape_text(text),
    }
}

impl DocumentBackend for HtmlBackend {
    type Output = String;

    fn flow(&self) -> &Flow {
        &self.flow
    }

    fn options(&self) -> &ExportOptions {
        &self.options
    }

    fn draw_header(&mut self, name: &str, contacts: &[ContactItem]) -> Result<f32, RenderError> {
        let name = name.trim();
        self.title = Some(name.to_string());
        write!(self.body, "<div class=\"header\"><h1>{}</h1>", escape_text(&name.to_uppercase()))?;
        let name_style = TextStyle::name(&self.options);
        let mut height = self.consume(name, 0.0, &name_style)?;
        height += self.flow.gap(NAME_AFTER_MM)?;

        let segments: Vec<String> = contacts
            .iter()
            .filter(|c| !c.text.trim().is_empty())
            .map(|c| anchor(c.text.trim(), c.href()))
            .collect();
        if !segments.is_empty() {
            write!(
                self.body,
                "<p class=\"contact\">{}</p>",
                segments.join(CONTACT_SEPARATOR)
            )?;
            let style = TextStyle::body(&self.options);
            height += self.consume(&contact_line(contacts), 0.0, &style)?;
        }
        self.body.push_str("</div>");
        Ok(height)
    }

    fn draw_text(&mut self, content: &str, x: f32, style: &TextStyle) -> Result<f32, RenderError> {
        if content.trim().is_empty() {
            return Ok(0.0);
        }
        let mut css = inline_style(style, &self.options);
        if x > 0.0 {
            css.push_str(&format!(";margin-left:{:.2}mm", x));
        }
        if let Some(width) = style.max_width {
            css.push_str(&format!(";max-width:{:.2}mm", width));
        }
        write!(
            self.body,
            "<p{} style=\"{}\">{}</p>",
            class_attr("", style),
            css,
            text_markup(content)
        )?;
        self.consume(content, x, style)
    }

    fn draw_section_title(&mut self, title: &str) -> Result<f32, RenderError> {
        let uppercase = self.options.template.config().uppercase_titles;
        let shown = heading_text(title.trim(), uppercase);
        let class = if uppercase {
            "section-title"
        } else {
            "section-title minimal"
        };
        write!(self.body, "<h2 class=\"{}\">{}</h2>", class, escape_text(&shown))?;

        let style = TextStyle::section_header(&self.options);
        let mut height = self.consume(&shown, 0.0, &style)?;
        let rule = pt_to_mm(section_rule_pt(uppercase));
        height += self.flow.gap(SECTION_RULE_GAP_MM + rule + SECTION_AFTER_MM)?;
        self.headings.push(shown);
        Ok(height)
    }

    fn draw_row(&mut self, row: &Row<'_>) -> Result<f32, RenderError> {
        let label = row.label.trim();
        let value = row.value.trim();
        if label.is_empty() && value.is_empty() {
            return Ok(0.0);
        }
        write!(
            self.body,
            "<table{}><tr><td class=\"label\" style=\"{}\">{}</td>",
            class_attr("row", &row.label_style),
            inline_style(&row.label_style, &self.options),
            escape_text(label),
        )?;
        if !value.is_empty() {
            write!(
                self.body,
                "<td class=\"value\" style=\"{}\">{}</td>",
                inline_style(&row.value_style, &self.options),
                anchor(value, row.value_href.clone()),
            )?;
        }
        self.body.push_str("</tr></table>");

        let value_width = if value.is_empty() {
            0.0
        } else {
            self.flow.text_width(value, &row.value_style)
        };
        // Same split as the PDF row: the value keeps a gap or drops below.
        let inline = value.is_empty() || value_width + ROW_GAP_MM <= self.flow.frame().width / 2.0;
        let reserved = if inline && !value.is_empty() {
            value_width + ROW_GAP_MM
        } else {
            0.0
        };
        let label_height = self.consume(label, reserved, &row.label_style)?;
        let value_line = self.flow.line_height(row.value_style.effective_font_size());
        let extra = match (value.is_empty(), inline) {
            (true, _) => 0.0,
            (false, true) => (value_line - label_height).max(0.0),
            (false, false) => value_line,
        };
        if extra > 0.0 {
            self.flow.advance(extra)?;
        }
        Ok(label_height + extra)
    }

    fn draw_labelled_text(
        &mut self,
        label: &str,
        body: &str,
        style: &TextStyle,
    ) -> Result<f32, RenderError> {
        let label = format!("{}:", label.trim().trim_end_matches(':'));
        let label_style = style.clone().bold();
        let indent = self.flow.text_width(&format!("{} ", label), &label_style);
        write!(
            self.body,
            "<p class=\"labelled\" style=\"{};padding-left:{:.2}mm;text-indent:-{:.2}mm\"><strong>{}</strong> {}</p>",
            inline_style(&style.clone().regular(), &self.options),
            indent,
            indent,
            escape_text(&label),
            text_markup(body),
        )?;
        let height = self.consume(body, indent, &style.clone().regular())?;
        Ok(height.max(self.flow.line_height(style.effective_font_size())))
    }

    fn draw_bullet(&mut self, text: &str, style: &TextStyle) -> Result<f32, RenderError> {
        if text.trim().is_empty() {
            return Ok(0.0);
        }
        let inner = if style.weight == FontWeight::Bold {
            format!("<strong>{}</strong>", text_markup(text))
        } else {
            text_markup(text)
        };
        self.list_item(&inner)?;
        self.consume(text, BULLET_INDENT_MM + BULLET_TEXT_GAP_MM, style)
    }

    fn draw_detailed_bullet(
        &mut self,
        lead: &str,
        detail: Option<&str>,
        style: &TextStyle,
    ) -> Result<f32, RenderError> {
        let lead = lead.trim();
        let detail = detail.map(str::trim).filter(|d| !d.is_empty());
        if lead.is_empty() {
            return self.draw_bullet(detail.unwrap_or_default(), style);
        }
        let mut inner = format!("<strong>{}</strong>", escape_text(lead));
        let mut plain = lead.to_string();
        if let Some(detail) = detail {
            write!(inner, " - <span class=\"detail\">{}</span>", escape_text(detail))?;
            plain = format!("{} - {}", lead, detail);
        }
        self.list_item(&inner)?;
        self.consume(&plain, BULLET_INDENT_MM + BULLET_TEXT_GAP_MM, style)
    }

    fn draw_card_grid(&mut self, cards: &[Card]) -> Result<f32, RenderError> {
        if cards.is_empty() {
            return Ok(0.0);
        }
        let body_style = TextStyle::body(&self.options);
        let title_style = TextStyle::sub_header(&self.options);
        let mut height = 0.0f32;

        self.body.push_str("<table class=\"cards\">");
        for row in cards.chunks(CARD_COLUMNS) {
            self.body.push_str("<tr>");
            let mut row_height = 0.0f32;
            for card in row {
                let items = card.items.join(", ");
                write!(
                    self.body,
                    "<td class=\"card\"><div class=\"card-title\">{}</div><div>{}</div></td>",
                    escape_text(card.title.trim()),
                    escape_text(&items),
                )?;
                let lines = self.flow.wrap(&card.title, 0.0, &title_style).len()
                    + self.flow.wrap(&items, 0.0, &body_style).len();
                row_height = row_height
                    .max(lines as f32 * self.flow.line_height(body_style.effective_font_size()));
            }
            for _ in row.len()..CARD_COLUMNS {
                self.body.push_str("<td></td>");
            }
            self.body.push_str("</tr>");
            self.flow.advance(row_height)?;
            height += row_height;
        }
        self.body.push_str("</table>");
        Ok(height)
    }

    fn add_gap(&mut self, mm: f32) -> Result<f32, RenderError> {
        let amount = self.flow.gap(mm)?;
        if amount > 0.0 {
            write!(
                self.body,
                "<div class=\"spacer\" style=\"height:{:.2}mm\">&nbsp;</div>",
                amount
            )?;
        }
        Ok(amount)
    }

    fn break_page(&mut self) {}

    fn begin_section(&mut self, kind: SectionKind) -> Result<(), RenderError> {
        write!(self.body, "<div class=\"section {}\">", kind.as_str())?;
        self.open_sections += 1;
        Ok(())
    }

    fn end_section(&mut self) -> Result<(), RenderError> {
        if self.open_sections > 0 {
            self.body.push_str("</div>");
            self.open_sections -= 1;
        }
        Ok(())
    }

    fn begin_list(&mut self) -> Result<(), RenderError> {
        if !self.in_list {
            self.body.push_str("<ul class=\"bullets\">");
            self.in_list = true;
        }
        Ok(())
    }

    fn end_list(&mut self) -> Result<(), RenderError> {
        if self.in_list {
            self.body.push_str("</ul>");
            self.in_list = false;
        }
        Ok(())
    }

    fn begin_columns(&mut self) -> Result<(), RenderError> {
        self.flow.begin_columns();
        self.body.push_str("<table class=\"columns\"><tr>");
        Ok(())
    }

    fn begin_column(&mut self, column: Column) -> Result<(), RenderError> {
        self.close_column();
        self.flow.begin_column(column);
        let class = match column {
            Column::Main => "main",
            Column::Sidebar => "sidebar",
        };
        write!(self.body, "<td class=\"{}\">", class)?;
        self.open_column = true;
        Ok(())
    }

    fn end_columns(&mut self) -> Result<(), RenderError> {
        self.close_column();
        self.body.push_str("</tr></table>");
        self.flow.end_columns();
        Ok(())
    }

    fn headings(&self) -> &[String] {
        &self.headings
    }

    fn finalize(mut self) -> Result<String, RenderError> {
        self.end_list()?;
        if self.open_sections > 0 {
            log::warn!("{} section(s) left open, closing them", self.open_sections);
            while self.open_sections > 0 {
                self.end_section()?;
            }
        }

        let css = stylesheet(&self.options, self.flow.page())?;
        let title = match &self.title {
            Some(name) => format!("{} - Resume", name),
            None => "Resume".to_string(),
        };

        let mut html = String::with_capacity(self.body.len() + css.len() + 512);
        html.push_str(
            "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" \
             xmlns:w=\"urn:schemas-microsoft-com:office:word\" \
             xmlns=\"http://www.w3.org/TR/REC-html40\">\n",
        );
        html.push_str("<head>\n<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"ProgId\" content=\"Word.Document\">\n");
        writeln!(html, "<title>{}</title>", escape_text(&title))?;
        writeln!(html, "<style>\n{}\n</style>", css)?;
        html.push_str("</head>\n<body>\n<div class=\"Section1\">\n");
        html.push_str(&self.body);
        html.push_str("\n</div>\n</body>\n</html>\n");

        log::info!("Rendered Word document: {} bytes", html.len());
        Ok(html)
    }
}
