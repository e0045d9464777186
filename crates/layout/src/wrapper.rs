//! Greedy word wrapping against a [`TextMeasurer`].

use crate::measure::TextMeasurer;
use folio_style::FontWeight;

/// One wrapped line and its measured width in millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub width: f32,
}

/// Breaks `text` into lines no wider than `max_width` mm.
///
/// Whitespace runs collapse to single spaces and explicit newlines start a
/// new line. A word wider than the whole line is split between characters;
/// a single character wider than the line is still emitted on its own.
pub fn wrap_text<M: TextMeasurer + ?Sized>(
    text: &str,
    max_width: f32,
    measurer: &M,
    font_size: f32,
    weight: FontWeight,
) -> Vec<TextLine> {
    let space = measurer.text_width(" ", font_size, weight);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0f32;

        for word in paragraph.split_whitespace() {
            let word_width = measurer.text_width(word, font_size, weight);

            if word_width > max_width {
                if !current.is_empty() {
                    lines.push(TextLine {
                        text: std::mem::take(&mut current),
                        width: current_width,
                    });
                }
                let mut pieces = split_long_word(word, max_width, measurer, font_size, weight);
                // The final piece stays open so the next word can join it.
                if let Some(last) = pieces.pop() {
                    lines.extend(pieces);
                    current = last.text;
                    current_width = last.width;
                }
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            } else {
                lines.push(TextLine {
                    text: std::mem::replace(&mut current, word.to_string()),
                    width: current_width,
                });
                current_width = word_width;
            }
        }

        if !current.is_empty() {
            lines.push(TextLine {
                text: current,
                width: current_width,
            });
        }
    }

    lines
}

fn split_long_word<M: TextMeasurer + ?Sized>(
    word: &str,
    max_width: f32,
    measurer: &M,
    font_size: f32,
    weight: FontWeight,
) -> Vec<TextLine> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0f32;

    for c in word.chars() {
        let mut buf = [0u8; 4];
        let char_width = measurer.text_width(c.encode_utf8(&mut buf), font_size, weight);
        if !current.is_empty() && current_width + char_width > max_width {
            pieces.push(TextLine {
                text: std::mem::take(&mut current),
                width: current_width,
            });
            current_width = 0.0;
        }
        current.push(c);
        current_width += char_width;
    }

    if !current.is_empty() {
        pieces.push(TextLine {
            text: current,
            width: current_width,
        });
    }
    pieces
}
