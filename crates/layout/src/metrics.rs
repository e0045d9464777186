//! Advance widths for the four standard Type1 faces the PDF backend draws with.
//!
//! Widths are in thousandths of an em, taken from the Adobe core AFM files.
//! The tables cover printable ASCII (0x20..=0x7E); index = `char as usize - 32`.
//! A handful of WinAnsi punctuation glyphs used by the section renderers are
//! special-cased, and anything else falls back to the face's average width.

use folio_style::StandardFont;

pub struct FontMetrics {
    pub font: StandardFont,
    widths: [u16; 95],
    bullet: u16,
    en_dash: u16,
    em_dash: u16,
    single_quote: u16,
    double_quote: u16,
    average: u16,
}

impl FontMetrics {
    pub fn for_font(font: StandardFont) -> &'static FontMetrics {
        match font {
            StandardFont::Helvetica => &HELVETICA,
            StandardFont::HelveticaBold => &HELVETICA_BOLD,
            StandardFont::TimesRoman => &TIMES_ROMAN,
            StandardFont::TimesBold => &TIMES_BOLD,
        }
    }

    /// Width of one character in thousandths of an em.
    pub fn char_width(&self, c: char) -> u16 {
        match c {
            ' '..='~' => self.widths[c as usize - 32],
            '\u{a0}' => self.widths[0],
            '•' => self.bullet,
            '–' => self.en_dash,
            '—' => self.em_dash,
            '‘' | '’' => self.single_quote,
            '“' | '”' => self.double_quote,
            _ => self.average,
        }
    }

    /// Width of a string in thousandths of an em.
    pub fn str_width(&self, s: &str) -> u32 {
        s.chars().map(|c| u32::from(self.char_width(c))).sum()
    }
}

static HELVETICA: FontMetrics = FontMetrics {
    font: StandardFont::Helvetica,
    #[rustfmt::skip]
    widths: [
        // sp  !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0-9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :   ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A-M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N-Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [   \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a-m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n-z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {   |    }    ~
        334, 260, 334, 584,
    ],
    bullet: 350,
    en_dash: 556,
    em_dash: 1000,
    single_quote: 222,
    double_quote: 333,
    average: 556,
};

static HELVETICA_BOLD: FontMetrics = FontMetrics {
    font: StandardFont::HelveticaBold,
    #[rustfmt::skip]
    widths: [
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        333, 333, 584, 584, 584, 611, 975,
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        333, 278, 333, 584, 556, 333,
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        389, 280, 389, 584,
    ],
    bullet: 350,
    en_dash: 556,
    em_dash: 1000,
    single_quote: 278,
    double_quote: 500,
    average: 584,
};

static TIMES_ROMAN: FontMetrics = FontMetrics {
    font: StandardFont::TimesRoman,
    #[rustfmt::skip]
    widths: [
        250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
        278, 278, 564, 564, 564, 444, 921,
        722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
        722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
        333, 278, 333, 469, 500, 333,
        444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
        500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
        480, 200, 480, 541,
    ],
    bullet: 350,
    en_dash: 500,
    em_dash: 1000,
    single_quote: 333,
    double_quote: 444,
    average: 500,
};

static TIMES_BOLD: FontMetrics = FontMetrics {
    font: StandardFont::TimesBold,
    #[rustfmt::skip]
    widths: [
        250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
        333, 333, 570, 570, 570, 500, 930,
        722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944,
        722, 778, 611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667,
        333, 278, 333, 581, 500, 333,
        500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833,
        556, 500, 556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444,
        394, 220, 394, 520,
    ],
    bullet: 350,
    en_dash: 500,
    em_dash: 1000,
    single_quote: 333,
    double_quote: 500,
    average: 540,
};
