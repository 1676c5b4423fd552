//! Base-14 Helvetica metrics and WinAnsi text encoding.
//!
//! The report uses only the standard Helvetica family (regular, bold,
//! oblique), so no font files are scanned or embedded; width tables are
//! approximate AFM-derived values at 1000 units/em, good enough for line
//! wrapping and centering.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
}

impl FontStyle {
    /// PDF resource name the surface registers this variant under.
    pub(crate) fn resource_name(&self) -> &'static [u8] {
        match self {
            FontStyle::Normal => b"F1",
            FontStyle::Bold => b"F2",
            FontStyle::Italic => b"F3",
        }
    }

    pub(crate) fn base_font(&self) -> &'static [u8] {
        match self {
            FontStyle::Normal => b"Helvetica",
            FontStyle::Bold => b"Helvetica-Bold",
            FontStyle::Italic => b"Helvetica-Oblique",
        }
    }
}

/// Map a single Unicode char to its WinAnsi (Windows-1252) byte, or None if
/// unmappable. Bytes 0x80-0x9F carry the remapped typographic characters.
fn char_to_winansi(c: char) -> Option<u8> {
    match c as u32 {
        0x0000..=0x007F => Some(c as u8),
        0x00A0..=0x00FF => Some(c as u8), // Latin-1 supplement maps directly
        0x20AC => Some(0x80),
        0x201A => Some(0x82),
        0x0192 => Some(0x83),
        0x201E => Some(0x84),
        0x2026 => Some(0x85),
        0x2020 => Some(0x86),
        0x2021 => Some(0x87),
        0x02C6 => Some(0x88),
        0x2030 => Some(0x89),
        0x0160 => Some(0x8A),
        0x2039 => Some(0x8B),
        0x0152 => Some(0x8C),
        0x017D => Some(0x8E),
        0x2018 => Some(0x91),
        0x2019 => Some(0x92),
        0x201C => Some(0x93),
        0x201D => Some(0x94),
        0x2022 => Some(0x95), // bullet
        0x2013 => Some(0x96),
        0x2014 => Some(0x97),
        0x02DC => Some(0x98),
        0x2122 => Some(0x99),
        0x0161 => Some(0x9A),
        0x203A => Some(0x9B),
        0x0153 => Some(0x9C),
        0x017E => Some(0x9E),
        0x0178 => Some(0x9F),
        _ => None,
    }
}

/// Convert a UTF-8 string to WinAnsi bytes for PDF Str encoding.
/// Unmappable characters are dropped.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars().filter_map(char_to_winansi).collect()
}

/// Approximate Helvetica advance width in 1000-units for one WinAnsi byte.
fn regular_width_1000(b: u8) -> f32 {
    match b {
        32 => 278.0,                          // space
        33..=47 => 333.0,                     // punctuation
        48..=57 => 556.0,                     // digits
        58..=64 => 333.0,                     // more punctuation
        73 | 74 => 278.0,                     // I J (narrow uppercase)
        77 | 87 => 833.0,                     // M W (wide)
        65..=90 => 667.0,                     // uppercase A-Z (average)
        91..=96 => 333.0,                     // brackets etc.
        102 | 105 | 106 | 108 | 116 => 278.0, // narrow lowercase: f i j l t
        109 | 119 => 833.0,                   // m w (wide)
        97..=122 => 556.0,                    // lowercase a-z (average)
        149 => 350.0,                         // bullet
        _ => 556.0,
    }
}

/// Bold runs a touch wider across the board.
fn bold_width_1000(b: u8) -> f32 {
    match b {
        32 => 278.0,
        33..=47 => 333.0,
        48..=57 => 556.0,
        58..=64 => 333.0,
        73 | 74 => 278.0,
        77 | 87 => 889.0,
        65..=90 => 722.0,
        91..=96 => 333.0,
        102 | 105 | 106 | 108 | 116 => 333.0,
        109 | 119 => 889.0,
        97..=122 => 611.0,
        149 => 350.0,
        _ => 611.0,
    }
}

fn char_width_1000(style: FontStyle, c: char) -> f32 {
    let Some(b) = char_to_winansi(c) else {
        return 0.0;
    };
    if b < 32 {
        return 0.0;
    }
    match style {
        FontStyle::Bold => bold_width_1000(b),
        // Oblique shares the regular metrics.
        FontStyle::Normal | FontStyle::Italic => regular_width_1000(b),
    }
}

/// Width of a string in points at the given style and size.
pub(crate) fn text_width(text: &str, style: FontStyle, size: f32) -> f32 {
    text.chars()
        .map(|c| char_width_1000(style, c) * size / 1000.0)
        .sum()
}

/// Greedy word wrap against the width tables. Words are never split: a
/// single word wider than `max_width` occupies its own (overflowing) line.
/// Runs of whitespace collapse to single spaces; empty input yields no lines.
pub(crate) fn wrap_to_width(text: &str, style: FontStyle, size: f32, max_width: f32) -> Vec<String> {
    let space_w = char_width_1000(style, ' ') * size / 1000.0;
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_w: f32 = 0.0;

    for word in text.split_whitespace() {
        let ww = text_width(word, style, size);
        if current.is_empty() {
            current.push_str(word);
            current_w = ww;
        } else if current_w + space_w + ww > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_w = ww;
        } else {
            current.push(' ');
            current.push_str(word);
            current_w += space_w + ww;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
