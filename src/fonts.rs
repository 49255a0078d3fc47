use crate::model::{Font, FontVariant, PT_PER_MM};

/// Byte substituted for characters outside the WinAnsi repertoire, both when
/// measuring and when emitting, so layout and output always agree.
pub(crate) const REPLACEMENT: u8 = b'?';

/// Map a single Unicode char to its WinAnsi (Windows-1252) byte.
/// Bytes 0x80-0x9F carry remapped typographic chars; 0x20-0x7F and
/// 0xA0-0xFF map directly to their Unicode codepoint.
fn char_to_winansi(c: char) -> Option<u8> {
    match c as u32 {
        0x0020..=0x007F => Some(c as u8),
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

/// Convert a UTF-8 string to WinAnsi bytes for PDF Str encoding. Unmappable
/// characters become [`REPLACEMENT`] rather than being dropped, so every
/// input char occupies exactly one output byte.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| char_to_winansi(c).unwrap_or(REPLACEMENT))
        .collect()
}

// Advance widths at 1000 units/em for WinAnsi bytes 32..=255, from the Adobe
// core-14 AFM files. Undefined slots in the 0x80-0x9F window use 350.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 224] = [
    // 0x20
     278,  278,  355,  556,  556,  889,  667,  191,  333,  333,  389,  584,  278,  333,  278,  278,
    // 0x30
     556,  556,  556,  556,  556,  556,  556,  556,  556,  556,  278,  278,  584,  584,  584,  556,
    // 0x40
    1015,  667,  667,  722,  722,  667,  611,  778,  722,  278,  500,  667,  556,  833,  722,  778,
    // 0x50
     667,  778,  722,  667,  611,  722,  667,  944,  667,  667,  611,  278,  278,  278,  469,  556,
    // 0x60
     333,  556,  556,  500,  556,  556,  278,  556,  556,  222,  222,  500,  222,  833,  556,  556,
    // 0x70
     556,  556,  333,  500,  278,  556,  500,  722,  500,  500,  500,  334,  260,  334,  584,  350,
    // 0x80
     556,  350,  222,  556,  333, 1000,  556,  556,  333, 1000,  667,  333, 1000,  350,  611,  350,
    // 0x90
     350,  222,  222,  333,  333,  350,  556, 1000,  333, 1000,  500,  333,  944,  350,  500,  667,
    // 0xA0
     278,  333,  556,  556,  556,  556,  260,  556,  333,  737,  370,  556,  584,  333,  737,  333,
    // 0xB0
     400,  584,  333,  333,  333,  556,  537,  278,  333,  333,  365,  556,  834,  834,  834,  611,
    // 0xC0
     667,  667,  667,  667,  667,  667, 1000,  722,  667,  667,  667,  667,  278,  278,  278,  278,
    // 0xD0
     722,  722,  778,  778,  778,  778,  778,  584,  778,  722,  722,  722,  722,  667,  667,  611,
    // 0xE0
     556,  556,  556,  556,  556,  556,  889,  500,  556,  556,  556,  556,  278,  278,  278,  278,
    // 0xF0
     556,  556,  556,  556,  556,  556,  556,  584,  611,  556,  556,  556,  556,  500,  556,  500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 224] = [
    // 0x20
     278,  333,  474,  556,  556,  889,  722,  238,  333,  333,  389,  584,  278,  333,  278,  278,
    // 0x30
     556,  556,  556,  556,  556,  556,  556,  556,  556,  556,  333,  333,  584,  584,  584,  611,
    // 0x40
     975,  722,  722,  722,  722,  667,  611,  778,  722,  278,  556,  722,  611,  833,  722,  778,
    // 0x50
     667,  778,  722,  667,  611,  722,  667,  944,  667,  667,  611,  333,  278,  333,  584,  556,
    // 0x60
     333,  556,  611,  556,  611,  556,  333,  611,  611,  278,  278,  556,  278,  889,  611,  611,
    // 0x70
     611,  611,  389,  556,  333,  611,  556,  778,  556,  556,  500,  389,  280,  389,  584,  350,
    // 0x80
     556,  350,  278,  556,  500, 1000,  556,  556,  333, 1000,  667,  333, 1000,  350,  611,  350,
    // 0x90
     350,  278,  278,  500,  500,  350,  556, 1000,  333, 1000,  556,  333,  944,  350,  500,  667,
    // 0xA0
     278,  333,  556,  556,  556,  556,  280,  556,  333,  737,  370,  556,  584,  333,  737,  333,
    // 0xB0
     400,  584,  333,  333,  333,  611,  556,  278,  333,  333,  365,  556,  834,  834,  834,  611,
    // 0xC0
     722,  722,  722,  722,  722,  722, 1000,  722,  667,  667,  667,  667,  278,  278,  278,  278,
    // 0xD0
     722,  722,  778,  778,  778,  778,  778,  584,  778,  722,  722,  722,  722,  667,  667,  611,
    // 0xE0
     556,  556,  556,  556,  556,  556,  889,  556,  556,  556,  556,  556,  278,  278,  278,  278,
    // 0xF0
     611,  611,  611,  611,  611,  611,  611,  584,  611,  611,  611,  611,  611,  556,  611,  556,
];

/// The oblique faces share their upright counterpart's metrics.
fn widths(variant: FontVariant) -> &'static [u16; 224] {
    match variant {
        FontVariant::Regular | FontVariant::Oblique => &HELVETICA_WIDTHS,
        FontVariant::Bold | FontVariant::BoldOblique => &HELVETICA_BOLD_WIDTHS,
    }
}

fn byte_width_1000(variant: FontVariant, byte: u8) -> f32 {
    if byte >= 32 {
        widths(variant)[(byte - 32) as usize] as f32
    } else {
        0.0
    }
}

impl Font {
    /// Rendered width of `text` in mm, measured on the WinAnsi bytes it will
    /// actually be shown as, replacements included.
    pub fn text_width(&self, text: &str) -> f32 {
        let units: f32 = to_winansi_bytes(text)
            .iter()
            .map(|&b| byte_width_1000(self.variant, b))
            .sum();
        units * self.size / 1000.0 / PT_PER_MM
    }

    pub(crate) fn char_width(&self, ch: char) -> f32 {
        let byte = char_to_winansi(ch).unwrap_or(REPLACEMENT);
        byte_width_1000(self.variant, byte) * self.size / 1000.0 / PT_PER_MM
    }
}
