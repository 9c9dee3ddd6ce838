//! # Native Code Page
//!
//! Converts Unicode strings to the printer's single-byte character set.
//!
//! The target firmware uses a Latin-1/box-drawing layout derived from
//! code page 850. Printable ASCII (0x20–0x7E) maps to itself; the upper
//! half (0x80–0xFE) is filled from [`EXTENDED`]. Together they form a
//! one-to-one relation of 222 characters and 222 byte codes. 0xFF is
//! not reachable from text.
//!
//! ASCII control characters (0x00–0x1F, 0x7F) are stripped before
//! mapping so that user text can never smuggle raw command bytes into
//! the stream. Characters outside the table are passed through as their
//! UTF-8 bytes and a warning is logged.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::warn;

use crate::printer::PrinterConfig;

/// Upper half of the code page: Unicode character → native byte.
///
/// Data only; ordered by byte value.
pub static EXTENDED: [(char, u8); 127] = [
    // 0x80–0x8F: Accented Latin
    ('Ç', 0x80), // U+00C7
    ('ü', 0x81), // U+00FC
    ('é', 0x82), // U+00E9
    ('â', 0x83), // U+00E2
    ('ä', 0x84), // U+00E4
    ('à', 0x85), // U+00E0
    ('å', 0x86), // U+00E5
    ('ç', 0x87), // U+00E7
    ('ê', 0x88), // U+00EA
    ('ë', 0x89), // U+00EB
    ('è', 0x8A), // U+00E8
    ('ï', 0x8B), // U+00EF
    ('î', 0x8C), // U+00EE
    ('ì', 0x8D), // U+00EC
    ('Ä', 0x8E), // U+00C4
    ('Å', 0x8F), // U+00C5
    // 0x90–0x9F: Accented Latin, currency
    ('É', 0x90), // U+00C9
    ('æ', 0x91), // U+00E6
    ('Æ', 0x92), // U+00C6
    ('ô', 0x93), // U+00F4
    ('ö', 0x94), // U+00F6
    ('ò', 0x95), // U+00F2
    ('û', 0x96), // U+00FB
    ('ù', 0x97), // U+00F9
    ('ÿ', 0x98), // U+00FF
    ('Ö', 0x99), // U+00D6
    ('Ü', 0x9A), // U+00DC
    ('ø', 0x9B), // U+00F8
    ('£', 0x9C), // U+00A3
    ('Ø', 0x9D), // U+00D8
    ('×', 0x9E), // U+00D7
    ('ƒ', 0x9F), // U+0192
    // 0xA0–0xAF: Spanish, fractions, guillemets
    ('á', 0xA0), // U+00E1
    ('í', 0xA1), // U+00ED
    ('ó', 0xA2), // U+00F3
    ('ú', 0xA3), // U+00FA
    ('ñ', 0xA4), // U+00F1
    ('Ñ', 0xA5), // U+00D1
    ('ª', 0xA6), // U+00AA
    ('º', 0xA7), // U+00BA
    ('¿', 0xA8), // U+00BF
    ('®', 0xA9), // U+00AE
    ('¬', 0xAA), // U+00AC
    ('½', 0xAB), // U+00BD
    ('¼', 0xAC), // U+00BC
    ('¡', 0xAD), // U+00A1
    ('«', 0xAE), // U+00AB
    ('»', 0xAF), // U+00BB
    // 0xB0–0xBF: Shades, box drawing, accented capitals
    ('░', 0xB0), // U+2591
    ('▒', 0xB1), // U+2592
    ('▓', 0xB2), // U+2593
    ('│', 0xB3), // U+2502
    ('┤', 0xB4), // U+2524
    ('Á', 0xB5), // U+00C1
    ('Â', 0xB6), // U+00C2
    ('À', 0xB7), // U+00C0
    ('©', 0xB8), // U+00A9
    ('╣', 0xB9), // U+2563
    ('║', 0xBA), // U+2551
    ('╗', 0xBB), // U+2557
    ('╝', 0xBC), // U+255D
    ('¢', 0xBD), // U+00A2
    ('¥', 0xBE), // U+00A5
    ('┐', 0xBF), // U+2510
    // 0xC0–0xCF: Box drawing, tilde vowels
    ('└', 0xC0), // U+2514
    ('┴', 0xC1), // U+2534
    ('┬', 0xC2), // U+252C
    ('├', 0xC3), // U+251C
    ('─', 0xC4), // U+2500
    ('┼', 0xC5), // U+253C
    ('ã', 0xC6), // U+00E3
    ('Ã', 0xC7), // U+00C3
    ('╚', 0xC8), // U+255A
    ('╔', 0xC9), // U+2554
    ('╩', 0xCA), // U+2569
    ('╦', 0xCB), // U+2566
    ('╠', 0xCC), // U+2560
    ('═', 0xCD), // U+2550
    ('╬', 0xCE), // U+256C
    ('¤', 0xCF), // U+00A4
    // 0xD0–0xDF: Icelandic, accented capitals, blocks
    ('ð', 0xD0), // U+00F0
    ('Ð', 0xD1), // U+00D0
    ('Ê', 0xD2), // U+00CA
    ('Ë', 0xD3), // U+00CB
    ('È', 0xD4), // U+00C8
    ('ı', 0xD5), // U+0131
    ('Í', 0xD6), // U+00CD
    ('Î', 0xD7), // U+00CE
    ('Ï', 0xD8), // U+00CF
    ('┘', 0xD9), // U+2518
    ('┌', 0xDA), // U+250C
    ('█', 0xDB), // U+2588
    ('▄', 0xDC), // U+2584
    ('¦', 0xDD), // U+00A6
    ('Ì', 0xDE), // U+00CC
    ('▀', 0xDF), // U+2580
    // 0xE0–0xEF: Accented capitals, thorn, acute
    ('Ó', 0xE0), // U+00D3
    ('ß', 0xE1), // U+00DF
    ('Ô', 0xE2), // U+00D4
    ('Ò', 0xE3), // U+00D2
    ('õ', 0xE4), // U+00F5
    ('Õ', 0xE5), // U+00D5
    ('µ', 0xE6), // U+00B5
    ('þ', 0xE7), // U+00FE
    ('Þ', 0xE8), // U+00DE
    ('Ú', 0xE9), // U+00DA
    ('Û', 0xEA), // U+00DB
    ('Ù', 0xEB), // U+00D9
    ('ý', 0xEC), // U+00FD
    ('Ý', 0xED), // U+00DD
    ('¯', 0xEE), // U+00AF
    ('´', 0xEF), // U+00B4
    // 0xF0–0xFE: Math, punctuation, superscripts
    ('≡', 0xF0), // U+2261
    ('±', 0xF1), // U+00B1
    ('‗', 0xF2), // U+2017
    ('¾', 0xF3), // U+00BE
    ('¶', 0xF4), // U+00B6
    ('§', 0xF5), // U+00A7
    ('÷', 0xF6), // U+00F7
    ('¸', 0xF7), // U+00B8
    ('°', 0xF8), // U+00B0
    ('¨', 0xF9), // U+00A8
    ('·', 0xFA), // U+00B7
    ('¹', 0xFB), // U+00B9
    ('³', 0xFC), // U+00B3
    ('²', 0xFD), // U+00B2
    ('■', 0xFE), // U+25A0
];

static LOOKUP: LazyLock<HashMap<char, u8>> =
    LazyLock::new(|| EXTENDED.iter().copied().collect());

/// Map one character to its native byte.
///
/// Returns `None` for control characters and for characters the code page
/// cannot represent.
pub fn lookup(ch: char) -> Option<u8> {
    match ch {
        ' '..='~' => Some(ch as u8),
        _ => LOOKUP.get(&ch).copied(),
    }
}

/// Encode `text` into native bytes.
///
/// - ASCII control characters: dropped
/// - Table characters: one native byte each
/// - Anything else: UTF-8 bytes passed through, warning logged
///
/// No truncation is applied; see [`transliterate_line`].
pub fn transliterate(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars().filter(|ch| !ch.is_ascii_control()) {
        encode_char(ch, &mut out);
    }
    out
}

/// Encode `text` for a single printed line.
///
/// Same as [`transliterate`], then cut to the paper width in columns
/// (48 bytes). The cut falls on a character boundary: a passed-through
/// multi-byte character that would cross the edge is dropped whole.
pub fn transliterate_line(text: &str) -> Vec<u8> {
    let columns = PrinterConfig::REFERENCE.columns;
    let mut out = Vec::with_capacity(columns);
    let mut cell = Vec::with_capacity(4);
    for ch in text.chars().filter(|ch| !ch.is_ascii_control()) {
        cell.clear();
        encode_char(ch, &mut cell);
        if out.len() + cell.len() > columns {
            break;
        }
        out.extend_from_slice(&cell);
    }
    out
}

fn encode_char(ch: char, out: &mut Vec<u8>) {
    match lookup(ch) {
        Some(byte) => out.push(byte),
        None => {
            warn!(
                "unmapped character '{}' (U+{:04X}), passing through",
                ch, ch as u32
            );
            out.extend_from_slice(ch.encode_utf8(&mut [0; 4]).as_bytes());
        }
    }
}
