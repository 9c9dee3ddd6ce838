//! # Diagnostic Pages
//!
//! Test prints for checking a printer against this encoder: every print
//! mode combination, and every native character code.

use std::io::Write;

use crate::encoder::Encoder;
use crate::error::EncoderError;
use crate::protocol::commands::LF;
use crate::protocol::text::{PrintMode, StyleFlag};

/// Cells per line in [`char_table`]. Each cell is 8 columns wide.
const CHARS_PER_LINE: usize = 6;

/// Print one line per print mode combination (32 lines).
///
/// Combinations are enumerated in counting order with the small font flag
/// changing fastest. Each line is printed in the mode it describes:
///
/// ```text
/// FONT: 0; BOLD: 0; DH: 0; DW: 0, UL: 0
/// FONT: 1; BOLD: 0; DH: 0; DW: 0, UL: 0
/// ...
/// ```
///
/// Leaves the encoder in the last mode (all flags on).
pub fn print_modes<W: Write>(encoder: &mut Encoder<W>) -> Result<(), EncoderError> {
    for combination in 0u8..32 {
        let mut mode = PrintMode::empty();
        let mut bits = [0u8; 5];
        for (i, flag) in StyleFlag::ALL.into_iter().enumerate() {
            bits[i] = (combination >> i) & 1;
            mode.set(flag.mode(), bits[i] == 1);
        }
        encoder.set_print_mode(mode)?;
        encoder.text(&format!(
            "FONT: {}; BOLD: {}; DH: {}; DW: {}, UL: {}",
            bits[0], bits[1], bits[2], bits[3], bits[4]
        ))?;
    }
    Ok(())
}

/// Build the character table page: codes 32..=255, six per line.
///
/// ```text
///  32:    33: !   34: "   35: #   36: $   37: %
/// ...
/// 254: ■  255:
/// ```
///
/// Bytes are native codes, not transliterated. DEL (127) is shown as a
/// space so no control byte reaches the printer.
pub fn char_table_bytes() -> Vec<u8> {
    let mut out = Vec::new();
    let codes = 32u8..=255;
    let last = *codes.end();
    for (i, code) in codes.enumerate() {
        out.extend(format!("{code:>3}: ").bytes());
        out.push(if code == 0x7F { b' ' } else { code });
        if (i + 1) % CHARS_PER_LINE == 0 || code == last {
            out.push(LF);
        } else {
            out.extend(b"  ");
        }
    }
    out
}

/// Print the character table page. See [`char_table_bytes`].
pub fn char_table<W: Write>(encoder: &mut Encoder<W>) -> Result<(), EncoderError> {
    encoder.raw(&char_table_bytes())
}
