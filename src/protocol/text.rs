//! # ESC/POS Text Styling Commands
//!
//! Alignment, the combined print-mode byte and ruled lines.
//!
//! ## Print Mode Byte
//!
//! ESC/POS packs five character attributes into the single parameter of
//! `ESC ! n`. Each attribute owns one bit, so the byte for any combination
//! is the sum of the active weights:
//!
//! | Attribute | Bit | Weight |
//! |-----------|-----|--------|
//! | Small font (Font B) | 0 | 1 |
//! | Bold | 3 | 8 |
//! | Double height | 4 | 16 |
//! | Double width | 5 | 32 |
//! | Underline | 7 | 128 |
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```

use bitflags::bitflags;
use serde::Deserialize;
use tracing::warn;

use super::codepage;
use super::commands::ESC;
use crate::printer::PrinterConfig;

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl Alignment {
    /// Parse an alignment name.
    ///
    /// Accepts the case-sensitive words `left`, `center`, `right` and the
    /// aliases `l`, `c`, `r`. Anything else returns `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "left" | "l" => Some(Self::Left),
            "center" | "c" => Some(Self::Center),
            "right" | "r" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Lenient conversion: unrecognized names fall back to [`Alignment::Left`].
impl From<&str> for Alignment {
    fn from(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            warn!(name, "unknown alignment, falling back to left");
            Self::Left
        })
    }
}

impl From<String> for Alignment {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

/// # Select Justification (ESC a n)
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC a n  |
/// | Hex     | 1B 61 n  |
/// | Decimal | 27 97 n  |
///
/// ## Parameters
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// ## Example
///
/// ```
/// use escpos_encoder::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
/// assert_eq!(align("bogus".into()), align(Alignment::Left));
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

// ============================================================================
// PRINT MODE
// ============================================================================

bitflags! {
    /// The five character attributes carried by `ESC ! n`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PrintMode: u8 {
        const SMALL_FONT    = 1;
        const BOLD          = 8;
        const DOUBLE_HEIGHT = 16;
        const DOUBLE_WIDTH  = 32;
        const UNDERLINE     = 128;
    }
}

/// One settable attribute of the print mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleFlag {
    SmallFont,
    Bold,
    DoubleHeight,
    DoubleWidth,
    Underline,
}

impl StyleFlag {
    /// All flags in bit order.
    pub const ALL: [StyleFlag; 5] = [
        StyleFlag::SmallFont,
        StyleFlag::Bold,
        StyleFlag::DoubleHeight,
        StyleFlag::DoubleWidth,
        StyleFlag::Underline,
    ];

    /// The bit this flag contributes to the mode byte.
    pub const fn mode(self) -> PrintMode {
        match self {
            StyleFlag::SmallFont => PrintMode::SMALL_FONT,
            StyleFlag::Bold => PrintMode::BOLD,
            StyleFlag::DoubleHeight => PrintMode::DOUBLE_HEIGHT,
            StyleFlag::DoubleWidth => PrintMode::DOUBLE_WIDTH,
            StyleFlag::Underline => PrintMode::UNDERLINE,
        }
    }
}

/// # Select Print Mode (ESC ! n)
///
/// Applies all five attributes at once.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC ! n  |
/// | Hex     | 1B 21 n  |
/// | Decimal | 27 33 n  |
///
/// ## Example
///
/// ```
/// use escpos_encoder::protocol::text::{select_print_mode, PrintMode};
///
/// let mode = PrintMode::BOLD | PrintMode::UNDERLINE;
/// assert_eq!(select_print_mode(mode), vec![0x1B, 0x21, 136]);
/// ```
#[inline]
pub fn select_print_mode(mode: PrintMode) -> Vec<u8> {
    vec![ESC, b'!', mode.bits()]
}

// ============================================================================
// RULED LINES
// ============================================================================

/// Fill character used when the caller supplies none.
pub const DEFAULT_RULE_CHAR: u8 = b'-';

/// A full-width rule made of the first character of `pattern`.
///
/// The character is looked up in the code page table, so box-drawing
/// input such as `═` prints natively. Every cell is exactly one byte:
/// empty input or a control character falls back to `-`, and a character
/// with no native code falls back to `-` with a warning. No line
/// terminator is appended.
///
/// ```
/// use escpos_encoder::protocol::text::horizontal_line;
///
/// assert_eq!(horizontal_line("="), vec![b'='; 48]);
/// assert_eq!(horizontal_line(""), vec![b'-'; 48]);
/// assert_eq!(horizontal_line("€"), vec![b'-'; 48]);
/// ```
pub fn horizontal_line(pattern: &str) -> Vec<u8> {
    let cell = match pattern.chars().next() {
        None => DEFAULT_RULE_CHAR,
        Some(ch) if ch.is_ascii_control() => DEFAULT_RULE_CHAR,
        Some(ch) => codepage::lookup(ch).unwrap_or_else(|| {
            warn!(
                "no native code for rule character '{}' (U+{:04X}), using '-'",
                ch, ch as u32
            );
            DEFAULT_RULE_CHAR
        }),
    };
    vec![cell; PrinterConfig::REFERENCE.columns]
}

// ============================================================================
// TESTS
// ============================================================================
