//! # ESC/POS Barcode Commands
//!
//! Linear barcodes printed with `GS h` (height) followed by `GS k`
//! (symbology + data, NUL-terminated).
//!
//! ## Supported Barcode Types
//!
//! | Code | Symbology | Content |
//! |------|-----------|---------|
//! | 0 | UPC-A | 11-12 digits |
//! | 1 | UPC-E | 11-12 digits |
//! | 2 | EAN13 / JAN13 | 12-13 digits |
//! | 3 | EAN8 / JAN8 | 7-8 digits |
//! | 4 | CODE39 | A-Z, 0-9, space, `$%+-./` |
//! | 5 | ITF | even number of digits |
//! | 6 | CODABAR (NW-7) | 0-9, `$+-./:`, start/stop A-D |
//!
//! Content is not validated; the printer ignores malformed data.
//!
//! ## Usage
//!
//! ```
//! use escpos_encoder::protocol::barcode::{barcode, BarcodeType};
//!
//! let bytes = barcode(80, BarcodeType::Code39, b"HELLO");
//! assert_eq!(&bytes[..6], &[0x1D, b'h', 80, 0x1D, b'k', 4]);
//! assert_eq!(bytes.last(), Some(&0x00));
//! ```

use serde::Deserialize;
use tracing::warn;

use super::commands::{GS, NUL};

/// Barcode height used when the requested one is out of range.
pub const DEFAULT_HEIGHT: u8 = 120;

/// Shortest barcode (in dots) that still scans reliably.
pub const MIN_HEIGHT: i32 = 15;

/// 1D barcode symbologies, numbered as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "i32")]
#[repr(u8)]
pub enum BarcodeType {
    UpcA = 0,
    UpcE = 1,
    Ean13 = 2,
    Ean8 = 3,
    #[default]
    Code39 = 4,
    Itf = 5,
    Codabar = 6,
}

impl BarcodeType {
    /// Look up a symbology by wire code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::UpcA),
            1 => Some(Self::UpcE),
            2 => Some(Self::Ean13),
            3 => Some(Self::Ean8),
            4 => Some(Self::Code39),
            5 => Some(Self::Itf),
            6 => Some(Self::Codabar),
            _ => None,
        }
    }
}

/// Lenient conversion: unknown codes fall back to CODE39.
impl From<i32> for BarcodeType {
    fn from(code: i32) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            warn!(code, "unknown barcode type, falling back to CODE39");
            Self::default()
        })
    }
}

/// Normalize a barcode height into 15..=255 dots, falling back to 120.
pub fn barcode_height(height: i32) -> u8 {
    match u8::try_from(height) {
        Ok(h) if height >= MIN_HEIGHT => h,
        _ => {
            warn!(height, "barcode height outside 15..=255, falling back to {}", DEFAULT_HEIGHT);
            DEFAULT_HEIGHT
        }
    }
}

/// # Print Barcode (GS h n, GS k m d1...dk NUL)
///
/// ## Protocol Details
///
/// | Part | Bytes |
/// |------|-------|
/// | Height | `GS h n` (1D 68 n) |
/// | Barcode | `GS k m` (1D 6B m) |
/// | Data | `content` verbatim |
/// | Terminator | `NUL` |
///
/// ## Parameters
///
/// - `height`: dots, 15..=255; anything else becomes 120
/// - `kind`: symbology
/// - `content`: printer-native bytes, appended unchanged. The NUL
///   terminator is always written, even when `content` is empty.
pub fn barcode(height: i32, kind: BarcodeType, content: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len() + 7);
    out.extend([GS, b'h', barcode_height(height)]);
    out.extend([GS, b'k', kind as u8]);
    out.extend_from_slice(content);
    out.push(NUL);
    out
}
