//! # ESC/POS Printer Control Commands
//!
//! Builders for the structural commands of the ESC/POS dialect: reset,
//! paper feed, cutter, buzzer and reverse video.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Two bytes: `ESC @`
//! - Three bytes: `ESC a n`, `ESC d n`, `GS B n`
//! - Four bytes: `ESC B n1 n2`, `GS V A n`
//!
//! ## Fallback Behavior
//!
//! The wire protocol has no acknowledgment channel, so a malformed
//! parameter would desynchronize the printer's command parser. Builders
//! therefore never fail: out-of-range input is coerced to a safe value
//! and a `tracing` warning is emitted.

use tracing::warn;

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Hex: 0x1B, Decimal: 27
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for cutter, reverse video and barcode commands.
/// Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// NUL - Barcode content terminator
pub const NUL: u8 = 0x00;

/// LF (Line Feed) - Print line buffer and advance one line
pub const LF: u8 = 0x0A;

/// Largest line count a single `ESC d` command can carry.
pub const MAX_FEED_LINES: u8 = u8::MAX;

/// Paper advanced by the cutter before cutting (`GS V A n`).
pub const CUT_FEED: u8 = 3;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Called once at the
/// start of a print session.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## Example
///
/// ```
/// use escpos_encoder::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// PAPER FEED COMMANDS
// ============================================================================

/// Normalize a caller-supplied line count into the `ESC d` parameter.
///
/// - `0` yields `None`: no command is sent at all
/// - negative counts use their magnitude
/// - magnitudes above 255 are clamped to 255
pub fn feed_count(lines: i32) -> Option<u8> {
    if lines == 0 {
        return None;
    }
    let magnitude = lines.unsigned_abs();
    match u8::try_from(magnitude) {
        Ok(n) => Some(n),
        Err(_) => {
            warn!(lines, "feed count exceeds one byte, clamping to {}", MAX_FEED_LINES);
            Some(MAX_FEED_LINES)
        }
    }
}

/// # Print and Feed n Lines (ESC d n)
///
/// Prints the line buffer and feeds `n` blank lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | ESC d n   |
/// | Hex     | 1B 64 n   |
/// | Decimal | 27 100 n  |
///
/// ## Parameters
///
/// - `lines`: number of lines. `0` produces no bytes (not a zero-line
///   command). The absolute value is used and clamped to 255.
///
/// ## Example
///
/// ```
/// use escpos_encoder::protocol::commands;
///
/// assert_eq!(commands::feed(3), vec![0x1B, 0x64, 3]);
/// assert_eq!(commands::feed(-3), vec![0x1B, 0x64, 3]);
/// assert!(commands::feed(0).is_empty());
/// ```
pub fn feed(lines: i32) -> Vec<u8> {
    match feed_count(lines) {
        Some(n) => vec![ESC, b'd', n],
        None => Vec::new(),
    }
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// # Feed and Full Cut (GS V A n)
///
/// Feeds the paper by `n` (fixed at 3) and performs a full cut.
///
/// ## Protocol Details
///
/// | Format  | Bytes        |
/// |---------|--------------|
/// | ASCII   | GS V A n     |
/// | Hex     | 1D 56 41 03  |
/// | Decimal | 29 86 65 3   |
#[inline]
pub fn cut() -> Vec<u8> {
    vec![GS, b'V', b'A', CUT_FEED]
}

// ============================================================================
// BUZZER
// ============================================================================

/// Normalize a buzzer parameter into 1..=9.
///
/// The magnitude is taken first; anything still outside 1..=9 falls back to 1.
pub fn beep_param(value: i32) -> u8 {
    let magnitude = value.unsigned_abs();
    if (1..=9).contains(&magnitude) {
        magnitude as u8
    } else {
        warn!(value, "beep parameter outside 1..=9, falling back to 1");
        1
    }
}

/// # Sound Buzzer (ESC B n t)
///
/// Beeps `count` times, each beep lasting `length` units.
///
/// ## Protocol Details
///
/// | Format  | Bytes          |
/// |---------|----------------|
/// | ASCII   | ESC B n t      |
/// | Hex     | 1B 42 n t      |
/// | Decimal | 27 66 n t      |
///
/// ## Parameters
///
/// Both values are validated independently with [`beep_param`].
///
/// ## Example
///
/// ```
/// use escpos_encoder::protocol::commands;
///
/// assert_eq!(commands::beep(3, 2), vec![0x1B, 0x42, 3, 2]);
/// assert_eq!(commands::beep(-5, 20), vec![0x1B, 0x42, 5, 1]);
/// ```
pub fn beep(count: i32, length: i32) -> Vec<u8> {
    vec![ESC, b'B', beep_param(count), beep_param(length)]
}

// ============================================================================
// REVERSE VIDEO
// ============================================================================

/// # Reverse Colors (GS B n)
///
/// `true` prints subsequent text white on black, `false` restores black on
/// white.
///
/// ## Protocol Details
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | GS B n    |
/// | Hex     | 1D 42 n   |
/// | Decimal | 29 66 n   |
#[inline]
pub fn reverse_colors(enabled: bool) -> Vec<u8> {
    vec![GS, b'B', u8::from(enabled)]
}

// ============================================================================
// TESTS
// ============================================================================
