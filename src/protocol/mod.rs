//! # ESC/POS Protocol Implementation
//!
//! Low-level command builders for ESC/POS thermal receipt printers. Every
//! builder is a pure function returning the bytes of one command.
//!
//! ## Module Structure
//!
//! - [`commands`]: Reset, feed, cut, buzzer, reverse video
//! - [`text`]: Alignment, print mode byte, ruled lines
//! - [`barcode`]: 1D barcodes
//! - [`codepage`]: Unicode to native byte transliteration
//!
//! ## Usage Example
//!
//! ```
//! use escpos_encoder::protocol::{codepage, commands, text};
//! use escpos_encoder::protocol::text::{Alignment, PrintMode};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::align(Alignment::Center));
//! data.extend(text::select_print_mode(PrintMode::BOLD));
//! data.extend(codepage::transliterate("Grüße"));
//! data.push(commands::LF);
//! data.extend(commands::feed(2));
//! data.extend(commands::cut());
//! ```

pub mod barcode;
pub mod codepage;
pub mod commands;
pub mod text;
