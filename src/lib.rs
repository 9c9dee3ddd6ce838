//! # ESC/POS Encoder
//!
//! Translates print intents (aligned text, styled runs, barcodes, feed and
//! cut, beep, reverse video) into the byte stream understood by
//! ESC/POS-compatible thermal receipt printers. It provides:
//!
//! - **Protocol implementation**: pure ESC/POS command builders
//! - **Transliteration**: Unicode text to the printer's native code page
//! - **Encoder**: a stateful writer that combines style toggles into one
//!   print mode byte
//! - **IR**: print jobs as data, loadable from JSON
//!
//! Delivering the bytes (USB, serial, network, file) is up to the caller:
//! any [`std::io::Write`] works as a sink.
//!
//! ## Quick Start
//!
//! ```
//! use escpos_encoder::Encoder;
//!
//! let bytes = Encoder::session(Vec::new(), |printer| {
//!     printer.set_alignment("center")?;
//!     printer.set_bold(true)?;
//!     printer.text("HELLO")?;
//!     printer.set_bold(false)?;
//!     printer.barcode(80, 4, b"12345")
//! })?;
//!
//! // std::fs::write("/dev/usb/lp0", &bytes)?;
//! # assert!(!bytes.is_empty());
//! # Ok::<(), escpos_encoder::EncoderError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders and code page |
//! | [`encoder`] | Stateful encoder and print sessions |
//! | [`ir`] | Print job representation |
//! | [`demo`] | Diagnostic test pages |
//! | [`printer`] | Printer constants |
//! | [`error`] | Error types |
//!
//! ## Input Handling
//!
//! Out-of-range parameters never fail. They are replaced with a safe
//! value (documented per command) and reported through `tracing` at
//! `WARN` level.

pub mod demo;
pub mod encoder;
pub mod error;
pub mod ir;
pub mod printer;
pub mod protocol;

// Re-exports for convenience
pub use encoder::Encoder;
pub use error::EncoderError;
pub use printer::PrinterConfig;
