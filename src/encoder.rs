//! # Command Encoder
//!
//! [`Encoder`] turns print intents into ESC/POS bytes and writes them to a
//! caller-supplied sink (`Vec<u8>`, file, socket, serial port...). It is
//! the only stateful piece of the crate: it owns the current
//! [`PrintMode`] so that successive style toggles combine into a single
//! mode byte.
//!
//! ## Lifecycle
//!
//! Nothing is emitted implicitly. [`Encoder::open`] sends the reset,
//! [`Encoder::close`] feeds two lines and cuts, and [`Encoder::session`]
//! wraps a closure between the two so the closing sequence is written on
//! every return path. Dropping an encoder writes nothing.
//!
//! ```
//! use escpos_encoder::Encoder;
//!
//! let bytes = Encoder::session(Vec::new(), |printer| {
//!     printer.set_alignment("center")?;
//!     printer.set_bold(true)?;
//!     printer.text("HAIR SALON")?;
//!     printer.set_bold(false)?;
//!     printer.set_alignment("left")?;
//!     printer.text("Thank you for your visit.")
//! })?;
//! assert_eq!(&bytes[..2], &[0x1B, b'@']);
//! # Ok::<(), escpos_encoder::EncoderError>(())
//! ```
//!
//! ## Concurrency
//!
//! Each encoder owns its style state. Independent print jobs use
//! independent encoders; sharing one across threads needs external
//! synchronization (`&mut self` enforces this).

use std::io::Write;

use tracing::debug;

use crate::error::EncoderError;
use crate::printer::PrinterConfig;
use crate::protocol::barcode::{self, BarcodeType};
use crate::protocol::codepage;
use crate::protocol::commands::{self, LF};
use crate::protocol::text::{self, Alignment, PrintMode, StyleFlag};

/// ESC/POS encoder writing into `W`.
#[derive(Debug)]
pub struct Encoder<W: Write> {
    sink: W,
    style: PrintMode,
}

impl<W: Write> Encoder<W> {
    /// Wrap a sink without emitting anything. Style state starts all-off.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            style: PrintMode::empty(),
        }
    }

    /// Wrap a sink and reset the printer.
    pub fn open(sink: W) -> Result<Self, EncoderError> {
        let mut encoder = Self::new(sink);
        debug!("opening print session");
        encoder.reset()?;
        Ok(encoder)
    }

    /// Feed two lines, cut, flush and hand back the sink.
    pub fn close(mut self) -> Result<W, EncoderError> {
        debug!("closing print session");
        self.feed(PrinterConfig::REFERENCE.closing_feed)?;
        self.cut()?;
        self.sink.flush()?;
        Ok(self.sink)
    }

    /// Run `body` between [`open`](Self::open) and [`close`](Self::close).
    ///
    /// The closing feed and cut are written whether `body` succeeds or
    /// fails. An error from `body` takes precedence over one from closing.
    ///
    /// # Panics
    ///
    /// If `body` panics, the panic propagates and the closing sequence is
    /// not written; the sink holds whatever `body` wrote before the panic.
    /// Callers that need the cut even then must catch the unwind inside
    /// `body` and turn it into an error.
    pub fn session<F, E>(sink: W, body: F) -> Result<W, E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
        E: From<EncoderError>,
    {
        let mut encoder = Self::open(sink)?;
        let outcome = body(&mut encoder);
        let closed = encoder.close();
        outcome?;
        Ok(closed?)
    }

    /// Current style state.
    pub fn style(&self) -> PrintMode {
        self.style
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Give back the sink without emitting the closing sequence.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn emit(&mut self, bytes: &[u8]) -> Result<(), EncoderError> {
        self.sink.write_all(bytes)?;
        Ok(())
    }

    // ========== Printer Control ==========

    /// Hardware reset (`ESC @`).
    ///
    /// The printer forgets its print mode, but this encoder's style state
    /// is kept: the next style setter re-sends the previously active flags.
    pub fn reset(&mut self) -> Result<(), EncoderError> {
        self.emit(&commands::init())
    }

    /// Set alignment from an [`Alignment`] or a name (`"center"`, `"c"`...).
    /// Unknown names align left.
    pub fn set_alignment(&mut self, alignment: impl Into<Alignment>) -> Result<(), EncoderError> {
        self.emit(&text::align(alignment.into()))
    }

    /// Feed `lines` blank lines. `0` writes nothing; see [`commands::feed`].
    pub fn feed(&mut self, lines: i32) -> Result<(), EncoderError> {
        self.emit(&commands::feed(lines))
    }

    /// Feed 3 and full cut.
    pub fn cut(&mut self) -> Result<(), EncoderError> {
        self.emit(&commands::cut())
    }

    /// Beep `count` times for `length` units; each falls back to 1 outside 1..=9.
    pub fn beep(&mut self, count: i32, length: i32) -> Result<(), EncoderError> {
        self.emit(&commands::beep(count, length))
    }

    /// White on black when `true`, black on white when `false`.
    pub fn set_reverse_colors(&mut self, enabled: bool) -> Result<(), EncoderError> {
        self.emit(&commands::reverse_colors(enabled))
    }

    // ========== Style Changes ==========

    /// Update one flag and apply the combined print mode.
    pub fn set_style(&mut self, flag: StyleFlag, enabled: bool) -> Result<(), EncoderError> {
        self.style.set(flag.mode(), enabled);
        self.emit(&text::select_print_mode(self.style))
    }

    /// Replace all five flags at once and apply them.
    pub fn set_print_mode(&mut self, mode: PrintMode) -> Result<(), EncoderError> {
        self.style = mode;
        self.emit(&text::select_print_mode(self.style))
    }

    pub fn set_small_font(&mut self, enabled: bool) -> Result<(), EncoderError> {
        self.set_style(StyleFlag::SmallFont, enabled)
    }

    pub fn set_bold(&mut self, enabled: bool) -> Result<(), EncoderError> {
        self.set_style(StyleFlag::Bold, enabled)
    }

    pub fn set_double_height(&mut self, enabled: bool) -> Result<(), EncoderError> {
        self.set_style(StyleFlag::DoubleHeight, enabled)
    }

    pub fn set_double_width(&mut self, enabled: bool) -> Result<(), EncoderError> {
        self.set_style(StyleFlag::DoubleWidth, enabled)
    }

    pub fn set_underline(&mut self, enabled: bool) -> Result<(), EncoderError> {
        self.set_style(StyleFlag::Underline, enabled)
    }

    // ========== Content ==========

    /// Print a barcode. `kind` accepts a [`BarcodeType`] or a wire code
    /// (unknown codes become CODE39). `content` is sent verbatim.
    pub fn barcode(
        &mut self,
        height: i32,
        kind: impl Into<BarcodeType>,
        content: &[u8],
    ) -> Result<(), EncoderError> {
        self.emit(&barcode::barcode(height, kind.into(), content))
    }

    /// 48 copies of the first character of `pattern` (`-` when empty).
    pub fn horizontal_line(&mut self, pattern: &str) -> Result<(), EncoderError> {
        self.emit(&text::horizontal_line(pattern))
    }

    /// One line of text: transliterated, cut to 48 bytes, `LF` appended.
    pub fn text(&mut self, line: &str) -> Result<(), EncoderError> {
        let mut bytes = codepage::transliterate_line(line);
        bytes.push(LF);
        self.emit(&bytes)
    }

    /// Printer-native bytes, written unchanged.
    pub fn raw(&mut self, bytes: &[u8]) -> Result<(), EncoderError> {
        self.emit(bytes)
    }
}
