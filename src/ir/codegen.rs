//! # Code Generation
//!
//! Compiles IR programs to ESC/POS bytes by replaying them on an
//! [`Encoder`].

use std::io::Write;

use super::ops::{Op, Program};
use crate::encoder::Encoder;
use crate::error::EncoderError;
use crate::protocol::text::PrintMode;

impl Op {
    /// Perform this op on `encoder`.
    pub fn apply<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), EncoderError> {
        match self {
            // ===== Printer Control =====
            Op::Init => encoder.reset(),
            Op::Cut => encoder.cut(),
            Op::Feed { lines } => encoder.feed(*lines),
            Op::Beep { count, length } => encoder.beep(*count, *length),

            // ===== Style Changes =====
            Op::SetAlign { align } => encoder.set_alignment(*align),
            Op::SetStyle { flag, enabled } => encoder.set_style(*flag, *enabled),
            Op::SetPrintMode { mode } => {
                encoder.set_print_mode(PrintMode::from_bits_truncate(*mode))
            }
            Op::SetReverse { enabled } => encoder.set_reverse_colors(*enabled),

            // ===== Content =====
            Op::Text { content } => encoder.text(content),
            Op::HorizontalLine { pattern } => encoder.horizontal_line(pattern),
            Op::Barcode {
                height,
                kind,
                content,
            } => encoder.barcode(*height, *kind, content.as_bytes()),
            Op::Raw { bytes } => encoder.raw(bytes),
        }
    }
}

impl Program {
    /// Parse a JSON job: `{"ops": [{"op": "init"}, ...]}`.
    pub fn from_json(json: &str) -> Result<Self, EncoderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replay every op on `encoder`, in order.
    pub fn write_to<W: Write>(&self, encoder: &mut Encoder<W>) -> Result<(), EncoderError> {
        self.iter().try_for_each(|op| op.apply(encoder))
    }

    /// Compile the ops alone, with a fresh style state.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncoderError> {
        let mut encoder = Encoder::new(Vec::new());
        self.write_to(&mut encoder)?;
        Ok(encoder.into_inner())
    }

    /// Compile the ops inside a session: reset first, feed and cut last.
    pub fn to_session_bytes(&self) -> Result<Vec<u8>, EncoderError> {
        Encoder::session(Vec::new(), |encoder| self.write_to(encoder))
    }
}
