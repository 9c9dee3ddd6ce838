//! # IR Opcodes
//!
//! A print job as an ordered list of opcodes, one per encoder operation.
//! Programs can be built in code, inspected with `{:#?}`, or read from
//! JSON, then compiled to bytes by the codegen pass.
//!
//! ```text
//! JSON / code → Program (Vec<Op>) → Encoder → Bytes
//! ```

use serde::Deserialize;

use crate::protocol::barcode::BarcodeType;
use crate::protocol::text::{Alignment, StyleFlag};

fn default_barcode_height() -> i32 {
    i32::from(crate::protocol::barcode::DEFAULT_HEIGHT)
}

fn default_one() -> i32 {
    1
}

/// IR opcodes.
///
/// Numeric fields keep the caller's raw values; range fallbacks happen
/// when the op is encoded, exactly as for direct encoder calls.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    // ========== Printer Control ==========
    /// Hardware reset (ESC @).
    Init,

    /// Feed 3 and full cut.
    Cut,

    /// Feed blank lines. 0 is a no-op.
    Feed { lines: i32 },

    /// Sound the buzzer.
    Beep {
        #[serde(default = "default_one")]
        count: i32,
        #[serde(default = "default_one")]
        length: i32,
    },

    // ========== Style Changes ==========
    /// Set text alignment. Unknown names in JSON become left.
    SetAlign { align: Alignment },

    /// Enable/disable one print mode flag.
    SetStyle { flag: StyleFlag, enabled: bool },

    /// Replace the whole print mode byte. Undefined bits are dropped.
    SetPrintMode { mode: u8 },

    /// Enable/disable white-on-black printing.
    SetReverse { enabled: bool },

    // ========== Content ==========
    /// One line of text (transliterated, newline appended).
    Text { content: String },

    /// Full-width rule of the first character of `pattern`.
    HorizontalLine {
        #[serde(default)]
        pattern: String,
    },

    /// 1D barcode. `content` is sent as its UTF-8 bytes, untransliterated.
    Barcode {
        #[serde(default = "default_barcode_height")]
        height: i32,
        #[serde(default)]
        kind: BarcodeType,
        content: String,
    },

    /// Raw printer-native bytes.
    Raw { bytes: Vec<u8> },
}

/// An ordered print job.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Add multiple ops to the program.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = Op>) {
        self.ops.extend(ops);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_new() {
        let program = Program::new();
        assert!(program.is_empty());
    }

    #[test]
    fn test_program_push() {
        let mut program = Program::new();
        program.push(Op::Init);
        program.push(Op::SetStyle {
            flag: StyleFlag::Bold,
            enabled: true,
        });
        program.push(Op::Text {
            content: "Hello".into(),
        });
        assert_eq!(program.len(), 3);
        assert_eq!(program.iter().next(), Some(&Op::Init));
    }

    #[test]
    fn test_program_from_iter() {
        let program: Program = [Op::Init, Op::Cut].into_iter().collect();
        assert_eq!(program.ops, vec![Op::Init, Op::Cut]);
    }

    #[test]
    fn test_op_defaults_from_json() {
        let op: Op = serde_json::from_str(r#"{"op": "beep"}"#).unwrap();
        assert_eq!(op, Op::Beep { count: 1, length: 1 });

        let op: Op = serde_json::from_str(r#"{"op": "barcode", "content": "42"}"#).unwrap();
        assert_eq!(
            op,
            Op::Barcode {
                height: 120,
                kind: BarcodeType::Code39,
                content: "42".into(),
            }
        );

        let op: Op = serde_json::from_str(r#"{"op": "horizontal_line"}"#).unwrap();
        assert_eq!(op, Op::HorizontalLine { pattern: String::new() });
    }

    #[test]
    fn test_op_lenient_fields() {
        let op: Op = serde_json::from_str(r#"{"op": "set_align", "align": "middle"}"#).unwrap();
        assert_eq!(op, Op::SetAlign { align: Alignment::Left });

        let op: Op =
            serde_json::from_str(r#"{"op": "barcode", "kind": 42, "content": "1"}"#).unwrap();
        assert!(matches!(op, Op::Barcode { kind: BarcodeType::Code39, .. }));
    }

    #[test]
    fn test_unknown_op_rejected() {
        assert!(serde_json::from_str::<Op>(r#"{"op": "qr_code"}"#).is_err());
        assert!(serde_json::from_str::<Op>(r#"{"op": "set_style", "flag": "italic", "enabled": true}"#).is_err());
    }
}
