//! # Job Tests
//!
//! JSON print jobs rendered through the IR.

use escpos_encoder::ir::{Op, Program};
use escpos_encoder::protocol::text::Alignment;
use pretty_assertions::assert_eq;

const RECEIPT: &str = include_str!("fixtures/receipt.json");

#[test]
fn receipt_fixture_parses() {
    let program = Program::from_json(RECEIPT).unwrap();
    assert_eq!(program.len(), 14);
    assert_eq!(
        program.ops[0],
        Op::SetAlign {
            align: Alignment::Center
        }
    );
    assert_eq!(
        program.ops[13],
        Op::Beep {
            count: 2,
            length: 1
        }
    );
}

#[test]
fn receipt_fixture_renders() {
    let program = Program::from_json(RECEIPT).unwrap();
    let bytes = program.to_session_bytes().unwrap();

    assert!(bytes.starts_with(&[0x1B, 0x40, 0x1B, 0x61, 0x01, 0x1B, 0x21, 32]));
    assert!(bytes.ends_with(&[0x1B, 0x42, 2, 1, 0x1B, 0x64, 2, 0x1D, 0x56, 0x41, 3]));

    // "für" is transliterated
    assert!(bytes.windows(3).any(|w| w == [b'f', 0x81, b'r']));

    // Barcode digits are sent verbatim and NUL-terminated
    let barcode: &[u8] = b"\x1Dh\x50\x1Dk\x024006381333931\x00";
    assert!(bytes.windows(barcode.len()).any(|w| w == barcode));

    // Euro sign has no native code and passes through as UTF-8
    let euro = "€".as_bytes();
    assert!(bytes.windows(euro.len()).any(|w| w == euro));
}

#[test]
fn ops_only_rendering_has_no_session_bytes() {
    let program = Program::from_json(r#"{"ops": [{"op": "text", "content": "hi"}]}"#).unwrap();
    assert_eq!(program.to_bytes().unwrap(), b"hi\n");
}

#[test]
fn invalid_job_is_an_error() {
    let err = Program::from_json(r#"{"ops": [{"op": "explode"}]}"#).unwrap_err();
    assert!(err.to_string().starts_with("Invalid job"));
    assert!(Program::from_json("not json").is_err());
}
