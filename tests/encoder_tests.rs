//! # Encoder Tests
//!
//! Byte-exact checks of whole command sequences written through the
//! public API.

use escpos_encoder::protocol::codepage::transliterate;
use escpos_encoder::protocol::{barcode, commands, text};
use escpos_encoder::{Encoder, EncoderError};
use pretty_assertions::assert_eq;

const ESC: u8 = 0x1B;
const GS: u8 = 0x1D;

#[test]
fn end_to_end_hello_receipt() {
    let mut printer = Encoder::new(Vec::new());
    printer.reset().unwrap();
    printer.set_alignment("center").unwrap();
    printer.set_bold(true).unwrap();
    printer.raw(&transliterate("HELLO")).unwrap();
    printer.feed(2).unwrap();
    printer.cut().unwrap();

    let parts: [&[u8]; 6] = [
        &[ESC, b'@'],
        &[ESC, b'a', 1],
        &[ESC, b'!', 8],
        b"HELLO",
        &[ESC, b'd', 2],
        &[GS, b'V', b'A', 3],
    ];
    assert_eq!(printer.into_inner(), parts.concat());
}

#[test]
fn end_to_end_matches_builders() {
    let mut printer = Encoder::new(Vec::new());
    printer.reset().unwrap();
    printer.set_alignment("c").unwrap();
    printer.set_bold(true).unwrap();
    printer.text("HELLO").unwrap();
    printer.feed(2).unwrap();
    printer.cut().unwrap();

    let mut expected = Vec::new();
    expected.extend(commands::init());
    expected.extend(text::align(text::Alignment::Center));
    expected.extend(text::select_print_mode(text::PrintMode::BOLD));
    expected.extend(b"HELLO\n");
    expected.extend(commands::feed(2));
    expected.extend(commands::cut());
    assert_eq!(printer.into_inner(), expected);
}

#[test]
fn session_brackets_job() {
    let bytes = Encoder::session(Vec::new(), |printer| {
        printer.set_underline(true)?;
        printer.text("Grüße")?;
        printer.set_underline(false)
    })
    .unwrap();

    let parts: [&[u8]; 6] = [
        &[ESC, b'@'],
        &[ESC, b'!', 128],
        &[b'G', b'r', 0x81, 0xE1, b'e', b'\n'],
        &[ESC, b'!', 0],
        &[ESC, b'd', 2],
        &[GS, b'V', b'A', 3],
    ];
    assert_eq!(bytes, parts.concat());
}

#[test]
fn independent_encoders_do_not_share_style() {
    let mut first = Encoder::new(Vec::new());
    let mut second = Encoder::new(Vec::new());
    first.set_bold(true).unwrap();
    second.set_underline(true).unwrap();
    first.set_double_height(true).unwrap();

    assert_eq!(first.into_inner().last(), Some(&(8 + 16)));
    assert_eq!(second.into_inner().last(), Some(&128));
}

#[test]
fn style_setters_commute() {
    type Setter = fn(&mut Encoder<Vec<u8>>, bool) -> Result<(), EncoderError>;
    let setters: [Setter; 5] = [
        Encoder::set_small_font,
        Encoder::set_bold,
        Encoder::set_double_height,
        Encoder::set_double_width,
        Encoder::set_underline,
    ];

    let forward = {
        let mut printer = Encoder::new(Vec::new());
        for setter in setters {
            setter(&mut printer, true).unwrap();
        }
        printer.into_inner()
    };
    let backward = {
        let mut printer = Encoder::new(Vec::new());
        for setter in setters.iter().rev() {
            setter(&mut printer, true).unwrap();
        }
        printer.into_inner()
    };

    assert_eq!(forward.last(), Some(&185));
    assert_eq!(forward.last(), backward.last());
}

#[test]
fn barcode_through_encoder() {
    let mut printer = Encoder::new(Vec::new());
    printer.barcode(10, 4, b"123").unwrap();
    printer.barcode(120, 99, b"123").unwrap();
    printer
        .barcode(200, barcode::BarcodeType::Codabar, b"")
        .unwrap();

    let parts: [&[u8]; 3] = [
        &[GS, b'h', 120, GS, b'k', 4, b'1', b'2', b'3', 0],
        &[GS, b'h', 120, GS, b'k', 4, b'1', b'2', b'3', 0],
        &[GS, b'h', 200, GS, b'k', 6, 0],
    ];
    assert_eq!(printer.into_inner(), parts.concat());
}

#[test]
fn horizontal_lines() {
    let mut printer = Encoder::new(Vec::new());
    printer.horizontal_line("=").unwrap();
    printer.horizontal_line("").unwrap();
    let out = printer.into_inner();
    assert_eq!(out.len(), 96);
    assert!(out[..48].iter().all(|b| *b == b'='));
    assert!(out[48..].iter().all(|b| *b == b'-'));
}

#[test]
fn text_cannot_inject_commands() {
    let mut printer = Encoder::new(Vec::new());
    printer.text("A\x1B@B\x1DVA\x03\tC").unwrap();
    assert_eq!(printer.into_inner(), b"A@BVAC\n");
}
