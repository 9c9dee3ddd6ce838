//! # Intermediate Representation (IR)
//!
//! A print job as data. The IR sits between callers (code, JSON files,
//! the CLI) and the [`Encoder`](crate::Encoder):
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌───────────┐     ┌──────────┐
//! │ JSON / code │ ──► │     IR      │ ──► │  Encoder  │ ──► │  Bytes   │
//! │             │     │  (Vec<Op>)  │     │  (style)  │     │          │
//! └─────────────┘     └─────────────┘     └───────────┘     └──────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use escpos_encoder::ir::{Op, Program};
//! use escpos_encoder::protocol::text::{Alignment, StyleFlag};
//!
//! let mut program = Program::new();
//! program.push(Op::SetAlign { align: Alignment::Center });
//! program.push(Op::SetStyle { flag: StyleFlag::Bold, enabled: true });
//! program.push(Op::Text { content: "HELLO".into() });
//!
//! println!("{:#?}", program);
//! let bytes = program.to_session_bytes()?;
//! assert_eq!(&bytes[..2], &[0x1B, b'@']);
//! # Ok::<(), escpos_encoder::EncoderError>(())
//! ```
//!
//! ## JSON Jobs
//!
//! ```
//! use escpos_encoder::ir::Program;
//!
//! let program = Program::from_json(r#"{
//!     "ops": [
//!         {"op": "set_align", "align": "c"},
//!         {"op": "text", "content": "RECEIPT"},
//!         {"op": "horizontal_line", "pattern": "="},
//!         {"op": "barcode", "kind": 4, "content": "12345"}
//!     ]
//! }"#)?;
//! assert_eq!(program.len(), 4);
//! # Ok::<(), escpos_encoder::EncoderError>(())
//! ```

mod codegen;
mod ops;

pub use ops::*;
