//! # Printer Module
//!
//! Hardware constants of the target printer.
//!
//! - [`config`]: Printer hardware specifications

pub mod config;

pub use config::PrinterConfig;
