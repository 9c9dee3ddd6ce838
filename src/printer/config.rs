//! # Printer Configuration
//!
//! The encoder targets exactly one firmware dialect, so the model's
//! constants are fixed at compile time.
//!
//! ```
//! use escpos_encoder::printer::PrinterConfig;
//!
//! let config = PrinterConfig::REFERENCE;
//! assert_eq!(config.columns, 48);
//! ```

/// # Printer Configuration
///
/// - **columns**: printable characters per line in the default font.
///   Used for ruled lines and line text truncation.
/// - **closing_feed**: blank lines fed before the final cut of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: &'static str,

    /// Characters per line (80mm paper, Font A)
    pub columns: usize,

    /// Lines fed by [`Encoder::close`](crate::encoder::Encoder::close) before cutting
    pub closing_feed: i32,
}

impl PrinterConfig {
    /// # Reference 80mm ESC/POS Printer
    ///
    /// | Property | Value |
    /// |----------|-------|
    /// | Paper width | 80mm |
    /// | Columns (Font A) | 48 |
    /// | Cutter | Auto-cutter, full cut |
    /// | Code page | Latin-1 / box drawing (CP850 layout) |
    pub const REFERENCE: Self = Self {
        name: "ESC/POS 80mm",
        columns: 48,
        closing_feed: 2,
    };
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_config() {
        let config = PrinterConfig::default();
        assert_eq!(config, PrinterConfig::REFERENCE);
        assert_eq!(config.columns, 48);
        assert_eq!(config.closing_feed, 2);
    }
}
