//! # ESC/POS Encoder CLI
//!
//! Renders print jobs to raw ESC/POS bytes.
//!
//! ## Usage
//!
//! ```bash
//! # Render a JSON job straight to a USB printer
//! escpos-encoder render receipt.json > /dev/usb/lp0
//!
//! # Render to a file, without the reset / feed / cut wrapper
//! escpos-encoder render --no-session --output receipt.bin receipt.json
//!
//! # Diagnostic pages
//! escpos-encoder modes > /dev/usb/lp0
//! escpos-encoder chars > /dev/usb/lp0
//! ```
//!
//! Diagnostics go to stderr (`RUST_LOG=debug` for more), so stdout only
//! ever carries printer bytes.

use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;

use escpos_encoder::{Encoder, EncoderError, PrinterConfig, demo, ir::Program};

/// ESC/POS encoder - thermal receipt printer byte streams
#[derive(Parser, Debug)]
#[command(name = "escpos-encoder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write bytes to this file instead of stdout
    #[arg(long, short, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a JSON print job
    Render {
        /// Job file ({"ops": [...]})
        job: PathBuf,

        /// Emit the ops only, without the opening reset and closing feed/cut
        #[arg(long)]
        no_session: bool,
    },

    /// Print every print mode combination
    Modes,

    /// Print the native character table
    Chars,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), EncoderError> {
    run_cli(Cli::parse())
}

fn run_cli(cli: Cli) -> Result<(), EncoderError> {
    let printer = PrinterConfig::REFERENCE.name;

    match cli.command {
        Commands::Render { job, no_session } => {
            // Parse before touching --output so a bad job leaves no file behind
            let program = Program::from_json(&fs::read_to_string(&job)?)?;
            info!(job = %job.display(), ops = program.len(), printer, "rendering job");
            let sink = open_sink(cli.output.as_deref())?;
            if no_session {
                let mut encoder = Encoder::new(sink);
                program.write_to(&mut encoder)?;
                encoder.get_mut().flush()?;
            } else {
                Encoder::session(sink, |encoder| program.write_to(encoder))?;
            }
        }
        Commands::Modes => {
            info!(printer, "printing mode page");
            Encoder::session(open_sink(cli.output.as_deref())?, demo::print_modes)?;
        }
        Commands::Chars => {
            info!(printer, "printing character table");
            Encoder::session(open_sink(cli.output.as_deref())?, demo::char_table)?;
        }
    }

    Ok(())
}

fn open_sink(output: Option<&Path>) -> Result<BufWriter<Box<dyn Write>>, EncoderError> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    Ok(BufWriter::new(sink))
}
