//! `gen-pwm-table` — Writes a microstep PWM table for a 4-wire stepper.
//!
//! Generates `4 * x` entries of `(A, A_bar, B, B_bar)` rail values and prints
//! them as assembly data directives (or JSON) on stdout.
//!
//! **Usage:**
//! ```
//! gen-pwm-table <x> [--amp <int>] [--label <name>] [--end-label <name>] [--word <directive>]
//!               [--width <n>] [--annotate] [--rounding <mode>] [--format asm|json] [--out <path>]
//! ```
//!
//! Exits with status 2 if `x` is not positive or a value does not fit the
//! field width, and 1 if the output cannot be written. Logs go to stderr
//! (`RUST_LOG` or `-v`/`-vv`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pwm_table::serializer::asm::{
    self, AsmOptions, DEFAULT_END_LABEL, DEFAULT_LABEL, DEFAULT_WIDTH, DEFAULT_WORD_DIRECTIVE,
};
use pwm_table::serializer::json;
use pwm_table::{generate_with, Rounding, TableError, DEFAULT_AMPLITUDE};
use tracing_subscriber::EnvFilter;

/// Generate a PWM table for microstepping (ARM asm).
#[derive(Parser)]
#[command(
    name = "gen-pwm-table",
    version,
    about = "Generate a PWM table for stepper microstepping as assembly data directives"
)]
struct Args {
    /// Microsteps per 90 degrees (positive integer). Table length = 4*x.
    #[arg(allow_negative_numbers = true)]
    x: i64,

    /// Peak amplitude.
    #[arg(long, default_value_t = DEFAULT_AMPLITUDE, allow_negative_numbers = true)]
    amp: i64,

    /// Label name for the table start.
    #[arg(long, default_value = DEFAULT_LABEL)]
    label: String,

    /// Label name for the table end.
    #[arg(long, default_value = DEFAULT_END_LABEL)]
    end_label: String,

    /// Assembly data directive to use (e.g. `.hword` for half-words).
    #[arg(long, default_value = DEFAULT_WORD_DIRECTIVE)]
    word: String,

    /// Zero-padded digits per value; wider values are an error.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Append an `@ idx=<i>` comment to every data line.
    #[arg(long)]
    annotate: bool,

    /// Tie-breaking rule when rounding samples to integers.
    #[arg(long, value_enum, default_value_t = RoundingArg::HalfEven)]
    rounding: RoundingArg,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Asm)]
    format: Format,

    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Raise log verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoundingArg {
    /// Ties to the even neighbour.
    HalfEven,
    /// Ties away from zero.
    #[value(alias = "half-away")]
    HalfAwayFromZero,
}

impl From<RoundingArg> for Rounding {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::HalfEven => Rounding::HalfEven,
            RoundingArg::HalfAwayFromZero => Rounding::HalfAwayFromZero,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Assembly data directives.
    Asm,
    /// JSON document with the raw rail values.
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let invalid_argument = err
                .downcast_ref::<TableError>()
                .is_some_and(TableError::is_invalid_argument);
            ExitCode::from(if invalid_argument { 2 } else { 1 })
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let table = generate_with(args.x, args.amp, args.rounding.into())?;
    tracing::info!(
        "Table: {} entries, amplitude {}, rounding {}",
        table.len(),
        table.amplitude(),
        table.rounding().as_str()
    );

    let text = match args.format {
        Format::Asm => {
            let options = AsmOptions {
                label: args.label.clone(),
                end_label: args.end_label.clone(),
                word_directive: args.word.clone(),
                width: args.width,
                annotate: args.annotate,
            };
            asm::to_asm(table.entries(), &options)?
        }
        Format::Json => json::to_json_string(&table)?,
    };

    match &args.out {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Written: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write table to stdout")?;
        }
    }
    Ok(())
}
