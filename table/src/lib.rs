//! Microstep PWM tables for 4-wire stepper motors.
//!
//! A table drives two coils in quadrature: channel A follows `cos θ`, channel
//! B follows `sin θ`. Each channel is split into a positive and a negative rail
//! so that an H-bridge can be driven from two unsigned PWM compare values.
//!
//! # Entry Points
//!
//! ```
//! use pwm_table::serializer::asm::{to_asm, AsmOptions};
//!
//! let table = pwm_table::generate(16, 4800).expect("count is positive");
//! assert_eq!(table.len(), 64);
//!
//! let asm = to_asm(table.entries(), &AsmOptions::default()).expect("4800 fits in 4 digits");
//! assert!(asm.starts_with(".align 256\nPWMStepperTable:\n"));
//! ```
//!
//! # Modules
//!
//! - [`generator`] — sampling and rail rectification
//! - [`model`] — [`Table`], [`TableEntry`], [`Rounding`]
//! - [`serializer`] — assembly and JSON output
//! - [`error`] — [`TableError`]

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod generator;
pub mod model;
pub mod serializer;

pub use error::TableError;
pub use generator::{generate, generate_with};
pub use model::{Rounding, Table, TableEntry};

/// Default peak amplitude, in PWM compare counts.
pub const DEFAULT_AMPLITUDE: i64 = 4800;
