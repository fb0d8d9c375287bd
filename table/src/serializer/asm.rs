//! Assembly serializer.
//!
//! Produces a 256-byte aligned block of data directives framed by a start and
//! an end label:
//!
//! ```text
//! .align 256
//! PWMStepperTable:
//!     .word 4800, 0000, 0000, 0000
//!     .word 0000, 0000, 4800, 0000
//!     ...
//!
//! EndPWMStepperTable:
//! ```

use std::fmt::Write as FmtWrite;

use crate::error::TableError;
use crate::model::TableEntry;

/// Alignment emitted ahead of the start label.
pub const TABLE_ALIGN: u32 = 256;

/// Default start label.
pub const DEFAULT_LABEL: &str = "PWMStepperTable";
/// Default end label.
pub const DEFAULT_END_LABEL: &str = "EndPWMStepperTable";
/// Default data directive (4-byte word).
pub const DEFAULT_WORD_DIRECTIVE: &str = ".word";
/// Default zero-pad width.
pub const DEFAULT_WIDTH: usize = 4;

/// Indentation of each data directive line.
const INDENT: &str = "    ";

/// Naming and layout options for [`to_asm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsmOptions {
    /// Label placed before the first entry.
    pub label: String,
    /// Label placed after the last entry.
    pub end_label: String,
    /// Data directive keyword, e.g. `.word` or `.hword`.
    pub word_directive: String,
    /// Every rail value is zero-padded to this many decimal digits.
    pub width: usize,
    /// Append an `@ idx=<i>` comment to each data line.
    pub annotate: bool,
}

impl Default for AsmOptions {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_owned(),
            end_label: DEFAULT_END_LABEL.to_owned(),
            word_directive: DEFAULT_WORD_DIRECTIVE.to_owned(),
            width: DEFAULT_WIDTH,
            annotate: false,
        }
    }
}

/// Renders `entries` as assembly source.
///
/// # Errors
///
/// Returns [`TableError::WidthOverflow`] for the first rail value whose
/// decimal form is longer than `options.width`.
pub fn to_asm(entries: &[TableEntry], options: &AsmOptions) -> Result<String, TableError> {
    check_width(entries, options.width)?;

    // ".align 256\n" + labels + one ~30 byte line per entry
    let mut out = String::with_capacity(64 + entries.len() * (24 + 4 * options.width));

    let _ = writeln!(out, ".align {TABLE_ALIGN}");
    let _ = writeln!(out, "{}:", options.label);
    for (idx, entry) in entries.iter().enumerate() {
        let [a, a_bar, b, b_bar] = entry.rails();
        let w = options.width;
        let _ = write!(
            out,
            "{INDENT}{} {a:0w$}, {a_bar:0w$}, {b:0w$}, {b_bar:0w$}",
            options.word_directive
        );
        if options.annotate {
            let _ = write!(out, " @ idx={idx}");
        }
        out.push('\n');
    }
    out.push('\n');
    let _ = writeln!(out, "{}:", options.end_label);

    tracing::debug!(
        entries = entries.len(),
        bytes = out.len(),
        label = %options.label,
        "rendered assembly table"
    );

    Ok(out)
}

fn check_width(entries: &[TableEntry], width: usize) -> Result<(), TableError> {
    for (index, entry) in entries.iter().enumerate() {
        if let Some(value) = entry.rails().into_iter().find(|v| digits(*v) > width) {
            return Err(TableError::WidthOverflow {
                index,
                value,
                width,
            });
        }
    }
    Ok(())
}

/// Number of decimal digits in `value` (`0` has one).
fn digits(value: u64) -> usize {
    value.checked_ilog10().map_or(1, |d| d as usize + 1)
}
