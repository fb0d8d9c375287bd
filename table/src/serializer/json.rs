//! JSON serializer.
//!
//! Emits the table parameters alongside the raw rail values:
//!
//! ```json
//! {
//!   "count": 1,
//!   "amplitude": 4800,
//!   "rounding": "half-even",
//!   "entries": [[4800, 0, 0, 0], [0, 0, 4800, 0], [0, 4800, 0, 0], [0, 0, 0, 4800]]
//! }
//! ```

use serde_json::{json, Value};

use crate::error::TableError;
use crate::model::Table;

/// Serializes `table` to a JSON `Value`.
#[must_use]
pub fn to_json(table: &Table) -> Value {
    let entries: Vec<[u64; 4]> = table.iter().map(|e| e.rails()).collect();
    json!({
        "count": table.count(),
        "amplitude": table.amplitude(),
        "rounding": table.rounding(),
        "entries": entries
    })
}

/// Serializes `table` to a pretty-printed JSON document ending in a newline.
///
/// # Errors
///
/// Returns [`TableError::Json`] if serialization fails.
pub fn to_json_string(table: &Table) -> Result<String, TableError> {
    let mut out = serde_json::to_string_pretty(&to_json(table))?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate, generate_with, Rounding};

    #[test]
    fn carries_parameters() {
        let table = generate(3, 1200).unwrap();
        let json = to_json(&table);
        assert_eq!(json["count"], 3);
        assert_eq!(json["amplitude"], 1200);
        assert_eq!(json["rounding"], "half-even");
    }

    #[test]
    fn entries_are_rail_arrays() {
        let table = generate(1, 4800).unwrap();
        let json = to_json(&table);
        let entries = json["entries"].as_array().expect("entries must be array");
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], json!([4800, 0, 0, 0]));
        assert_eq!(entries[3], json!([0, 0, 0, 4800]));
    }

    #[test]
    fn rounding_uses_kebab_case() {
        let table = generate_with(2, 10, Rounding::HalfAwayFromZero).unwrap();
        assert_eq!(to_json(&table)["rounding"], "half-away-from-zero");
    }

    #[test]
    fn string_form_parses_back() {
        let table = generate(4, 4800).unwrap();
        let text = to_json_string(&table).unwrap();
        assert!(text.ends_with("}\n"));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, to_json(&table));
    }
}
