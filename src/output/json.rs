//! JSON output.

use crate::error::CidrError;
use serde::Serialize;
use serde_json::{json, Value};
use std::io::{self, Write};

/// Pretty-print `value` as a single JSON document.
pub fn write_json<W: Write + ?Sized, T: Serialize + ?Sized>(w: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)
}

/// Turn batch results into a JSON array, failed items as `{"error": ...}`.
pub fn batch_to_json<T: Serialize>(items: &[Result<T, CidrError>]) -> serde_json::Result<Value> {
    items
        .iter()
        .map(|item| match item {
            Ok(value) => serde_json::to_value(value),
            Err(e) => Ok(json!({ "error": e.to_string() })),
        })
        .collect()
}
