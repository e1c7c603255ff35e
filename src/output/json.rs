//! JSON rows
//!
//! ```json
//! [
//!   { "name": "netCDF4", "version": "1.3.1", "build": null }
//! ]
//! ```

use indexmap::IndexMap;

use crate::wheel::Row;

/// Pretty-printed array with one object per row; keys keep column order
pub fn rows(headers: &[&str], rows: &[Row<'_>]) -> Result<String, serde_json::Error> {
    let objects: Vec<IndexMap<&str, Option<&str>>> = rows
        .iter()
        .map(|row| headers.iter().copied().zip(row.iter().copied()).collect())
        .collect();

    let mut out = serde_json::to_string_pretty(&objects)?;
    out.push('\n');
    Ok(out)
}
