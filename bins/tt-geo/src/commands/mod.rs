//! CLI command implementations

pub mod bounds;
pub mod format;
pub mod measure;
pub mod nearest;
pub mod validate;

use anyhow::Result;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
