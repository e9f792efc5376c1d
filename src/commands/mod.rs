//! Command implementations for dsalgo

pub mod demo;
pub mod dispatch;
pub mod mst;
pub mod paths;
pub mod render;
pub mod sort;

use dsalgo_core::error::Result;

/// Print a serializable report as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
