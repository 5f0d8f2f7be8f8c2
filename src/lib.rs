pub mod a1;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod layout;
pub mod preview;
pub mod sheets;
pub mod table;
pub mod upload;

use std::path::Path;

use crate::error::ParseError;
use crate::layout::Layout;
use crate::table::Table;

/// Reads a match file and builds the sorted, grouped table for it.
pub fn load_table(path: &Path, layout: Layout) -> Result<Table, ParseError> {
    let players = extract::read_match_file(path)?;
    Ok(Table::assemble(&players, layout))
}
