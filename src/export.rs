use csv::Writer;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::table::Table;

/// Writes exactly what an upload would send: the header row, then every
/// table entry.
pub fn export_csv(table: &Table, out_file: &Path) -> Result<usize, Box<dyn Error>> {
    if let Some(parent) = out_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = Writer::from_path(out_file)?;
    let values = table.values();

    for row in &values {
        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }

    writer.flush()?;
    Ok(values.len())
}
