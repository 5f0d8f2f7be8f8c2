//! A1-notation helpers for addressing cells in a worksheet.

/// Extra rows included below the table so a smaller upload still covers the
/// previous one's footprint.
pub const ROW_BUFFER: usize = 5;

/// Converts a 1-based column index to its letter label: `1 → A`, `26 → Z`,
/// `27 → AA`. Returns `None` for `0`.
pub fn column_label(index: usize) -> Option<String> {
    if index == 0 {
        return None;
    }

    let mut remaining = index;
    let mut letters = Vec::new();
    while remaining > 0 {
        let digit = (remaining - 1) % 26;
        letters.push(b'A' + digit as u8);
        remaining = (remaining - 1) / 26;
    }
    letters.reverse();

    Some(letters.into_iter().map(char::from).collect())
}

/// Worksheet name quoted for use in a range.
pub fn quote_tab(tab: &str) -> String {
    format!("'{}'", tab.replace('\'', "''"))
}

/// The rectangle overwritten by a targeted upload: from `A1` through the last
/// column and `table_rows + ROW_BUFFER` rows down. `table_rows` counts the
/// assembled entries, not the header.
pub fn overwrite_range(tab: &str, table_rows: usize, columns: usize) -> String {
    let last_column = column_label(columns.max(1)).unwrap_or_else(|| "A".to_string());
    format!(
        "{}!A1:{}{}",
        quote_tab(tab),
        last_column,
        table_rows + ROW_BUFFER
    )
}

/// The whole worksheet.
pub fn whole_tab(tab: &str) -> String {
    quote_tab(tab)
}
