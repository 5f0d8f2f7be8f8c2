use clap::ValueEnum;

use crate::a1;
use crate::config::{CredentialSource, UploadTarget};
use crate::error::UploadError;
use crate::sheets::{GoogleSheets, SheetService};
use crate::table::Table;

/// How an upload replaces what is already in the tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum WriteStrategy {
    /// Overwrite `A1` through the table's footprint plus a few buffer rows.
    /// Anything further down, or stale rows past the buffer, is left alone.
    #[default]
    TargetedRange,
    /// Clear the whole tab, then write from `A1`.
    FullClear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReport {
    pub tab_name: String,
    pub range: String,
    pub rows_written: usize,
    pub strategy: WriteStrategy,
}

/// Connects with the given credentials and writes the table.
pub async fn upload_to_google(
    table: &Table,
    target: &UploadTarget,
    credentials: &CredentialSource,
    strategy: WriteStrategy,
) -> Result<UploadReport, UploadError> {
    let sheets = GoogleSheets::connect(credentials).await?;
    upload(&sheets, table, target, strategy).await
}

/// Writes the header and every table entry to the target tab.
///
/// The spreadsheet id is read from the link on every call. Nothing is retried:
/// a failure after a full clear leaves the tab empty.
pub async fn upload<S: SheetService>(
    service: &S,
    table: &Table,
    target: &UploadTarget,
    strategy: WriteStrategy,
) -> Result<UploadReport, UploadError> {
    let spreadsheet_id = target.spreadsheet_id()?;
    let tab = target.tab_name.as_str();

    let titles = service.worksheet_titles(spreadsheet_id).await?;
    if !titles.iter().any(|title| title == tab) {
        return Err(UploadError::WorksheetNotFound(tab.to_string()));
    }

    let values = table.values();
    let range = match strategy {
        WriteStrategy::TargetedRange => {
            a1::overwrite_range(tab, values.len() - 1, table.column_count())
        }
        WriteStrategy::FullClear => {
            log::info!("Clearing worksheet '{}'", tab);
            service
                .clear_values(spreadsheet_id, &a1::whole_tab(tab))
                .await?;
            format!("{}!A1", a1::quote_tab(tab))
        }
    };

    log::info!("Writing {} rows to {}", values.len(), range);
    service
        .update_values(spreadsheet_id, &range, &values)
        .await?;

    Ok(UploadReport {
        tab_name: tab.to_string(),
        range,
        rows_written: values.len(),
        strategy,
    })
}
