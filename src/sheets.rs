//! Google Sheets access through the v4 REST API.

use reqwest::Client;
use reqwest::Response;
use serde::{Deserialize, Serialize};
use yup_oauth2::ServiceAccountAuthenticator;

use crate::config::CredentialSource;
use crate::error::UploadError;
use crate::extract::Cell;

const BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const SCOPES: &[&str] = &["https://www.googleapis.com/auth/spreadsheets"];

/// The remote side of an upload. Implemented over HTTP by [`GoogleSheets`].
#[allow(async_fn_in_trait)]
pub trait SheetService {
    async fn worksheet_titles(&self, spreadsheet_id: &str) -> Result<Vec<String>, UploadError>;

    /// Empties every cell in `range`, keeping formatting.
    async fn clear_values(&self, spreadsheet_id: &str, range: &str) -> Result<(), UploadError>;

    /// Overwrites `range` row by row, starting at its top-left cell.
    async fn update_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: &[Vec<Cell>],
    ) -> Result<(), UploadError>;
}

pub struct GoogleSheets {
    client: Client,
    token: String,
}

impl GoogleSheets {
    /// Loads the service account key and exchanges it for an access token.
    pub async fn connect(credentials: &CredentialSource) -> Result<Self, UploadError> {
        let key = credentials.load().await?;
        let auth = ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .map_err(UploadError::Authenticator)?;

        let token = auth.token(SCOPES).await?;
        if token.is_expired() {
            return Err(UploadError::TokenExpired);
        }
        let Some(token) = token.token() else {
            return Err(UploadError::EmptyToken);
        };
        if token.is_empty() {
            return Err(UploadError::EmptyToken);
        }

        Ok(Self {
            client: Client::new(),
            token: token.to_string(),
        })
    }

    fn values_url(spreadsheet_id: &str, range: &str) -> String {
        format!(
            "{}/{}/values/{}",
            BASE_URL,
            spreadsheet_id,
            urlencoding::encode(range)
        )
    }
}

async fn check_status(response: Response) -> Result<Response, UploadError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(UploadError::Status { status, body })
}

impl SheetService for GoogleSheets {
    async fn worksheet_titles(&self, spreadsheet_id: &str) -> Result<Vec<String>, UploadError> {
        #[derive(Deserialize)]
        struct Spreadsheet {
            #[serde(default)]
            sheets: Vec<Sheet>,
        }

        #[derive(Deserialize)]
        struct Sheet {
            properties: SheetProperties,
        }

        #[derive(Deserialize)]
        struct SheetProperties {
            title: String,
        }

        let response = self
            .client
            .get(format!("{}/{}", BASE_URL, spreadsheet_id))
            .bearer_auth(&self.token)
            .query(&[("fields", "sheets.properties.title")])
            .send()
            .await?;

        let spreadsheet: Spreadsheet = check_status(response).await?.json().await?;

        Ok(spreadsheet
            .sheets
            .into_iter()
            .map(|sheet| sheet.properties.title)
            .collect())
    }

    async fn clear_values(&self, spreadsheet_id: &str, range: &str) -> Result<(), UploadError> {
        let response = self
            .client
            .post(format!("{}:clear", Self::values_url(spreadsheet_id, range)))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }

    async fn update_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: &[Vec<Cell>],
    ) -> Result<(), UploadError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ValueRange<'a> {
            range: &'a str,
            major_dimension: &'static str,
            values: &'a [Vec<Cell>],
        }

        let response = self
            .client
            .put(Self::values_url(spreadsheet_id, range))
            .bearer_auth(&self.token)
            // RAW keeps marker labels such as "=== TEAM A ===" from being read as formulas.
            .query(&[("valueInputOption", "RAW")])
            .json(&ValueRange {
                range,
                major_dimension: "ROWS",
                values,
            })
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_percent_encoded() {
        assert_eq!(
            GoogleSheets::values_url("abc", "'Match 1'!A1:J18"),
            "https://sheets.googleapis.com/v4/spreadsheets/abc/values/%27Match%201%27%21A1%3AJ18"
        );
    }
}
