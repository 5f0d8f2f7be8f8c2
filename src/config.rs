use lazy_regex::regex_captures;
use std::fmt;
use std::path::PathBuf;
use yup_oauth2::ServiceAccountKey;

use crate::error::UploadError;

pub const DEFAULT_TAB: &str = "Sheet1";
pub const CREDENTIALS_PATH_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";
pub const CREDENTIALS_JSON_VAR: &str = "GOOGLE_SERVICE_ACCOUNT_JSON";

/// Where an upload lands: a spreadsheet link plus the tab inside it.
#[derive(Debug, Clone)]
pub struct UploadTarget {
    pub sheet_link: String,
    pub tab_name: String,
}

impl UploadTarget {
    pub fn new(sheet_link: impl Into<String>, tab_name: impl Into<String>) -> Self {
        Self {
            sheet_link: sheet_link.into(),
            tab_name: tab_name.into(),
        }
    }

    pub fn spreadsheet_id(&self) -> Result<&str, UploadError> {
        spreadsheet_id(&self.sheet_link)
    }
}

/// Extracts the document id from a link like
/// `https://docs.google.com/spreadsheets/d/<id>/edit#gid=0`.
pub fn spreadsheet_id(link: &str) -> Result<&str, UploadError> {
    match regex_captures!(r"/d/([a-zA-Z0-9_-]+)", link) {
        Some((_, id)) => Ok(id),
        None => Err(UploadError::InvalidSheetLink(link.to_string())),
    }
}

/// Service account key material, either a JSON file or the JSON itself.
#[derive(Clone)]
pub enum CredentialSource {
    File(PathBuf),
    Inline(String),
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::File(path) => f.debug_tuple("File").field(path).finish(),
            CredentialSource::Inline(_) => f.write_str("Inline(<redacted>)"),
        }
    }
}

impl CredentialSource {
    /// An explicit path wins; otherwise the environment is consulted.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, UploadError> {
        Self::resolve_from(explicit, |name| std::env::var(name).ok())
    }

    /// Order: explicit path, inline JSON, then the key file variable. Blank
    /// values count as unset.
    pub fn resolve_from(
        explicit: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, UploadError> {
        if let Some(path) = explicit {
            return Ok(CredentialSource::File(path));
        }

        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(json) = lookup(CREDENTIALS_JSON_VAR) {
            return Ok(CredentialSource::Inline(json));
        }

        match lookup(CREDENTIALS_PATH_VAR) {
            Some(path) => Ok(CredentialSource::File(PathBuf::from(path))),
            None => Err(UploadError::MissingCredentials),
        }
    }

    pub async fn load(&self) -> Result<ServiceAccountKey, UploadError> {
        match self {
            CredentialSource::File(path) => yup_oauth2::read_service_account_key(path)
                .await
                .map_err(UploadError::Credentials),
            CredentialSource::Inline(json) => {
                yup_oauth2::parse_service_account_key(json).map_err(UploadError::Credentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINK: &str = "https://docs.google.com/spreadsheets/d/1JN_F8ZJ9FePn1OywSNuJrfPaBN8fP4W8W5gciIe0lLI/edit?gid=0#gid=0";

    #[test]
    fn extracts_id_from_link() {
        assert_eq!(
            spreadsheet_id(LINK).unwrap(),
            "1JN_F8ZJ9FePn1OywSNuJrfPaBN8fP4W8W5gciIe0lLI"
        );
        assert_eq!(spreadsheet_id("https://x/d/abc-DEF_1").unwrap(), "abc-DEF_1");
    }

    #[test]
    fn rejects_link_without_id() {
        assert!(matches!(
            spreadsheet_id("https://docs.google.com/spreadsheets/"),
            Err(UploadError::InvalidSheetLink(_))
        ));
    }

    #[test]
    fn inline_credentials_are_redacted() {
        let source = CredentialSource::Inline(r#"{"private_key": "secret"}"#.to_string());
        assert!(!format!("{:?}", source).contains("secret"));
    }

    #[test]
    fn explicit_path_wins() {
        let source = CredentialSource::resolve(Some(PathBuf::from("key.json"))).unwrap();
        assert!(matches!(
            source,
            CredentialSource::File(path) if path == PathBuf::from("key.json")
        ));
    }

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn inline_json_beats_key_file() {
        let vars = [
            (CREDENTIALS_JSON_VAR, r#"{"type": "service_account"}"#),
            (CREDENTIALS_PATH_VAR, "key.json"),
        ];
        let source = CredentialSource::resolve_from(None, env(&vars)).unwrap();
        assert!(matches!(
            source,
            CredentialSource::Inline(json) if json.contains("service_account")
        ));
    }

    #[test]
    fn blank_values_are_skipped() {
        let vars = [(CREDENTIALS_JSON_VAR, "   "), (CREDENTIALS_PATH_VAR, "key.json")];
        let source = CredentialSource::resolve_from(None, env(&vars)).unwrap();
        assert!(matches!(
            source,
            CredentialSource::File(path) if path == PathBuf::from("key.json")
        ));

        let vars = [(CREDENTIALS_JSON_VAR, ""), (CREDENTIALS_PATH_VAR, " \n")];
        assert!(matches!(
            CredentialSource::resolve_from(None, env(&vars)),
            Err(UploadError::MissingCredentials)
        ));
    }

    #[test]
    fn nothing_set_is_missing_credentials() {
        assert!(matches!(
            CredentialSource::resolve_from(None, env(&[])),
            Err(UploadError::MissingCredentials)
        ));

        let vars = [(CREDENTIALS_JSON_VAR, "{}")];
        let source =
            CredentialSource::resolve_from(Some(PathBuf::from("cli.json")), env(&vars)).unwrap();
        assert!(matches!(
            source,
            CredentialSource::File(path) if path == PathBuf::from("cli.json")
        ));
    }

    #[tokio::test]
    async fn malformed_inline_key_is_a_credentials_error() {
        let source = CredentialSource::Inline("{}".to_string());
        assert!(matches!(source.load().await, Err(UploadError::Credentials(_))));
    }
}
