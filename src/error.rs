use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("expected a JSON object of players at the top level, found {0}")]
    NotAnObject(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Invalid Google Sheet link format: {0}")]
    InvalidSheetLink(String),
    #[error("no service account credentials configured (set GOOGLE_APPLICATION_CREDENTIALS or GOOGLE_SERVICE_ACCOUNT_JSON)")]
    MissingCredentials,
    #[error("failed to load service account key: {0}")]
    Credentials(#[source] io::Error),
    #[error("failed to set up the service account authenticator: {0}")]
    Authenticator(#[source] io::Error),
    #[error(transparent)]
    OAuth(#[from] yup_oauth2::Error),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("Google Sheets request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("empty token is not valid")]
    EmptyToken,
    #[error("OAuth token is expired")]
    TokenExpired,
    #[error("worksheet '{0}' not found")]
    WorksheetNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticator_setup_is_not_reported_as_key_loading() {
        let setup = UploadError::Authenticator(io::Error::other("no TLS roots"));
        let key = UploadError::Credentials(io::Error::other("missing field `private_key`"));

        assert_eq!(
            setup.to_string(),
            "failed to set up the service account authenticator: no TLS roots"
        );
        assert_eq!(
            key.to_string(),
            "failed to load service account key: missing field `private_key`"
        );
    }
}
