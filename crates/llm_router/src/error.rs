/// Error types for connector operations
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Remote call failed: transport error, non-success status, or a
    /// response body missing the expected fields.
    #[error("error requesting the completions API: {0}")]
    Remote(String),
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        ConnectorError::Remote(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConnectorError>;
