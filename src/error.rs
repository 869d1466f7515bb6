use thiserror::Error;

/// Failure taxonomy for the export pipeline. Configuration, credential,
/// authorization, transient service and data contract failures each get
/// their own variant with enough context to act on.
#[derive(Error, Debug)]
pub enum ExporterError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Credential error for key file '{key_file_path}': {message}")]
    Credential {
        key_file_path: String,
        message: String,
    },

    #[error("Permission denied on property '{property_id}': {message}")]
    Authorization {
        property_id: String,
        message: String,
    },

    #[error("Invalid report request: {message}")]
    InvalidRequest { message: String },

    #[error("Analytics Data API call failed: {message}")]
    Service { message: String },

    #[error("Row {row_index} has {actual} values where the header has {expected} columns")]
    RowShape {
        row_index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to write report to '{path}': {source}")]
    OutputIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExporterError {
    pub fn config(message: impl Into<String>) -> Self {
        ExporterError::Config {
            message: message.into(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        ExporterError::Service {
            message: message.into(),
        }
    }
}
