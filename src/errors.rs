use thiserror::Error;

use crate::config::ENV_REPORTER_ID;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("you must supply a {} ENV variable or pass it via the -r flag", ENV_REPORTER_ID)]
    MissingReporterId,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error("response from {endpoint} was {status}: {body}")]
    UploadRejected {
        endpoint: String,
        status: u16,
        body: String,
    },
}

/// Custom result type
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn upload_rejected(endpoint: &str, status: u16, body: &str) -> Self {
        Self::UploadRejected {
            endpoint: endpoint.to_string(),
            status,
            body: body.to_string(),
        }
    }

    /// The endpoint answered, but with a status outside 2xx.
    pub fn is_remote_rejection(&self) -> bool {
        matches!(self, AppError::UploadRejected { .. })
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            AppError::Network(e) => e.is_timeout(),
            _ => false,
        }
    }
}
