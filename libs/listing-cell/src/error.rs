use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(err) => err.status().map(|s| s.as_u16()),
        }
    }
}
