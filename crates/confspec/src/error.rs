//! Error types for confspec

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing required config field '{field}'")]
    MissingField { field: String },

    #[error("Field '{field}' could not be converted to {target}: {message}")]
    Conversion {
        field: String,
        target: &'static str,
        message: String,
    },

    #[error("Invalid definition for field '{field}': {message}")]
    Definition { field: String, message: String },

    #[error("Configuration rejected: {message}")]
    PostValidation { message: String },
}

impl Error {
    /// The name of the field this error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::MissingField { field }
            | Error::Conversion { field, .. }
            | Error::Definition { field, .. } => Some(field),
            Error::PostValidation { .. } => None,
        }
    }
}
