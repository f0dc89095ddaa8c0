use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("class not found: {class_id}")]
    ClassNotFound { class_id: String },

    #[error("store request failed: {0}")]
    StoreTransportError(#[from] reqwest::Error),

    #[error("store query failed: {message}")]
    StoreQueryError { message: String },

    #[error("document decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("config file parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

impl RosterError {
    pub fn store_query(message: impl Into<String>) -> Self {
        RosterError::StoreQueryError {
            message: message.into(),
        }
    }

    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        RosterError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
