use thiserror::Error;

/// Error types for ShopMuse
#[derive(Error, Debug)]
pub enum ShopMuseError {
    // Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid configuration file: {path}")]
    InvalidConfig { path: String },

    // Catalog errors
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    #[error("Duplicate product id: {id}")]
    DuplicateProduct { id: u32 },

    // UI errors
    #[error("UI error: {message}")]
    Ui { message: String },

    // Generic errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ShopMuseError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a catalog error
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a UI error
    pub fn ui(message: impl Into<String>) -> Self {
        Self::Ui {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Configuration { .. } | Self::InvalidConfig { .. } => "configuration",
            Self::Catalog { .. } | Self::DuplicateProduct { .. } => "catalog",
            Self::Ui { .. } => "ui",
            Self::Internal { .. } => "internal",
        }
    }
}

/// Result type alias for ShopMuse
pub type ShopMuseResult<T> = std::result::Result<T, ShopMuseError>;

impl From<anyhow::Error> for ShopMuseError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}
