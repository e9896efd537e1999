//! # Session Error Type
//!
//! Unified error type for session commands and configuration.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI                          Session                                    │
//! │  ──                          ───────                                    │
//! │                                                                         │
//! │  add_to_cart("42")  ──►  catalog lookup ── missing ──► ProductNotFound  │
//! │                                                                         │
//! │  review_checkout()  ──►  ensure_checkout_ready ──────► Core(EmptyCart)  │
//! │                                                                         │
//! │  StoreConfig::load  ──►  read / parse / validate ────► Io / ConfigParse │
//! │                                                        / InvalidConfig  │
//! │                                                                         │
//! │  Every variant carries a `code()` for programmatic handling in the UI.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_core::CoreError;
use thiserror::Error;

/// Errors raised by the session layer.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A command referenced a product id the catalog does not contain.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Core error (catalog data, checkout guard).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file could not be parsed.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be serialized.
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// No location available to save the config.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    /// File system error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// Machine-readable code for the UI.
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::ProductNotFound(_) => "NOT_FOUND",
            SessionError::Core(CoreError::EmptyCart) => "CART_EMPTY",
            SessionError::Core(_) => "VALIDATION_ERROR",
            SessionError::InvalidConfig(_)
            | SessionError::ConfigParse(_)
            | SessionError::ConfigSerialize(_)
            | SessionError::ConfigSaveFailed(_) => "CONFIG_ERROR",
            SessionError::Io(_) => "INTERNAL",
        }
    }
}

/// Convenience type alias for session results.
pub type SessionResult<T> = Result<T, SessionError>;
