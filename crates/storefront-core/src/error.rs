//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                     │
//! │  ├── CoreError        - Catalog loading / checkout guard failures       │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  storefront-session errors (separate crate)                             │
//! │  └── SessionError     - Config I/O, unknown product ids                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SessionError → UI                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart mutations, pricing and search never fail: unknown ids are no-ops and
//! malformed products get default options. The variants below only cover
//! loading data into the core and the checkout guard.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Catalog data could not be decoded.
    #[error("Invalid catalog data: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// Checkout was requested with nothing in the cart.
    ///
    /// ## User Workflow
    /// ```text
    /// Proceed to Checkout
    ///      │
    ///      ▼
    /// cart.is_empty()? ── yes ──► EmptyCart ──► UI: "Cart is empty"
    /// ```
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Duplicate value (e.g., duplicate product id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
