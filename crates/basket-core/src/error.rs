//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  basket-core errors (this file)                                        │
//! │  ├── CoreError        - Lifecycle / domain errors                      │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  basket-shell errors (app)                                             │
//! │  ├── ConfigError      - Bad BASKET_* environment values                │
//! │  └── ApiError         - What the presentation layer sees (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Presentation           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What is NOT an error
//! Unknown list or item ids. Every id-based store operation treats a miss as
//! a silent no-op (mutations) or an empty result (queries), so a stale screen
//! never crashes on a list that was just removed.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core lifecycle and domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The session store has not been started, or was already shut down.
    ///
    /// ## When This Occurs
    /// - A command runs before the composition root called `start`
    /// - A command runs after `shutdown` during process teardown
    #[error("Store is not initialized")]
    StoreNotInitialized,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the form parsing helpers in [`crate::validation`], never by the
/// store itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. "12,5a" for a price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
