//! # Session Error Type
//!
//! Unified error type for session commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Basket                                 │
//! │                                                                         │
//! │  Frontend                      Session Layer                            │
//! │  ────────                      ─────────────                            │
//! │                                                                         │
//! │  dispatch('addToCart')                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, SessionError>                                         │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown product? ──── SessionError::ProductNotFound ──────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Invalid catalog input? ── ValidationError ── (wrapped) ───────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Most cart-level oddities (unknown id on remove, quantity ≤ 0) are     │
//! │  NOT errors: the pure core treats them as no-ops or removal. Errors    │
//! │  here are reserved for broken wiring (uninitialized session) and for   │
//! │  admin input that must not enter the catalog.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use basket_core::ValidationError;
use thiserror::Error;

/// Errors surfaced to the presentation layer by session commands.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session cell was read before `initialize` ran.
    ///
    /// This is a wiring bug in the caller, not a user-facing condition:
    /// the page must build its session before dispatching any intent.
    #[error("session accessed before initialization")]
    NotInitialized,

    /// A cart command referenced a product id the catalog doesn't know.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// Admin input failed validation and was rejected.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with SessionError.
pub type SessionResult<T> = Result<T, SessionError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SessionError::NotInitialized.to_string(),
            "session accessed before initialization"
        );
        assert_eq!(
            SessionError::ProductNotFound("p9".to_string()).to_string(),
            "product not found: p9"
        );
    }

    #[test]
    fn test_validation_converts_to_session_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let err: SessionError = validation_err.into();
        assert!(matches!(err, SessionError::Validation(_)));
    }
}
