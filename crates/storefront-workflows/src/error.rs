//! # Workflow Error Types
//!
//! Error types for commerce workflows.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Workflow Error Categories                          │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Validation     │  │  Collaborator   │  │     Configuration       │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  bad currency   │  │  rate service   │  │  InvalidConfig          │ │
//! │  │  bad input      │  │  mail server    │  │  ConfigLoadFailed       │ │
//! │  │  (from core)    │  │  gateway down   │  │  ConfigSaveFailed       │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  NOT errors (returned as values):                                       │
//! │  • Shipping unavailable   → "Shipping Unavailable" message             │
//! │  • Payment declined       → OrderOutcome::Rejected(PaymentError)       │
//! │  • Invalid sign-up email  → Ok(false)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No workflow retries. A collaborator failure is reported once, as is.

use storefront_core::ValidationError;
use thiserror::Error;

/// Result type alias for workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Result type alias for collaborator calls.
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;

// =============================================================================
// Collaborator Error
// =============================================================================

/// A collaborator could not produce an answer.
///
/// Implementations of the collaborator traits return this when the backing
/// service is down, times out, or answers with garbage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{service} failed: {message}")]
pub struct CollaboratorError {
    /// Which collaborator failed (e.g. "payment gateway").
    pub service: &'static str,
    /// What went wrong.
    pub message: String,
}

impl CollaboratorError {
    pub fn new(service: &'static str, message: impl Into<String>) -> Self {
        CollaboratorError {
            service,
            message: message.into(),
        }
    }
}

// =============================================================================
// Workflow Error
// =============================================================================

/// Everything a workflow can fail with.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Input rejected by a core business rule.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An external collaborator failed.
    #[error("Collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),

    /// Invalid workflow configuration.
    #[error("Invalid workflow configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for WorkflowError {
    fn from(err: std::io::Error) -> Self {
        WorkflowError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for WorkflowError {
    fn from(err: toml::de::Error) -> Self {
        WorkflowError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for WorkflowError {
    fn from(err: toml::ser::Error) -> Self {
        WorkflowError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl WorkflowError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            WorkflowError::InvalidConfig(_)
                | WorkflowError::ConfigLoadFailed(_)
                | WorkflowError::ConfigSaveFailed(_)
        )
    }

    /// Returns the failing collaborator, if a collaborator caused this error.
    pub fn collaborator(&self) -> Option<&'static str> {
        match self {
            WorkflowError::Collaborator(err) => Some(err.service),
            _ => None,
        }
    }
}
