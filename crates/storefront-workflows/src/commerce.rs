//! # Commerce Workflows
//!
//! The entry point tying collaborators and configuration together.
//!
//! ## Call Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  caller ──► CommerceWorkflows::op(..).await                             │
//! │                  │                                                      │
//! │                  ├── core rule checks (pure, no await)                  │
//! │                  ├── collaborator call #1 ──► await                     │
//! │                  ├── collaborator call #2 ──► await  (strictly after)   │
//! │                  └── map answer to result value                         │
//! │                                                                         │
//! │  No spawned tasks, no locks, no shared mutable state between calls.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operations are spread across sibling modules by concern:
//! [`crate::pricing`], [`crate::orders`], [`crate::accounts`],
//! [`crate::pages`].

use crate::collaborators::Collaborators;
use crate::config::WorkflowConfig;
use crate::error::WorkflowResult;

/// Storefront workflows over injected collaborators.
///
/// Cheap to share behind an `Arc`: every collaborator is `Send + Sync` and
/// no operation mutates the struct.
#[derive(Debug, Clone)]
pub struct CommerceWorkflows {
    pub(crate) collaborators: Collaborators,
    pub(crate) config: WorkflowConfig,
}

impl CommerceWorkflows {
    /// Creates workflows with the default configuration.
    pub fn new(collaborators: Collaborators) -> Self {
        CommerceWorkflows {
            collaborators,
            config: WorkflowConfig::default(),
        }
    }

    /// Creates workflows with an explicit configuration.
    ///
    /// The configuration is validated first, so welcome emails and the
    /// unavailable-shipping message keep their required wording.
    pub fn with_config(
        collaborators: Collaborators,
        config: WorkflowConfig,
    ) -> WorkflowResult<Self> {
        config.validate()?;
        Ok(CommerceWorkflows {
            collaborators,
            config,
        })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }
}
