//! # storefront-workflows: Commerce Workflows for Storefront
//!
//! Workflows that combine core business rules with external collaborators:
//! exchange rates, shipping quotes, payments, email, analytics, and one-time
//! security codes.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Workflow Architecture                            │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                 CommerceWorkflows (commerce.rs)                  │  │
//! │  │     holds Collaborators + WorkflowConfig, no mutable state       │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │     ┌──────────────┬──────────┴─────┬──────────────┐                    │
//! │     ▼              ▼                ▼              ▼                    │
//! │  ┌─────────┐  ┌──────────┐  ┌─────────────┐  ┌─────────┐               │
//! │  │ pricing │  │  orders  │  │  accounts   │  │  pages  │               │
//! │  │currency │  │ submit_  │  │ sign_up     │  │ render_ │               │
//! │  │shipping │  │ order    │  │ login       │  │ page    │               │
//! │  └─────────┘  └──────────┘  └─────────────┘  └─────────┘               │
//! │                                                                         │
//! │  Collaborators (collaborators.rs), all injected as Arc<dyn Trait>:     │
//! │  ExchangeRateProvider · ShippingQuoteProvider · PaymentGateway         │
//! │  EmailSender · AnalyticsTracker · SecurityCodeGenerator                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`commerce`] - `CommerceWorkflows` and its constructors
//! - [`collaborators`] - Collaborator traits and the `Collaborators` bundle
//! - [`config`] - Workflow configuration (TOML + env)
//! - [`error`] - Workflow error types
//! - [`pricing`] - `get_price_in_currency`, `get_shipping_info`
//! - [`orders`] - `submit_order`
//! - [`accounts`] - `sign_up`, `login`
//! - [`pages`] - `render_page`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_workflows::{Collaborators, CommerceWorkflows, WorkflowConfig};
//!
//! let collaborators = Collaborators {
//!     exchange_rates: Arc::new(rates_client),
//!     shipping: Arc::new(shipping_client),
//!     payments: Arc::new(gateway),
//!     email: Arc::new(mailer),
//!     analytics: Arc::new(analytics),
//!     security_codes: Arc::new(otp),
//! };
//! let workflows = CommerceWorkflows::with_config(collaborators, WorkflowConfig::load_or_default(None))?;
//!
//! let signed_up = workflows.sign_up(Some("name@domain.com")).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod accounts;
pub mod collaborators;
pub mod commerce;
pub mod config;
pub mod error;
pub mod orders;
pub mod pages;
pub mod pricing;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use accounts::is_valid_email;
pub use collaborators::{
    AnalyticsTracker, Collaborators, EmailMessage, EmailSender, ExchangeRateProvider,
    NoOpAnalytics, PaymentGateway, SecurityCode, SecurityCodeGenerator, ShippingQuoteProvider,
};
pub use commerce::CommerceWorkflows;
pub use config::WorkflowConfig;
pub use error::{CollaboratorError, CollaboratorResult, WorkflowError, WorkflowResult};
