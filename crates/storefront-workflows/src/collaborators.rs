//! # Collaborators
//!
//! Narrow capability traits for every external service the workflows use.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Trait                    Call                         Answer           │
//! │  ───────────────────────  ───────────────────────────  ──────────────── │
//! │  ExchangeRateProvider     exchange_rate(currency)      ExchangeRate     │
//! │  ShippingQuoteProvider    quote(destination)           Option<Quote>    │
//! │  PaymentGateway           charge(card, amount)         ChargeResult     │
//! │  EmailSender              send(recipient, message)     ()               │
//! │  AnalyticsTracker         track_page_view(path)        ()               │
//! │  SecurityCodeGenerator    generate()                   SecurityCode     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Production code plugs real clients in; tests plug in recording doubles.
//! Nothing here is a global: every workflow gets its collaborators through
//! [`Collaborators`].

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use storefront_core::{ChargeResult, CreditCard, ExchangeRate, Money, ShippingQuote};

use crate::error::CollaboratorResult;

// =============================================================================
// Messages
// =============================================================================

/// An email handed to the [`EmailSender`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        EmailMessage {
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Returns true if subject or body contains `needle`, ignoring case.
    pub fn mentions(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.subject.to_lowercase().contains(&needle) || self.body.to_lowercase().contains(&needle)
    }
}

/// One-time code produced by the [`SecurityCodeGenerator`].
///
/// Opaque to the workflows: forwarded as produced. `Debug` hides the value
/// so codes do not leak into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityCode(String);

impl SecurityCode {
    pub fn new(code: impl Into<String>) -> Self {
        SecurityCode(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for SecurityCode {
    fn from(code: u32) -> Self {
        SecurityCode(code.to_string())
    }
}

impl fmt::Display for SecurityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for SecurityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecurityCode(***)")
    }
}

// =============================================================================
// Collaborator Traits
// =============================================================================

/// Looks up currency exchange rates.
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Rate from the store currency into `currency` (upper-case code).
    async fn exchange_rate(&self, currency: &str) -> CollaboratorResult<ExchangeRate>;
}

/// Quotes shipping for a destination.
#[async_trait]
pub trait ShippingQuoteProvider: Send + Sync {
    /// `Ok(None)` means no carrier serves `destination`.
    async fn quote(&self, destination: &str) -> CollaboratorResult<Option<ShippingQuote>>;
}

/// Charges payment cards.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, card: &CreditCard, amount: Money) -> CollaboratorResult<ChargeResult>;
}

/// Delivers email.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, recipient: &str, message: &EmailMessage) -> CollaboratorResult<()>;
}

/// Records page views.
#[async_trait]
pub trait AnalyticsTracker: Send + Sync {
    async fn track_page_view(&self, path: &str) -> CollaboratorResult<()>;
}

/// Produces one-time login codes.
#[async_trait]
pub trait SecurityCodeGenerator: Send + Sync {
    async fn generate(&self) -> CollaboratorResult<SecurityCode>;
}

// =============================================================================
// No-op Implementations
// =============================================================================

/// Analytics tracker that drops every event.
///
/// Useful where page views are not collected (local runs, previews).
pub struct NoOpAnalytics;

#[async_trait]
impl AnalyticsTracker for NoOpAnalytics {
    async fn track_page_view(&self, _path: &str) -> CollaboratorResult<()> {
        Ok(())
    }
}

// =============================================================================
// Collaborator Bundle
// =============================================================================

/// Every collaborator a [`crate::CommerceWorkflows`] needs.
#[derive(Clone)]
pub struct Collaborators {
    pub exchange_rates: Arc<dyn ExchangeRateProvider>,
    pub shipping: Arc<dyn ShippingQuoteProvider>,
    pub payments: Arc<dyn PaymentGateway>,
    pub email: Arc<dyn EmailSender>,
    pub analytics: Arc<dyn AnalyticsTracker>,
    pub security_codes: Arc<dyn SecurityCodeGenerator>,
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_mentions_is_case_insensitive() {
        let message = EmailMessage::new("Welcome aboard!", "Glad to have you");
        assert!(message.mentions("welcome"));
        assert!(message.mentions("GLAD"));
        assert!(!message.mentions("invoice"));
    }

    #[test]
    fn test_security_code_debug_is_hidden() {
        let code = SecurityCode::from(123_456);
        assert_eq!(code.as_str(), "123456");
        assert_eq!(code.to_string(), "123456");
        assert!(!format!("{:?}", code).contains("123456"));
    }

    #[tokio::test]
    async fn test_noop_analytics() {
        assert!(NoOpAnalytics.track_page_view("/home").await.is_ok());
    }
}
