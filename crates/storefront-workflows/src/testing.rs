//! Recording test doubles for the collaborator traits.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use storefront_core::{ChargeResult, CreditCard, ExchangeRate, Money, ShippingQuote};
use tracing_subscriber::EnvFilter;

use crate::collaborators::{
    AnalyticsTracker, Collaborators, EmailMessage, EmailSender, ExchangeRateProvider,
    PaymentGateway, SecurityCode, SecurityCodeGenerator, ShippingQuoteProvider,
};
use crate::error::{CollaboratorError, CollaboratorResult};

static TRACING: Once = Once::new();

/// Installs a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("storefront_workflows=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

// =============================================================================
// Doubles
// =============================================================================

pub struct FixedRates {
    rate: ExchangeRate,
    pub requested: Mutex<Vec<String>>,
}

impl FixedRates {
    pub fn new(rate: ExchangeRate) -> Self {
        FixedRates {
            rate,
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ExchangeRateProvider for FixedRates {
    async fn exchange_rate(&self, currency: &str) -> CollaboratorResult<ExchangeRate> {
        self.requested.lock().unwrap().push(currency.to_string());
        Ok(self.rate)
    }
}

pub struct FixedQuote {
    quote: Option<ShippingQuote>,
    pub destinations: Mutex<Vec<String>>,
}

impl FixedQuote {
    pub fn new(quote: Option<ShippingQuote>) -> Self {
        FixedQuote {
            quote,
            destinations: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ShippingQuoteProvider for FixedQuote {
    async fn quote(&self, destination: &str) -> CollaboratorResult<Option<ShippingQuote>> {
        self.destinations.lock().unwrap().push(destination.to_string());
        Ok(self.quote)
    }
}

/// Gateway answering with queued results; fails once the queue is drained.
pub struct ScriptedGateway {
    results: Mutex<VecDeque<CollaboratorResult<ChargeResult>>>,
    pub charges: Mutex<Vec<(CreditCard, Money)>>,
}

impl ScriptedGateway {
    pub fn new(results: impl IntoIterator<Item = CollaboratorResult<ChargeResult>>) -> Self {
        ScriptedGateway {
            results: Mutex::new(results.into_iter().collect()),
            charges: Mutex::new(Vec::new()),
        }
    }

    pub fn answering(result: ChargeResult) -> Self {
        Self::new([Ok(result)])
    }
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    async fn charge(&self, card: &CreditCard, amount: Money) -> CollaboratorResult<ChargeResult> {
        self.charges.lock().unwrap().push((card.clone(), amount));
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CollaboratorError::new("payment gateway", "no scripted answer")))
    }
}

#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(String, EmailMessage)>>,
    pub fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        RecordingMailer {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(String, EmailMessage)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingMailer {
    async fn send(&self, recipient: &str, message: &EmailMessage) -> CollaboratorResult<()> {
        if self.fail {
            return Err(CollaboratorError::new("email sender", "smtp unavailable"));
        }
        self.sent
            .lock()
            .unwrap()
            .push((recipient.to_string(), message.clone()));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingAnalytics {
    pub views: Mutex<Vec<String>>,
}

#[async_trait]
impl AnalyticsTracker for RecordingAnalytics {
    async fn track_page_view(&self, path: &str) -> CollaboratorResult<()> {
        self.views.lock().unwrap().push(path.to_string());
        Ok(())
    }
}

pub struct FixedCode(pub SecurityCode);

#[async_trait]
impl SecurityCodeGenerator for FixedCode {
    async fn generate(&self) -> CollaboratorResult<SecurityCode> {
        Ok(self.0.clone())
    }
}

// =============================================================================
// Harness
// =============================================================================

/// Concrete handles to every double, alongside the bundle built from them.
pub struct Doubles {
    pub rates: Arc<FixedRates>,
    pub shipping: Arc<FixedQuote>,
    pub payments: Arc<ScriptedGateway>,
    pub mailer: Arc<RecordingMailer>,
    pub analytics: Arc<RecordingAnalytics>,
    pub codes: Arc<FixedCode>,
}

impl Default for Doubles {
    fn default() -> Self {
        Doubles {
            rates: Arc::new(FixedRates::new(ExchangeRate::from_ppm(1_500_000))),
            shipping: Arc::new(FixedQuote::new(None)),
            payments: Arc::new(ScriptedGateway::answering(ChargeResult::success())),
            mailer: Arc::new(RecordingMailer::default()),
            analytics: Arc::new(RecordingAnalytics::default()),
            codes: Arc::new(FixedCode(SecurityCode::from(123_456))),
        }
    }
}

impl Doubles {
    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            exchange_rates: self.rates.clone(),
            shipping: self.shipping.clone(),
            payments: self.payments.clone(),
            email: self.mailer.clone(),
            analytics: self.analytics.clone(),
            security_codes: self.codes.clone(),
        }
    }
}
