//! # Pricing Workflows
//!
//! Currency conversion and shipping quotes.

use storefront_core::{Money, ValidationError};
use tracing::{debug, warn};

use crate::commerce::CommerceWorkflows;
use crate::error::WorkflowResult;

impl CommerceWorkflows {
    /// Converts `amount` into `target_currency` using the exchange-rate
    /// collaborator.
    ///
    /// The currency code is trimmed and upper-cased before the lookup.
    /// Once the rate is known this is plain arithmetic (see
    /// [`Money::convert`]); a result too large for [`Money`] is an
    /// `invalid_price` validation error.
    pub async fn get_price_in_currency(
        &self,
        amount: Money,
        target_currency: &str,
    ) -> WorkflowResult<Money> {
        let currency = target_currency.trim().to_uppercase();
        if currency.is_empty() {
            return Err(ValidationError::InvalidArgument {
                reason: "target currency is required".to_string(),
            }
            .into());
        }

        debug!(%currency, "Requesting exchange rate");
        let rate = self
            .collaborators
            .exchange_rates
            .exchange_rate(&currency)
            .await?;

        let converted = amount
            .convert(rate)
            .ok_or_else(|| ValidationError::InvalidPrice {
                reason: format!("{} in {} is out of range", amount, currency),
            })?;
        debug!(%currency, rate = rate.rate(), %amount, %converted, "Converted price");
        Ok(converted)
    }

    /// Describes shipping to `destination`.
    ///
    /// ## Output
    /// ```text
    /// quote = None                         → "Shipping Unavailable"
    /// quote = { cost: $10.00, days: 2 }    → "Shipping Cost: $10.00 (2 Days)"
    /// ```
    pub async fn get_shipping_info(&self, destination: &str) -> WorkflowResult<String> {
        debug!(destination, "Requesting shipping quote");
        let quote = self.collaborators.shipping.quote(destination).await?;

        match quote {
            Some(quote) => Ok(format!(
                "Shipping Cost: {} ({} Days)",
                quote.cost, quote.estimated_days
            )),
            None => {
                warn!(destination, "No shipping quote available");
                Ok(self.config.shipping.unavailable_message.clone())
            }
        }
    }
}
