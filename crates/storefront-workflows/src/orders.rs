//! # Order Workflow
//!
//! ## Flow
//! ```text
//! submit_order(order, card)
//!      │
//!      ▼
//! PaymentGateway::charge(card, order.total_amount)
//!      │
//!      ├── Err(collaborator) ──► Err(WorkflowError::Collaborator)   (no retry)
//!      ├── status = success  ──► OrderOutcome::Accepted
//!      └── anything else     ──► OrderOutcome::Rejected(PaymentError)
//! ```

use storefront_core::{CreditCard, Order, OrderFailure, OrderOutcome};
use tracing::{debug, info, warn};

use crate::commerce::CommerceWorkflows;
use crate::error::WorkflowResult;

impl CommerceWorkflows {
    /// Charges `card` for the order total and maps the gateway's answer.
    ///
    /// A declined charge is a value ([`OrderOutcome::Rejected`]), not an
    /// error.
    pub async fn submit_order(
        &self,
        order: &Order,
        card: &CreditCard,
    ) -> WorkflowResult<OrderOutcome> {
        debug!(card = %card.masked(), amount = %order.total_amount, "Charging card");
        let result = self
            .collaborators
            .payments
            .charge(card, order.total_amount)
            .await?;

        if result.is_success() {
            info!(amount = %order.total_amount, "Order accepted");
            Ok(OrderOutcome::Accepted)
        } else {
            warn!(status = ?result.status, card = %card.masked(), "Payment rejected");
            Ok(OrderOutcome::Rejected(OrderFailure::PaymentError))
        }
    }
}
