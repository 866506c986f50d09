//! # Account Workflows
//!
//! Sign-up and passwordless login.
//!
//! ## Sign-up
//! ```text
//! sign_up(email)
//!      │
//!      ├── None / bad pattern ──► Ok(false)       (no email sent)
//!      │
//!      └── valid ──► EmailSender::send(email, welcome) ──► Ok(true)
//! ```
//!
//! ## Login
//! ```text
//! login(email)
//!      │
//!      ├── SecurityCodeGenerator::generate() ──► code
//!      └── EmailSender::send(email, code)    ──► Ok(())
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::collaborators::EmailMessage;
use crate::commerce::CommerceWorkflows;
use crate::error::WorkflowResult;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.-]+@[a-zA-Z\d.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// Basic email address check: `local@domain.tld`.
///
/// ```rust
/// use storefront_workflows::accounts::is_valid_email;
///
/// assert!(is_valid_email("name@domain.com"));
/// assert!(!is_valid_email("name@domain"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl CommerceWorkflows {
    /// Registers `email` and sends it a welcome message.
    ///
    /// Returns `Ok(false)` without side effects when no address is given or
    /// the address does not look like one.
    pub async fn sign_up(&self, email: Option<&str>) -> WorkflowResult<bool> {
        let email = match email {
            Some(email) if is_valid_email(email) => email,
            _ => {
                debug!("Rejected sign-up with invalid email");
                return Ok(false);
            }
        };

        let settings = &self.config.email;
        let message = EmailMessage::new(&settings.welcome_subject, &settings.welcome_body);
        self.collaborators.email.send(email, &message).await?;

        info!(email, "Registered new account");
        Ok(true)
    }

    /// Sends a freshly generated one-time code to `email`.
    ///
    /// The code is forwarded exactly as the generator produced it.
    pub async fn login(&self, email: &str) -> WorkflowResult<()> {
        let code = self.collaborators.security_codes.generate().await?;

        let message = EmailMessage::new(&self.config.email.login_subject, code.as_str());
        self.collaborators.email.send(email, &message).await?;

        info!(email, "Login code sent");
        Ok(())
    }
}
