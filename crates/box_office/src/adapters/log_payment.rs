// Rust guideline compliant 2026-10-16

//! Demo adapter for the `TicketPaymentService` port.
//!
//! Logs each charge via `tracing::info!` and always returns `Ok(())`.
//! `PaymentError::Declined` is unreachable in this demo adapter.

use domain::{AccountId, PaymentError, TicketPaymentService};

/// `TicketPaymentService` adapter that emits an info log per charge.
///
/// Always returns `Ok(())`; plug in a real gateway client for production.
#[derive(Debug)]
pub struct LogPaymentService;

impl LogPaymentService {
    /// Create a new log payment adapter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogPaymentService {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketPaymentService for LogPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError> {
        tracing::info!(%account_id, amount, "log_payment.make_payment");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::LogPaymentService;
    use domain::{AccountId, TicketPaymentService as _};

    #[test]
    fn always_accepts() {
        let account = AccountId::new(12).unwrap();
        assert!(LogPaymentService::new().make_payment(account, 0).is_ok());
        assert!(LogPaymentService::default().make_payment(account, 625).is_ok());
    }
}
