// Rust guideline compliant 2026-10-16

//! Demo adapter for the `SeatReservationService` port.
//!
//! Logs each reservation via `tracing::info!` and always returns `Ok(())`.

use domain::{AccountId, ReservationError, SeatReservationService};

/// `SeatReservationService` adapter that emits an info log per reservation.
#[derive(Debug)]
pub struct LogSeatReservationService;

impl LogSeatReservationService {
    /// Create a new log reservation adapter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogSeatReservationService {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatReservationService for LogSeatReservationService {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        seat_count: u32,
    ) -> Result<(), ReservationError> {
        tracing::info!(%account_id, seat_count, "log_seat_reservation.reserve_seat");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::LogSeatReservationService;
    use domain::{AccountId, SeatReservationService as _};

    #[test]
    fn always_reserves() {
        let account = AccountId::new(3).unwrap();
        assert!(LogSeatReservationService::new().reserve_seat(account, 25).is_ok());
    }
}
