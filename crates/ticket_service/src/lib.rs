// Rust guideline compliant 2026-10-16

//! Ticket purchase pipeline for the venue.
//!
//! [`TicketService`] validates a purchase, prices it, and then delegates to the
//! injected `domain::TicketPaymentService` and `domain::SeatReservationService`
//! ports. All validation precedes both side effects, so a rejected purchase
//! never reaches either collaborator.
//!
//! Entry point: [`TicketService::purchase_tickets`]. Configuration via
//! [`TicketServiceConfig::builder`].

use domain::{
    AccountId, PaymentError, ReservationError, SeatReservationService, TicketCategory,
    TicketCounts, TicketPaymentService, TicketTypeRequest,
};

/// Default upper bound on tickets per purchase.
pub const DEFAULT_MAX_TICKETS: u32 = 25;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A purchase precondition or business rule that failed.
///
/// The `Display` text of each variant is the message shown to the purchaser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPurchase {
    /// Account id was zero or negative.
    #[error("Account ID must be a positive integer")]
    InvalidAccountId,
    /// No ticket requests were supplied.
    #[error("At least one ticket type request is required")]
    NoTicketRequests,
    /// Ticket total exceeds the configured maximum.
    #[error("Cannot purchase more than {max} tickets at once")]
    TooManyTickets {
        /// Configured maximum.
        max: u32,
    },
    /// Child or infant tickets without any adult ticket.
    #[error("Child and Infant tickets cannot be purchased without Adult tickets")]
    UnaccompaniedMinors,
    /// Every request had quantity zero.
    #[error("Must purchase at least one ticket")]
    NoTickets,
}

/// Errors returned by [`TicketService::purchase_tickets`].
#[derive(Debug, thiserror::Error)]
pub enum PurchaseError {
    /// Validation failed; no collaborator was called.
    #[error(transparent)]
    Invalid(#[from] InvalidPurchase),
    /// The payment gateway refused the charge; no seats were reserved.
    #[error("payment failed: {source}")]
    PaymentFailed {
        /// The underlying gateway error.
        source: PaymentError,
    },
    /// Seats could not be reserved after the payment went through.
    #[error("seat reservation failed after charging {amount_charged}: {source}")]
    ReservationFailed {
        /// Amount already taken by the payment gateway.
        amount_charged: u64,
        /// The underlying reservation error.
        source: ReservationError,
    },
    /// The supplied configuration is invalid.
    #[error("invalid ticket service configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// PriceTable
// ---------------------------------------------------------------------------

/// Unit price per category, in whole pounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTable {
    /// Adult unit price.
    pub adult: u64,
    /// Child unit price.
    pub child: u64,
    /// Infant unit price.
    pub infant: u64,
}

impl PriceTable {
    /// Unit price for `category`.
    #[must_use]
    pub const fn price_of(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }

    /// Sum of `count * unit price` over all categories, saturating.
    #[must_use]
    pub fn total_for(&self, counts: &TicketCounts) -> u64 {
        TicketCategory::ALL.into_iter().fold(0u64, |total, category| {
            let line = counts.get(category).saturating_mul(self.price_of(category));
            total.saturating_add(line)
        })
    }
}

impl Default for PriceTable {
    /// Standard venue prices: adults 25, children 15, infants free.
    fn default() -> Self {
        Self { adult: 25, child: 15, infant: 0 }
    }
}

// ---------------------------------------------------------------------------
// TicketServiceConfig + builder
// ---------------------------------------------------------------------------

/// Runtime configuration for a [`TicketService`].
///
/// Construct via [`TicketServiceConfig::builder`], or use `Default` for the
/// standard venue rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketServiceConfig {
    /// Maximum tickets across all categories in one purchase.
    pub max_tickets: u32,
    /// Unit prices applied to every purchase.
    pub prices: PriceTable,
}

/// Builder for [`TicketServiceConfig`].
///
/// Obtain via [`TicketServiceConfig::builder`]; finalize with [`build`](Self::build).
#[derive(Debug)]
pub struct TicketServiceConfigBuilder {
    max_tickets: u32,
    prices: PriceTable,
}

impl TicketServiceConfig {
    /// Create a builder.
    ///
    /// Default values: `max_tickets = 25`, `prices = PriceTable::default()`.
    #[must_use]
    pub fn builder() -> TicketServiceConfigBuilder {
        TicketServiceConfigBuilder {
            max_tickets: DEFAULT_MAX_TICKETS,
            prices: PriceTable::default(),
        }
    }
}

impl Default for TicketServiceConfig {
    fn default() -> Self {
        Self { max_tickets: DEFAULT_MAX_TICKETS, prices: PriceTable::default() }
    }
}

impl TicketServiceConfigBuilder {
    /// Override the per-purchase ticket limit.
    #[must_use]
    pub fn max_tickets(mut self, max_tickets: u32) -> Self {
        self.max_tickets = max_tickets;
        self
    }

    /// Override the price table.
    #[must_use]
    pub fn prices(mut self, prices: PriceTable) -> Self {
        self.prices = prices;
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidConfig`] when `max_tickets` is zero.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<TicketServiceConfig, PurchaseError> {
        if self.max_tickets == 0 {
            return Err(PurchaseError::InvalidConfig {
                reason: "max_tickets must be >= 1".to_owned(),
            });
        }
        Ok(TicketServiceConfig { max_tickets: self.max_tickets, prices: self.prices })
    }
}

// ---------------------------------------------------------------------------
// TicketService
// ---------------------------------------------------------------------------

/// Outcome of a successful purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseSummary {
    /// Validated purchaser.
    pub account_id: AccountId,
    /// Tickets per category after accumulation.
    pub counts: TicketCounts,
    /// Amount charged, in whole pounds.
    pub total_amount: u64,
    /// Seats reserved; zero means no reservation call was made.
    pub total_seats: u32,
}

/// Validates and processes ticket purchases.
///
/// Generic over the two outbound ports for zero-cost static dispatch. Holds
/// only immutable configuration and the collaborator handles, so every call to
/// [`purchase_tickets`](Self::purchase_tickets) is independent.
#[derive(Debug)]
pub struct TicketService<P: TicketPaymentService, R: SeatReservationService> {
    config: TicketServiceConfig,
    payment: P,
    reservation: R,
}

impl<P: TicketPaymentService, R: SeatReservationService> TicketService<P, R> {
    /// Create a service with the standard venue rules.
    #[must_use]
    pub fn new(payment: P, reservation: R) -> Self {
        Self::with_config(TicketServiceConfig::default(), payment, reservation)
    }

    /// Create a service from an explicit `config`.
    #[must_use]
    pub fn with_config(config: TicketServiceConfig, payment: P, reservation: R) -> Self {
        Self { config, payment, reservation }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &TicketServiceConfig {
        &self.config
    }

    /// Validate, price and process one purchase.
    ///
    /// On success the payment port is called exactly once with the total
    /// amount, then the reservation port once with the seat count (skipped
    /// when no seat is needed).
    ///
    /// # Errors
    ///
    /// - [`PurchaseError::Invalid`] when any precondition or business rule
    ///   fails; neither collaborator is called.
    /// - [`PurchaseError::PaymentFailed`] when the gateway refuses the charge.
    /// - [`PurchaseError::ReservationFailed`] when seats cannot be held after
    ///   payment. The charge is not reversed.
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, PurchaseError> {
        let summary = self.prepare(account_id, requests).inspect_err(|reason| {
            tracing::warn!(account_id, %reason, "ticket_service.purchase.rejected");
        })?;

        self.payment
            .make_payment(summary.account_id, summary.total_amount)
            .map_err(|source| {
                tracing::error!(account_id, %source, "ticket_service.payment.failed");
                PurchaseError::PaymentFailed { source }
            })?;

        if summary.total_seats > 0 {
            self.reservation
                .reserve_seat(summary.account_id, summary.total_seats)
                .map_err(|source| {
                    tracing::error!(account_id, %source, "ticket_service.reservation.failed");
                    PurchaseError::ReservationFailed {
                        amount_charged: summary.total_amount,
                        source,
                    }
                })?;
        }

        tracing::info!(
            account_id,
            total_amount = summary.total_amount,
            total_seats = summary.total_seats,
            "ticket_service.purchase.completed"
        );
        Ok(summary)
    }

    /// Run every validation stage and compute the totals, without side effects.
    fn prepare(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, InvalidPurchase> {
        let account_id = AccountId::new(account_id).ok_or(InvalidPurchase::InvalidAccountId)?;
        if requests.is_empty() {
            return Err(InvalidPurchase::NoTicketRequests);
        }

        let counts = TicketCounts::from_requests(requests);
        let total_amount = self.config.prices.total_for(&counts);
        let seats = counts.seats();
        tracing::debug!(
            adult = counts.adult,
            child = counts.child,
            infant = counts.infant,
            "ticket_service.purchase.aggregated"
        );

        self.check_business_rules(&counts)?;

        // Bounded by `max_tickets` once the limit gate has passed.
        let Ok(total_seats) = u32::try_from(seats) else {
            return Err(InvalidPurchase::TooManyTickets { max: self.config.max_tickets });
        };

        Ok(PurchaseSummary { account_id, counts, total_amount, total_seats })
    }

    /// Gates are checked in order; the first failure wins.
    fn check_business_rules(&self, counts: &TicketCounts) -> Result<(), InvalidPurchase> {
        let total = counts.total();
        if total > u64::from(self.config.max_tickets) {
            return Err(InvalidPurchase::TooManyTickets { max: self.config.max_tickets });
        }
        if (counts.child > 0 || counts.infant > 0) && counts.adult == 0 {
            return Err(InvalidPurchase::UnaccompaniedMinors);
        }
        if total == 0 {
            return Err(InvalidPurchase::NoTickets);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
