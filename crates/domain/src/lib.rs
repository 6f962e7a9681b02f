// Rust guideline compliant 2026-10-16

//! Shared domain types for the venue ticket service.
//!
//! Defines the ticket value objects (`TicketCategory`, `TicketTypeRequest`,
//! `AccountId`, `TicketCounts`), the `TicketRequestError` raised while building
//! requests, and the hexagonal port traits `TicketPaymentService` and
//! `SeatReservationService`. No other workspace crate is imported here.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while constructing a [`TicketTypeRequest`] from untyped input.
///
/// These indicate a caller programming error and are never recovered from by
/// the ticket service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicketRequestError {
    /// Category is not one of `ADULT`, `CHILD`, `INFANT`.
    #[error("unknown ticket category: {value:?}")]
    UnknownCategory {
        /// The rejected input.
        value: String,
    },
    /// Quantity is negative, fractional, non-numeric or out of range.
    #[error("ticket quantity must be a non-negative integer, got {value:?}")]
    InvalidQuantity {
        /// The rejected input.
        value: String,
    },
    /// Input is not in `CATEGORY:QUANTITY` form.
    #[error("expected CATEGORY:QUANTITY, got {value:?}")]
    Malformed {
        /// The rejected input.
        value: String,
    },
}

/// Errors from the payment hexagonal port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    /// The gateway refused the charge.
    #[error("payment declined: {reason}")]
    Declined {
        /// Human-readable description.
        reason: String,
    },
}

/// Errors from the seat-reservation hexagonal port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    /// Seats could not be reserved.
    #[error("seat reservation unavailable: {reason}")]
    Unavailable {
        /// Human-readable description.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// TicketCategory
// ---------------------------------------------------------------------------

/// Closed set of ticket categories sold by the venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketCategory {
    /// Full-price ticket; required for any purchase including minors.
    Adult,
    /// Reduced-price ticket with a seat.
    Child,
    /// Free ticket; sits on an adult's lap.
    Infant,
}

impl TicketCategory {
    /// All categories in canonical order.
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Wire name (`ADULT`, `CHILD`, `INFANT`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }

    /// Whether a ticket of this category consumes a seat.
    #[must_use]
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, Self::Infant)
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketCategory {
    type Err = TicketRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TicketRequestError::UnknownCategory { value: s.to_owned() })
    }
}

// ---------------------------------------------------------------------------
// TicketTypeRequest
// ---------------------------------------------------------------------------

/// Immutable pairing of a ticket category with a quantity.
///
/// Fields are private; once built a request cannot be changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketTypeRequest {
    category: TicketCategory,
    quantity: u64,
}

impl TicketTypeRequest {
    /// Create a request from already-typed parts.
    #[must_use]
    pub const fn new(category: TicketCategory, quantity: u64) -> Self {
        Self { category, quantity }
    }

    /// Create a request from a signed quantity.
    ///
    /// # Errors
    ///
    /// Returns [`TicketRequestError::InvalidQuantity`] when `quantity` is
    /// negative. No upper bound is enforced here; oversized purchases are
    /// rejected by the ticket service's limit.
    pub fn try_new(category: TicketCategory, quantity: i64) -> Result<Self, TicketRequestError> {
        let Ok(quantity) = u64::try_from(quantity) else {
            return Err(TicketRequestError::InvalidQuantity { value: quantity.to_string() });
        };
        Ok(Self::new(category, quantity))
    }

    /// Create a request from untyped category and quantity strings.
    ///
    /// `quantity` must be a plain non-negative integer made only of ASCII
    /// digits: `"1.5"`, `"-1"`, `"+2"` and `"two"` are all rejected, as is
    /// anything beyond `u64::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`TicketRequestError::UnknownCategory`] or
    /// [`TicketRequestError::InvalidQuantity`].
    pub fn parse(category: &str, quantity: &str) -> Result<Self, TicketRequestError> {
        let category = category.parse::<TicketCategory>()?;
        let digits_only = !quantity.is_empty() && quantity.bytes().all(|b| b.is_ascii_digit());
        let parsed = if digits_only { quantity.parse::<u64>().ok() } else { None };
        let Some(count) = parsed else {
            return Err(TicketRequestError::InvalidQuantity { value: quantity.to_owned() });
        };
        Ok(Self::new(category, count))
    }

    /// Ticket category.
    #[must_use]
    pub const fn category(&self) -> TicketCategory {
        self.category
    }

    /// Number of tickets requested.
    #[must_use]
    pub const fn quantity(&self) -> u64 {
        self.quantity
    }
}

impl FromStr for TicketTypeRequest {
    type Err = TicketRequestError;

    /// Parse the `CATEGORY:QUANTITY` form, e.g. `ADULT:2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, quantity) = s
            .split_once(':')
            .ok_or_else(|| TicketRequestError::Malformed { value: s.to_owned() })?;
        Self::parse(category.trim(), quantity.trim())
    }
}

impl fmt::Display for TicketTypeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.quantity)
    }
}

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// Positive purchaser identifier, validated once at the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(u64);

impl AccountId {
    /// Validate a raw account id.
    ///
    /// Returns `None` for zero or negative values.
    #[must_use]
    pub fn new(raw: i64) -> Option<Self> {
        u64::try_from(raw).ok().filter(|id| *id > 0).map(Self)
    }

    /// Underlying numeric id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ---------------------------------------------------------------------------
// TicketCounts
// ---------------------------------------------------------------------------

/// Per-category ticket tally for one purchase call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketCounts {
    /// Adult tickets.
    pub adult: u64,
    /// Child tickets.
    pub child: u64,
    /// Infant tickets.
    pub infant: u64,
}

impl TicketCounts {
    /// Sum quantities per category; repeated categories accumulate.
    ///
    /// Sums saturate at `u64::MAX` rather than wrapping.
    #[must_use]
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut counts, request| {
            let slot = match request.category() {
                TicketCategory::Adult => &mut counts.adult,
                TicketCategory::Child => &mut counts.child,
                TicketCategory::Infant => &mut counts.infant,
            };
            *slot = slot.saturating_add(request.quantity());
            counts
        })
    }

    /// Count for a single category.
    #[must_use]
    pub const fn get(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }

    /// Tickets across all categories. Saturates at `u64::MAX`.
    #[must_use]
    pub fn total(&self) -> u64 {
        TicketCategory::ALL
            .into_iter()
            .fold(0, |total, c| total.saturating_add(self.get(c)))
    }

    /// Seats required; infants are excluded. Saturates at `u64::MAX`.
    #[must_use]
    pub fn seats(&self) -> u64 {
        TicketCategory::ALL
            .into_iter()
            .filter(|c| c.occupies_seat())
            .fold(0, |seats, c| seats.saturating_add(self.get(c)))
    }
}

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Hexagonal port: the external payment gateway.
///
/// The ticket service depends exclusively on this trait -- never on a concrete
/// adapter. Calls are synchronous and are never retried.
pub trait TicketPaymentService {
    /// Charge `amount` (whole pounds) to `account_id`.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::Declined`] when the charge is refused.
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError>;
}

/// Hexagonal port: the external seat-booking system.
pub trait SeatReservationService {
    /// Reserve `seat_count` seats for `account_id`. Only called with `seat_count > 0`.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationError::Unavailable`] when the seats cannot be held.
    fn reserve_seat(&self, account_id: AccountId, seat_count: u32) -> Result<(), ReservationError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    // ------------------------------------------------------------------
    // TicketCategory
    // ------------------------------------------------------------------

    #[test]
    fn category_round_trips_wire_names() {
        for category in TicketCategory::ALL {
            assert_eq!(category.as_str().parse::<TicketCategory>(), Ok(category));
            assert_eq!(category.to_string(), category.as_str());
        }
    }

    #[test]
    fn category_rejects_unknown_and_lowercase() {
        for bad in ["INVALID", "adult", "", "SENIOR"] {
            assert_eq!(
                bad.parse::<TicketCategory>(),
                Err(TicketRequestError::UnknownCategory { value: bad.to_owned() })
            );
        }
    }

    #[test]
    fn only_infants_have_no_seat() {
        assert!(TicketCategory::Adult.occupies_seat());
        assert!(TicketCategory::Child.occupies_seat());
        assert!(!TicketCategory::Infant.occupies_seat());
    }

    // ------------------------------------------------------------------
    // TicketTypeRequest
    // ------------------------------------------------------------------

    #[test]
    fn accessors_return_constructor_arguments() {
        for category in TicketCategory::ALL {
            for quantity in [0, 1, 3, 25, 1_000] {
                let request = TicketTypeRequest::new(category, quantity);
                assert_eq!(request.category(), category);
                assert_eq!(request.quantity(), quantity);
            }
        }
    }

    #[test]
    fn try_new_rejects_negative_quantity() {
        let result = TicketTypeRequest::try_new(TicketCategory::Adult, -1);
        assert_eq!(
            result,
            Err(TicketRequestError::InvalidQuantity { value: "-1".to_owned() })
        );
        let zero = TicketTypeRequest::try_new(TicketCategory::Adult, 0).unwrap();
        assert_eq!(zero.quantity(), 0);
    }

    #[test]
    fn try_new_has_no_upper_bound() {
        let request = TicketTypeRequest::try_new(TicketCategory::Adult, 5_000_000_000).unwrap();
        assert_eq!(request.quantity(), 5_000_000_000);
        let parsed = TicketTypeRequest::parse("ADULT", "5000000000").unwrap();
        assert_eq!(parsed, request);
    }

    #[test]
    fn parse_accepts_valid_input() {
        let request = TicketTypeRequest::parse("INFANT", "3").unwrap();
        assert_eq!(request, TicketTypeRequest::new(TicketCategory::Infant, 3));
    }

    #[test]
    fn parse_rejects_bad_category() {
        let result = TicketTypeRequest::parse("INVALID", "1");
        assert!(matches!(result, Err(TicketRequestError::UnknownCategory { .. })));
    }

    #[test]
    fn parse_rejects_non_integer_quantities() {
        for bad in ["1.5", "-1", "+2", "two", "", " 2", "18446744073709551616"] {
            let result = TicketTypeRequest::parse("ADULT", bad);
            assert_eq!(
                result,
                Err(TicketRequestError::InvalidQuantity { value: bad.to_owned() }),
                "quantity {bad:?} must be rejected"
            );
        }
    }

    #[test]
    fn from_str_parses_colon_form() {
        let request: TicketTypeRequest = "CHILD: 2".parse().unwrap();
        assert_eq!(request, TicketTypeRequest::new(TicketCategory::Child, 2));
        assert_eq!(request.to_string(), "CHILD:2");
    }

    #[test]
    fn from_str_requires_separator() {
        let result = "ADULT2".parse::<TicketTypeRequest>();
        assert_eq!(result, Err(TicketRequestError::Malformed { value: "ADULT2".to_owned() }));
    }

    // ------------------------------------------------------------------
    // AccountId
    // ------------------------------------------------------------------

    #[test]
    fn account_id_must_be_positive() {
        assert_eq!(AccountId::new(0), None);
        assert_eq!(AccountId::new(-7), None);
        assert_eq!(AccountId::new(1).map(AccountId::get), Some(1));
        assert_eq!(AccountId::new(i64::MAX).map(AccountId::get), Some(i64::MAX.unsigned_abs()));
    }

    // ------------------------------------------------------------------
    // TicketCounts
    // ------------------------------------------------------------------

    #[test]
    fn counts_accumulate_same_category() {
        let split = TicketCounts::from_requests(&[
            TicketTypeRequest::new(TicketCategory::Adult, 2),
            TicketTypeRequest::new(TicketCategory::Adult, 3),
        ]);
        let single =
            TicketCounts::from_requests(&[TicketTypeRequest::new(TicketCategory::Adult, 5)]);
        assert_eq!(split, single);
        assert_eq!(split, TicketCounts { adult: 5, child: 0, infant: 0 });
    }

    #[test]
    fn counts_total_and_seats_exclude_infants() {
        let counts = TicketCounts::from_requests(&[
            TicketTypeRequest::new(TicketCategory::Adult, 2),
            TicketTypeRequest::new(TicketCategory::Child, 1),
            TicketTypeRequest::new(TicketCategory::Infant, 1),
        ]);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.seats(), 3);
        assert_eq!(counts.get(TicketCategory::Infant), 1);
    }

    #[test]
    fn counts_saturate_instead_of_overflowing() {
        let counts = TicketCounts::from_requests(&[
            TicketTypeRequest::new(TicketCategory::Child, u64::MAX),
            TicketTypeRequest::new(TicketCategory::Child, 10),
            TicketTypeRequest::new(TicketCategory::Adult, 1),
        ]);
        assert_eq!(counts.child, u64::MAX);
        assert_eq!(counts.total(), u64::MAX);
        assert_eq!(counts.seats(), u64::MAX);
    }

    #[test]
    fn empty_requests_give_zero_counts() {
        let counts = TicketCounts::from_requests(&[]);
        assert_eq!(counts, TicketCounts::default());
        assert_eq!(counts.total(), 0);
    }

    // ------------------------------------------------------------------
    // Ports
    // ------------------------------------------------------------------

    /// Verify that minimal port implementations compile and record calls.
    #[test]
    fn port_trait_struct_impl() {
        struct AllPorts {
            calls: RefCell<Vec<(u64, u64)>>,
        }

        impl TicketPaymentService for AllPorts {
            fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError> {
                self.calls.borrow_mut().push((account_id.get(), amount));
                Ok(())
            }
        }

        impl SeatReservationService for AllPorts {
            fn reserve_seat(
                &self,
                _account_id: AccountId,
                _seat_count: u32,
            ) -> Result<(), ReservationError> {
                Err(ReservationError::Unavailable { reason: "sold out".to_owned() })
            }
        }

        let ports = AllPorts { calls: RefCell::new(vec![]) };
        let account = AccountId::new(9).unwrap();
        ports.make_payment(account, 40).unwrap();
        assert_eq!(*ports.calls.borrow(), vec![(9, 40)]);
        let err = ports.reserve_seat(account, 2).unwrap_err();
        assert_eq!(err.to_string(), "seat reservation unavailable: sold out");
    }

    #[test]
    fn payment_error_display() {
        let e = PaymentError::Declined { reason: "insufficient funds".to_owned() };
        assert_eq!(e.to_string(), "payment declined: insufficient funds");
    }
}
