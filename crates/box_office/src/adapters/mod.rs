// Rust guideline compliant 2026-10-16

//! Adapters (secondary ports) for the box-office binary.
//!
//! Each sub-module implements one port trait defined in the `domain` crate.
//! Adapters are intentionally isolated from the ticket-service pipeline.

pub mod log_payment;
pub mod log_seat_reservation;
