// Rust guideline compliant 2026-10-16

//! Box-office entry point.
//!
//! Wires the ticket service to the logging payment and seat-reservation
//! adapters. With arguments it performs a single purchase; without arguments
//! it runs a short seeded demo of random purchases, some of which are rejected.
//!
//! # Usage
//!
//! ```text
//! # Single purchase: account id followed by CATEGORY:QUANTITY pairs
//! RUST_LOG=info cargo run -- 1 ADULT:2 CHILD:1 INFANT:1
//!
//! # Seeded demo run with per-purchase debug output
//! RUST_LOG=debug cargo run
//! ```

mod adapters;
mod generator;

use adapters::log_payment::LogPaymentService;
use adapters::log_seat_reservation::LogSeatReservationService;
use anyhow::Context as _;
use domain::{SeatReservationService, TicketPaymentService, TicketTypeRequest};
use generator::{GeneratorConfig, RequestGenerator};
use ticket_service::{TicketService, TicketServiceConfig};

/// Purchases attempted by the demo run.
const DEMO_PURCHASES: usize = 10;

/// Fixed seed so the demo output is reproducible.
const DEMO_SEED: u64 = 42;

fn main() -> anyhow::Result<()> {
    // Initialize the tracing subscriber before any work.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = TicketServiceConfig::builder()
        .build()
        .context("failed to build ticket service config")?;
    let service = TicketService::with_config(
        config,
        LogPaymentService::new(),
        LogSeatReservationService::new(),
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        run_demo(&service)?;
        Ok(())
    } else {
        let (account_id, requests) = parse_purchase(&args)?;
        let summary = service
            .purchase_tickets(account_id, &requests)
            .context("purchase rejected")?;
        println!(
            "account {}: charged {} for {} seat(s) ({} adult, {} child, {} infant)",
            summary.account_id,
            summary.total_amount,
            summary.total_seats,
            summary.counts.adult,
            summary.counts.child,
            summary.counts.infant,
        );
        Ok(())
    }
}

/// Parse `<account_id> <CATEGORY:QUANTITY>...` from the command line.
fn parse_purchase(args: &[String]) -> anyhow::Result<(i64, Vec<TicketTypeRequest>)> {
    let (account, rest) = args.split_first().context("missing account id")?;
    let account_id = account
        .parse::<i64>()
        .with_context(|| format!("account id must be an integer, got {account:?}"))?;
    let requests = rest
        .iter()
        .map(|raw| {
            raw.parse::<TicketTypeRequest>()
                .with_context(|| format!("invalid ticket request {raw:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok((account_id, requests))
}

/// Run a fixed number of seeded random purchases; rejections are not fatal.
///
/// Returns the number of purchases that completed.
fn run_demo<P: TicketPaymentService, R: SeatReservationService>(
    service: &TicketService<P, R>,
) -> anyhow::Result<usize> {
    let generator_config = GeneratorConfig::builder(6)
        .seed(DEMO_SEED)
        .build()
        .context("failed to build generator config")?;
    let generator = RequestGenerator::new(generator_config);

    let mut completed = 0usize;
    for _ in 0..DEMO_PURCHASES {
        let (account_id, requests) = generator.generate_purchase();
        tracing::debug!(account_id, requests = ?requests, "box_office.demo.purchase");
        match service.purchase_tickets(account_id, &requests) {
            Ok(_) => completed += 1,
            // The service already logs the rejection at warn.
            Err(e) => tracing::debug!(account_id, error = %e, "box_office.demo.rejected"),
        }
    }
    tracing::info!(completed, attempted = DEMO_PURCHASES, "box_office.demo.finished");
    Ok(completed)
}
