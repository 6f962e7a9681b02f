// Rust guideline compliant 2026-10-16

//! Random purchase generator for demo runs.
//!
//! Entry point: [`RequestGenerator::generate_purchase`]. Configuration via
//! [`GeneratorConfig::builder`].

use domain::{TicketCategory, TicketTypeRequest};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::cell::RefCell;

/// Highest account id handed out by the generator.
const MAX_ACCOUNT_ID: i64 = 1_000;

/// Upper bound on ticket requests per generated purchase.
const MAX_REQUESTS: usize = 3;

// ---------------------------------------------------------------------------
// GeneratorError
// ---------------------------------------------------------------------------

/// Errors that can occur while configuring the generator.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The supplied configuration is invalid.
    #[error("invalid generator configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// GeneratorConfig + builder
// ---------------------------------------------------------------------------

/// Runtime configuration for a [`RequestGenerator`].
///
/// Construct via [`GeneratorConfig::builder`].
#[derive(Debug)]
pub struct GeneratorConfig {
    /// Largest quantity drawn for a single request (range: `[0, max_quantity]`).
    pub max_quantity: u32,
    /// Optional RNG seed for reproducible purchases. `None` seeds from the OS.
    pub seed: Option<u64>,
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug)]
pub struct GeneratorConfigBuilder {
    max_quantity: u32,
    seed: Option<u64>,
}

impl GeneratorConfig {
    /// Create a builder. `max_quantity` is the only required parameter.
    #[must_use]
    pub fn builder(max_quantity: u32) -> GeneratorConfigBuilder {
        GeneratorConfigBuilder { max_quantity, seed: None }
    }
}

impl GeneratorConfigBuilder {
    /// Fix the RNG seed for deterministic output (useful in tests).
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] when `max_quantity` is zero.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<GeneratorConfig, GeneratorError> {
        if self.max_quantity == 0 {
            return Err(GeneratorError::InvalidConfig {
                reason: "max_quantity must be >= 1".to_owned(),
            });
        }
        Ok(GeneratorConfig { max_quantity: self.max_quantity, seed: self.seed })
    }
}

// ---------------------------------------------------------------------------
// RequestGenerator
// ---------------------------------------------------------------------------

/// Produces random purchases: an account id plus one to three ticket requests.
///
/// Purchases are not pre-filtered, so some will break the venue rules (e.g.
/// children without adults); that is what the demo wants to show.
#[derive(Debug)]
pub struct RequestGenerator {
    config: GeneratorConfig,
    /// Interior mutability required because all public methods take `&self`.
    rng: RefCell<StdRng>,
}

impl RequestGenerator {
    /// Create a new generator from `config`.
    ///
    /// Seeds the RNG from `config.seed` if set, otherwise from the OS.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng: RefCell::new(rng) }
    }

    /// Generate one purchase.
    ///
    /// Account id is uniform in `[1, 1000]`; request count in `[1, 3]`; each
    /// quantity in `[0, config.max_quantity]`.
    #[must_use]
    pub fn generate_purchase(&self) -> (i64, Vec<TicketTypeRequest>) {
        let mut rng = self.rng.borrow_mut();
        let account_id = rng.random_range(1..=MAX_ACCOUNT_ID);
        let size = rng.random_range(1..=MAX_REQUESTS);
        let requests = (0..size)
            .map(|_| {
                // Index is always in bounds: derived from len().
                let category = TicketCategory::ALL[rng.random_range(0..TicketCategory::ALL.len())];
                let quantity = u64::from(rng.random_range(0..=self.config.max_quantity));
                TicketTypeRequest::new(category, quantity)
            })
            .collect();
        (account_id, requests)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
