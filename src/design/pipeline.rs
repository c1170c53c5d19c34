//! Layered generation pipeline
//!
//! Strategies are tried in order. Each one either yields a candidate that
//! passes the full order check, or fails and hands over to the next. A
//! validation failure never leaves this module; callers only ever see a
//! validated [`Design`] or [`DeckError::ConstructionFailed`].

use serde::{Deserialize, Serialize};

use crate::core::config::DEFAULT_SEED;
use crate::core::error::{DeckError, Result};
use crate::core::rng::seeded;
use crate::core::types::{Card, Design, Order};
use crate::design::construction;
use crate::design::repair::{self, MAX_REPAIR_PASSES};
use crate::design::validation::{check_for_order, ValidationError};

/// One layer of the generation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Closed-form plane over GF(n)
    Direct,
    /// Closed-form plane over GF(3²) written as Gaussian integers mod 3
    OrderNine,
    /// Bounded local repair of the previous candidate
    LocalRepair,
    /// Point/line construction followed by local repair
    GeneralFallback,
    /// Greedy construction with seeded shuffled retries
    LastResort,
}

impl Strategy {
    /// Whether a design from this strategy can depend on the seed
    pub fn is_seed_dependent(self) -> bool {
        matches!(self, Strategy::LastResort)
    }
}

/// Default strategy order for an order
pub fn strategies_for(order: Order) -> Vec<Strategy> {
    let primary = if order.get() == 9 {
        Strategy::OrderNine
    } else {
        Strategy::Direct
    };
    vec![
        primary,
        Strategy::LocalRepair,
        Strategy::GeneralFallback,
        Strategy::LastResort,
    ]
}

/// How a design was produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub order: u32,
    pub seed: u64,
    /// Strategy whose output was accepted
    pub strategy: Strategy,
    /// Strategies tried, in order, including the accepted one
    pub attempted: Vec<Strategy>,
    /// Repair passes run by the accepted strategy
    pub repair_passes: usize,
    /// True when the last resort needed shuffled retries
    pub randomized: bool,
}

impl GenerationReport {
    /// True when the result came from repair or a fallback rather than a
    /// closed-form construction
    pub fn is_degraded(&self) -> bool {
        !matches!(self.strategy, Strategy::Direct | Strategy::OrderNine)
    }

    /// True when a different seed could have produced a different design
    pub fn is_seed_dependent(&self) -> bool {
        self.strategy.is_seed_dependent()
    }
}

/// A validated design together with its generation report
#[derive(Debug, Clone)]
pub struct Generated {
    pub design: Design,
    pub report: GenerationReport,
}

/// Why a strategy did not produce an accepted design
#[derive(Debug)]
enum StepError {
    ValidationFailed(ValidationError),
    Exhausted(&'static str),
}

/// Runs strategies in sequence for one order
pub struct Pipeline {
    order: Order,
    seed: u64,
    strategies: Vec<Strategy>,
    candidate: Vec<Card>,
    repair_passes: usize,
    randomized: bool,
}

impl Pipeline {
    pub fn new(order: Order, seed: u64) -> Self {
        Self {
            order,
            seed,
            strategies: strategies_for(order),
            candidate: Vec::new(),
            repair_passes: 0,
            randomized: false,
        }
    }

    /// Replace the default strategy order
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn run(mut self) -> Result<Generated> {
        let strategies = std::mem::take(&mut self.strategies);
        let mut attempted = Vec::with_capacity(strategies.len());

        for strategy in strategies {
            attempted.push(strategy);
            self.repair_passes = 0;

            match self.apply(strategy) {
                Ok(cards) => {
                    if attempted.len() > 1 {
                        tracing::info!(
                            "Order {} design produced by fallback strategy {:?}",
                            self.order,
                            strategy
                        );
                    }
                    if self.randomized {
                        tracing::warn!(
                            "Order {} design depends on seed {}: last resort used shuffled retries",
                            self.order,
                            self.seed
                        );
                    }
                    let report = GenerationReport {
                        order: self.order.get(),
                        seed: self.seed,
                        strategy,
                        attempted,
                        repair_passes: self.repair_passes,
                        randomized: self.randomized,
                    };
                    return Ok(Generated {
                        design: Design::from_validated(self.order, cards),
                        report,
                    });
                }
                Err(StepError::ValidationFailed(reason)) => {
                    tracing::debug!(
                        "Strategy {:?} for order {} failed validation: {}",
                        strategy,
                        self.order,
                        reason
                    );
                }
                Err(StepError::Exhausted(why)) => {
                    tracing::debug!(
                        "Strategy {:?} for order {} gave up: {}",
                        strategy,
                        self.order,
                        why
                    );
                }
            }
        }

        tracing::warn!("All strategies exhausted for order {}", self.order);
        Err(DeckError::ConstructionFailed {
            order: self.order.get(),
        })
    }

    /// Run one strategy; `Ok` only for a candidate passing the order check
    fn apply(&mut self, strategy: Strategy) -> std::result::Result<Vec<Card>, StepError> {
        match strategy {
            Strategy::Direct => self.accept(construction::direct(self.order)),
            Strategy::OrderNine => {
                if self.order.get() != 9 {
                    return Err(StepError::Exhausted("order-9 construction requested for another order"));
                }
                self.accept(construction::order_nine())
            }
            Strategy::LocalRepair => {
                if self.candidate.is_empty() {
                    return Err(StepError::Exhausted("no candidate to repair"));
                }
                let repaired = repair::repair(&self.candidate, self.order, MAX_REPAIR_PASSES)
                    .ok_or(StepError::Exhausted("repair did not converge"))?;
                self.repair_passes = repaired.passes;
                Ok(repaired.cards)
            }
            Strategy::GeneralFallback => {
                let base = construction::general_fallback(self.order);
                match repair::repair(&base, self.order, MAX_REPAIR_PASSES) {
                    Some(repaired) => {
                        self.repair_passes = repaired.passes;
                        Ok(repaired.cards)
                    }
                    None => {
                        self.candidate = base;
                        Err(StepError::Exhausted("repair of point/line construction did not converge"))
                    }
                }
            }
            Strategy::LastResort => {
                let mut rng = seeded(self.seed);
                let outcome = repair::last_resort(self.order, &mut rng)
                    .map_err(|_| StepError::Exhausted("too few usable cards"))?;
                self.randomized = outcome.randomized;
                self.accept(outcome.cards)
            }
        }
    }

    /// Validate a fresh candidate, keeping it for the next layer on failure
    fn accept(&mut self, cards: Vec<Card>) -> std::result::Result<Vec<Card>, StepError> {
        match check_for_order(&cards, self.order) {
            Ok(()) => Ok(cards),
            Err(reason) => {
                self.candidate = cards;
                Err(StepError::ValidationFailed(reason))
            }
        }
    }
}

/// Generate a validated design for order `n` with the default seed
pub fn generate_design(n: u32) -> Result<Design> {
    generate_design_seeded(n, DEFAULT_SEED).map(|generated| generated.design)
}

/// Generate a validated design for order `n`
///
/// The result is a pure function of `(n, seed)`. The seed only matters if
/// the last-resort strategy is reached, which the report records.
pub fn generate_design_seeded(n: u32, seed: u64) -> Result<Generated> {
    let order = Order::new(n)?;
    Pipeline::new(order, seed).run()
}
