//! Symbol design generation
//!
//! Builds card sets in which every pair of cards shares exactly one symbol
//! (a finite projective plane of order n), validates them, and falls back
//! through repair strategies when a construction fails.

pub mod construction;
pub mod field;
pub mod pipeline;
pub mod repair;
pub mod validation;

pub use pipeline::{
    generate_design, generate_design_seeded, strategies_for, GenerationReport, Generated,
    Pipeline, Strategy,
};
pub use validation::{check, check_for_order, validate, validate_for_order, ValidationError};

use crate::core::types::Card;

/// True when `cards` satisfies the design invariant
pub fn validate_design(cards: &[Card]) -> bool {
    validate(cards)
}
