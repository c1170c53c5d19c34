//! Deck and layout configuration with documented constants
//!
//! All layout magic numbers are collected here with explanations of what
//! they control. Ratios are relative to the card diameter or to the safe
//! radius derived from it.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use crate::core::error::{DeckError, Result};
use crate::core::types::is_supported;

/// Seed used when the caller does not supply one
pub const DEFAULT_SEED: u64 = 0x5EED;

/// Configuration for the layout engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    // === RINGS ===
    /// Radius (fraction of diameter) inside which slot centres are kept
    ///
    /// Everything else is relative to this. Larger values spread symbols
    /// toward the rim, where a circular crop starts clipping them.
    pub safe_radius_ratio: f64,

    /// Ring radius for cards with at most three symbols (fraction of safe radius)
    pub triad_ring_ratio: f64,

    /// Ring radius around the centre slot for four or five symbols
    pub single_ring_ratio: f64,

    /// Outer ring radius for six or more symbols
    pub outer_ring_ratio: f64,

    /// Inner ring radius for six or more symbols
    ///
    /// Must stay well below `outer_ring_ratio` so the rings do not touch.
    pub inner_ring_ratio: f64,

    /// Maximum number of slots on the outer ring
    pub max_outer_slots: usize,

    // === SIZES ===
    /// Size factor (fraction of diameter) for cards with up to four symbols
    pub size_factor_small: f64,

    /// Size factor for cards with five or six symbols
    pub size_factor_medium: f64,

    /// Size factor for cards with seven or more symbols
    pub size_factor_large: f64,

    /// Size multiplier at the safe radius, interpolated linearly from 1.0 at the centre
    pub edge_scale: f64,

    /// Width of the per-slot random scale band centred on 1.0
    ///
    /// At 0.1, each symbol is scaled by a value in [0.95, 1.05).
    pub scale_jitter: f64,

    /// Fraction of the neighbour chord a symbol may occupy on a crowded ring
    pub crowding_margin: f64,

    // === ROTATION ===
    /// Probability that a symbol faces away from the centre
    pub outward_probability: f64,

    /// Probability that a symbol faces the centre
    ///
    /// The remainder (1 - outward - inward) gets a free rotation.
    pub inward_probability: f64,

    /// Total width of the rotation jitter band in radians
    pub rotation_jitter: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            // Rings
            safe_radius_ratio: 0.42,
            triad_ring_ratio: 0.5,
            single_ring_ratio: 0.65,
            outer_ring_ratio: 0.76,
            inner_ring_ratio: 0.38,
            max_outer_slots: 5,

            // Sizes (small > medium > large)
            size_factor_small: 0.19,
            size_factor_medium: 0.17,
            size_factor_large: 0.15,
            edge_scale: 0.85,
            scale_jitter: 0.1,
            crowding_margin: 0.9,

            // Rotation (70% outward, 20% inward, 10% free)
            outward_probability: 0.7,
            inward_probability: 0.2,
            rotation_jitter: PI / 12.0,
        }
    }
}

impl LayoutConfig {
    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        let ratios = [
            ("safe_radius_ratio", self.safe_radius_ratio),
            ("triad_ring_ratio", self.triad_ring_ratio),
            ("single_ring_ratio", self.single_ring_ratio),
            ("outer_ring_ratio", self.outer_ring_ratio),
            ("inner_ring_ratio", self.inner_ring_ratio),
            ("edge_scale", self.edge_scale),
            ("crowding_margin", self.crowding_margin),
        ];
        for (name, value) in ratios {
            if !(value > 0.0 && value <= 1.0) {
                return Err(format!("{} ({}) must be in (0, 1]", name, value));
            }
        }

        // A slot centre at the safe radius must leave room for the symbol
        if self.safe_radius_ratio > 0.5 {
            return Err(format!(
                "safe_radius_ratio ({}) must not exceed 0.5",
                self.safe_radius_ratio
            ));
        }

        if self.inner_ring_ratio >= self.outer_ring_ratio {
            return Err(format!(
                "inner_ring_ratio ({}) should be < outer_ring_ratio ({})",
                self.inner_ring_ratio, self.outer_ring_ratio
            ));
        }

        if self.max_outer_slots < 3 {
            return Err(format!(
                "max_outer_slots ({}) must be at least 3",
                self.max_outer_slots
            ));
        }

        if self.size_factor_small <= 0.0
            || self.size_factor_medium <= 0.0
            || self.size_factor_large <= 0.0
        {
            return Err("Size factors must be positive".into());
        }

        if !(0.0..1.0).contains(&self.scale_jitter) {
            return Err(format!("scale_jitter ({}) must be in [0, 1)", self.scale_jitter));
        }

        if self.outward_probability < 0.0
            || self.inward_probability < 0.0
            || self.outward_probability + self.inward_probability > 1.0
        {
            return Err(format!(
                "rotation probabilities ({} outward, {} inward) must be non-negative and sum to at most 1",
                self.outward_probability, self.inward_probability
            ));
        }

        if self.rotation_jitter < 0.0 {
            return Err("rotation_jitter must not be negative".into());
        }

        Ok(())
    }
}

/// Top-level deck configuration, as read from a TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Design order; each card carries `order + 1` symbols
    pub order: u32,
    /// Seed for the degraded last-resort construction
    pub seed: u64,
    /// Rendered card diameter in pixels
    pub card_diameter: f64,
    /// Layout tuning
    pub layout: LayoutConfig,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            order: 5,
            seed: DEFAULT_SEED,
            card_diameter: 800.0,
            layout: LayoutConfig::default(),
        }
    }
}

impl DeckConfig {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !is_supported(self.order) {
            return Err(format!("order {} is not a supported order", self.order));
        }
        if !(self.card_diameter > 0.0) {
            return Err(format!(
                "card_diameter ({}) must be positive",
                self.card_diameter
            ));
        }
        self.layout.validate()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: DeckConfig = toml::from_str(contents)?;
        config.validate().map_err(DeckError::InvalidConfig)?;
        Ok(config)
    }
}

/// Load a deck configuration from a TOML file
pub fn load_config(path: &Path) -> Result<DeckConfig> {
    let contents = fs::read_to_string(path)?;
    let config = DeckConfig::from_toml_str(&contents)?;
    tracing::debug!("Loaded deck config from {:?} (order {})", path, config.order);
    Ok(config)
}
