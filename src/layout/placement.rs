//! Placement output types

use serde::{Deserialize, Serialize};

use crate::core::types::Symbol;

/// Geometry for one symbol slot on a card
///
/// Coordinates are in the card's drawing surface: origin top-left, card
/// centre at `(diameter / 2, diameter / 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Index of the slot within the card's symbol list
    pub slot: usize,
    pub symbol: Symbol,
    pub x: f64,
    pub y: f64,
    /// Edge length of the square the symbol image is drawn into
    pub size: f64,
    /// Rotation in radians
    pub rotation: f64,
}

impl Placement {
    pub fn distance_to(&self, other: &Placement) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Distance from the centre of a card of the given diameter
    pub fn distance_from_centre(&self, diameter: f64) -> f64 {
        let c = diameter / 2.0;
        (self.x - c).hypot(self.y - c)
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.to_degrees()
    }
}

/// All placements for one card of a design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardLayout {
    /// Position of the card in its design
    pub card_index: usize,
    /// Card key, e.g. `"5_12_3"`
    pub key: String,
    pub placements: Vec<Placement>,
}
