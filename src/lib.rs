//! Spot Deck - symbol design and card layout for spot-it style games

pub mod core;
pub mod design;
pub mod layout;
pub mod output;
pub mod supply;

pub use crate::core::{
    is_supported, required_symbol_count, supported_orders, Card, DeckConfig, DeckError, Design,
    LayoutConfig, Order, Result, Symbol,
};
pub use crate::design::{
    generate_design, generate_design_seeded, validate_design, GenerationReport, Generated,
    Strategy,
};
pub use crate::layout::{compute_layout, layout_deck, CardLayout, LayoutEngine, Placement};
pub use crate::supply::ImageSupply;
