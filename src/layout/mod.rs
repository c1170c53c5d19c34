//! Card face layout
//!
//! Turns a card's ordered symbol list into per-slot geometry: position,
//! size and rotation on a circular card.

pub mod batch;
pub mod engine;
pub mod placement;

pub use batch::layout_deck;
pub use engine::{compute_layout, LayoutEngine};
pub use placement::{CardLayout, Placement};
