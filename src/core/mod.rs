pub mod config;
pub mod error;
pub mod rng;
pub mod types;

pub use config::{load_config, DeckConfig, LayoutConfig, DEFAULT_SEED};
pub use error::{DeckError, Result};
pub use types::{
    is_supported, required_symbol_count, supported_orders, Card, Design, Order, Symbol,
    SUPPORTED_ORDERS,
};
