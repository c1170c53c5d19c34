use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Unsupported order {order}: expected a prime or prime power up to 31")]
    InvalidOrder { order: u32 },

    #[error("Could not construct a valid design for order {order}")]
    ConstructionFailed { order: u32 },

    #[error("Image supply too small: {required} images required, {available} available")]
    InsufficientImages { required: usize, available: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeckError>;
