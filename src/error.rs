use thiserror::Error;

/// Reasons a user input is rejected by the ordering flow.
///
/// These never abort a session: the engine turns each one into a rejection
/// descriptor and stays in the current state.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("no quantity found in input")]
    MissingQuantity,
    #[error("quantity {0} is below the minimum")]
    QuantityTooLow(u64),
    #[error("quantity {0} is above the maximum")]
    QuantityTooHigh(u64),
    #[error("unrecognized payment method")]
    UnknownPaymentMethod,
    #[error("platform {0} has no URL allow-list")]
    UnsupportedPlatform(String),
    #[error("input is not a valid {0} URL")]
    InvalidUrl(String),
}

#[derive(Error, Debug)]
pub enum OrderFlowError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Transcript error: {0}")]
    TranscriptError(String),
    #[error("Incomplete order: missing {0}")]
    IncompleteOrder(&'static str),
    #[error("Order gateway error: {0}")]
    GatewayError(String),
}

pub type Result<T> = std::result::Result<T, OrderFlowError>;
