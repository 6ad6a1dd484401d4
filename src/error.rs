use thiserror::Error;

#[derive(Error, Debug)]
pub enum BanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Ban authority error: {0}")]
    Authority(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Could not resolve address {host}: {reason}")]
    AddressResolution { host: String, reason: String },

    #[error("Invalid ban record: {0}")]
    InvalidRecord(String),
}

pub type BanResult<T> = Result<T, BanError>;
