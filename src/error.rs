use std::path::PathBuf;

use alloy::primitives::TxHash;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DisperserError {
    // Configuration errors
    #[error("no funding keys configured: set at least one of PRIVATE_KEY_1..PRIVATE_KEY_3")]
    NoFundingKeys,

    #[error("invalid funding key in {slot}: {reason}")]
    InvalidFundingKey { slot: String, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    // Input errors
    #[error("failed to read address file {path}: {source}")]
    AddressFileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("address file {path} contains no addresses")]
    EmptyAddressList { path: PathBuf },

    #[error("no valid transfer count after {0} attempts")]
    PromptExhausted(u32),

    // Validation errors
    #[error("invalid recipient address: {0}")]
    InvalidRecipient(String),

    // Transfer errors
    #[error("submission failed: {0}")]
    Submission(String),

    #[error("confirmation failed for {hash}: {reason}")]
    Confirmation { hash: TxHash, reason: String },

    #[error("RPC error: {0}")]
    Rpc(String),

    // System errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DisperserError {
    /// Check if the error should terminate the process (configuration and
    /// input errors are unrecoverable; everything else is logged and skipped).
    pub fn is_fatal(&self) -> bool {
        match self {
            DisperserError::NoFundingKeys
            | DisperserError::InvalidFundingKey { .. }
            | DisperserError::InvalidConfiguration(_)
            | DisperserError::AddressFileUnreadable { .. }
            | DisperserError::EmptyAddressList { .. }
            | DisperserError::PromptExhausted(_) => true,
            _ => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            DisperserError::NoFundingKeys
            | DisperserError::InvalidFundingKey { .. }
            | DisperserError::InvalidConfiguration(_) => "configuration",

            DisperserError::AddressFileUnreadable { .. }
            | DisperserError::EmptyAddressList { .. }
            | DisperserError::PromptExhausted(_) => "input",

            DisperserError::InvalidRecipient(_) => "validation",

            DisperserError::Submission(_)
            | DisperserError::Confirmation { .. }
            | DisperserError::Rpc(_) => "transfer",

            DisperserError::Io(_) => "system",
        }
    }
}

// Result type alias for convenience
pub type DisperserResult<T> = Result<T, DisperserError>;
