//! Error types for payline evaluation

use thiserror::Error;

use crate::wild::SymbolId;

/// Malformed result code.
///
/// Never escapes [`decode_result_code`](crate::codec::decode_result_code):
/// the decoder logs it and degrades to an empty winline record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeParseError {
    /// Fewer than `<kind>-<matchLength>-<wildFlag>-<symbol>`
    #[error("Insufficient code segments: expected at least 4, got {found}")]
    TooFewSegments { found: usize },

    /// Match length segment is not an integer
    #[error("Invalid match length segment: {0:?}")]
    InvalidMatchLength(String),

    /// Symbol segment is not an integer
    #[error("Invalid symbol segment: {0:?}")]
    InvalidSymbol(String),
}

/// Pay table has no entry for a (match length, symbol) pair.
///
/// Treated as a zero payout by the evaluator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Pay table has no entry for {match_length} x symbol {symbol}")]
pub struct PayTableMiss {
    pub match_length: usize,
    pub symbol: SymbolId,
}

/// Rules loading / validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
