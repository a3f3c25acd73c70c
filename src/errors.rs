use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("key table must have {expected} rows, got {got}")]
    KeyTableRows { expected: usize, got: usize },

    #[error("key table row {row} must have {expected} entries, got {got}")]
    KeyTableRowLength { row: usize, expected: usize, got: usize },

    #[error("key table row {row} admits signature {max_sum}, exceeds capacity {capacity}")]
    SignatureCapacity { row: usize, max_sum: u32, capacity: u32 },

    #[error("alphabet must have {expected} symbols, got {got}")]
    AlphabetLength { expected: usize, got: usize },

    #[error("alphabet symbol {symbol:?} appears more than once")]
    DuplicateSymbol { symbol: char },

    #[error("identifier range overflows 32 bits: start {start}, count {count}")]
    IdentifierRange { start: u32, count: u32 },

    #[error("code must be {expected} symbols, got {got}")]
    CodeLength { expected: usize, got: usize },

    #[error("code contains symbol {symbol:?} outside the alphabet")]
    UnknownSymbol { symbol: char },

    #[error("freshness index {index} not in [0, {max})")]
    FreshnessOutOfRange { index: u8, max: u8 },

    #[error("signature mismatch: embedded {embedded}, computed {computed}")]
    SignatureMismatch { embedded: u16, computed: u16 },
}
