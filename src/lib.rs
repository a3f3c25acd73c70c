#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

//! Redeemcode - keyed redemption code codec
//!
//! This crate generates and parses short, human-typable activation codes that
//! carry a 32-bit sequential identifier together with a tamper-detection
//! signature. Each 10-symbol code serializes a 50-bit payload: a 14-bit
//! weighted-sum signature, a 4-bit freshness value selecting a key-table row,
//! and the identifier XOR-obfuscated nibble by nibble against that row.

// Fixed scheme parameters:
// - Key table: 16 rows x 8 weights, one row per freshness value
// - Alphabet: 32 distinct symbols, one per 5-bit payload group
// - Code: 10 symbols carrying 50 payload bits
// - Signature: 14-bit weighted sum over the identifier's nibbles
//
// The signature space is 14 bits and the transform is linear, so the scheme
// offers obfuscation and casual tamper-detection, not forgery resistance. An
// observer holding enough (identifier, code) pairs can solve for the key
// table; do not use this where real tamper-proofing is required. Key storage
// and redemption bookkeeping belong to the embedding application.

// Core modules
pub mod codec;
pub mod errors;
pub mod keygen;
pub mod tables;

// Re-export commonly used types and functions
pub use codec::Codec;
pub use errors::CodecError;
pub use keygen::{random_key_table, MAX_WEIGHT};
pub use tables::{
    Alphabet, KeyTable, ALPHABET_LEN, CODE_LEN, FRESHNESS_BITS, IDENTIFIER_BITS, KEY_COLS,
    KEY_ROWS, PAYLOAD_BITS, SIGNATURE_BITS, SIGNATURE_MAX,
};

// Version constant
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
