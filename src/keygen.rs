use rand_core::RngCore;

use crate::{
    errors::CodecError,
    tables::{KeyTable, KEY_COLS, KEY_ROWS},
};

/// Exclusive upper bound for generated key weights. Keeps every row sum at
/// most `8 * 99 = 792`, far below the signature capacity.
pub const MAX_WEIGHT: u32 = 100;

/// Produce a random 16x8 key table for provisioning a new deployment.
///
/// This is a one-shot administrative helper, not part of the encode/decode
/// hot path. The caller is responsible for storing the table secretly; anyone
/// holding it can forge codes.
///
/// # Errors
///
/// The weight bound keeps the table inside the signature capacity, so this
/// currently cannot fail; the `Result` mirrors the table constructor.
pub fn random_key_table<R: RngCore>(rng: &mut R) -> Result<KeyTable, CodecError> {
    let mut rows = [[0u16; KEY_COLS]; KEY_ROWS];
    for row in &mut rows {
        for weight in row.iter_mut() {
            *weight = uniform_below(rng, MAX_WEIGHT);
        }
    }
    KeyTable::new(rows)
}

// Uniform rejection sampling: retry draws landing in the biased tail.
fn uniform_below<R: RngCore>(rng: &mut R, bound: u32) -> u16 {
    let limit = u32::MAX - u32::MAX % bound;
    loop {
        let draw = rng.next_u32();
        if draw < limit {
            return (draw % bound) as u16;
        }
    }
}
