use rand_core::{OsRng, RngCore};

use crate::{
    errors::CodecError,
    tables::{
        Alphabet, KeyTable, CODE_LEN, FRESHNESS_BITS, IDENTIFIER_BITS, KEY_ROWS, NIBBLE_MAX,
        PAYLOAD_BITS, SIGNATURE_MAX,
    },
};

const FRESHNESS_SHIFT: u32 = IDENTIFIER_BITS;
const SIGNATURE_SHIFT: u32 = IDENTIFIER_BITS + FRESHNESS_BITS;
const SYMBOL_MASK: u64 = 0x1F;
const FRESHNESS_MASK: u64 = (1 << FRESHNESS_BITS) - 1;

/// Codec for 10-symbol redemption codes.
///
/// A code serializes a 50-bit payload: a 14-bit weighted-sum signature, the
/// 4-bit freshness value that selected the key row, and the 32-bit identifier
/// with each nibble XOR-obfuscated against the low nibble of its key weight.
/// Both tables are fixed at construction, so a `Codec` is immutable and safe
/// to share across threads.
#[derive(Debug, Clone)]
pub struct Codec {
    key_table: KeyTable,
    alphabet: Alphabet,
}

impl Codec {
    #[must_use]
    pub const fn new(key_table: KeyTable, alphabet: Alphabet) -> Self {
        Self {
            key_table,
            alphabet,
        }
    }

    /// Generate a code for `id` with a freshness value drawn from the OS
    /// random source.
    #[must_use]
    pub fn generate(&self, id: u32) -> String {
        // 16 divides 2^32, so masking the draw keeps it uniform.
        let fresh = (OsRng.next_u32() & FRESHNESS_MASK as u32) as u8;
        self.encode(id, fresh)
    }

    /// Generate a code for `id` with a caller-chosen freshness value. Given
    /// the same tables, identifier, and freshness, the output is a fixed
    /// function of its inputs.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::FreshnessOutOfRange` if `fresh` is not in
    /// `[0, 16)`.
    pub fn generate_with_freshness(&self, id: u32, fresh: u8) -> Result<String, CodecError> {
        if usize::from(fresh) >= KEY_ROWS {
            return Err(CodecError::FreshnessOutOfRange {
                index: fresh,
                max: KEY_ROWS as u8,
            });
        }
        Ok(self.encode(id, fresh))
    }

    /// Generate codes for `start, start + 1, ..., start + count - 1`, in that
    /// order. Output index `i` corresponds to identifier `start + i`.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::IdentifierRange` if the last identifier in the
    /// range would not fit in 32 bits. The range is checked up front, so no
    /// partial output is ever produced.
    pub fn batch_generate(&self, start: u32, count: u32) -> Result<Vec<String>, CodecError> {
        if count > 0 && start.checked_add(count - 1).is_none() {
            return Err(CodecError::IdentifierRange { start, count });
        }
        Ok((0..count).map(|i| self.generate(start + i)).collect())
    }

    /// Recover the identifier from a code, verifying its embedded signature.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::CodeLength` or `CodecError::UnknownSymbol` for a
    /// malformed code, and `CodecError::SignatureMismatch` when the recovered
    /// identifier no longer matches the embedded signature. A mismatch is the
    /// tamper/corruption signal; no identifier is returned in that case.
    pub fn parse(&self, code: &str) -> Result<u32, CodecError> {
        let length = code.chars().count();
        if length != CODE_LEN {
            return Err(CodecError::CodeLength {
                expected: CODE_LEN,
                got: length,
            });
        }

        let mut payload = 0u64;
        for symbol in code.chars() {
            let value = self
                .alphabet
                .index_of(symbol)
                .ok_or(CodecError::UnknownSymbol { symbol })?;
            payload = (payload << 5) | u64::from(value);
        }

        let embedded = ((payload >> SIGNATURE_SHIFT) & u64::from(SIGNATURE_MAX)) as u16;
        let fresh = ((payload >> FRESHNESS_SHIFT) & FRESHNESS_MASK) as u8;
        // A 4-bit field cannot exceed 15; bound-checked anyway before indexing.
        if usize::from(fresh) >= KEY_ROWS {
            return Err(CodecError::FreshnessOutOfRange {
                index: fresh,
                max: KEY_ROWS as u8,
            });
        }
        let obfuscated = (payload & u64::from(u32::MAX)) as u32;

        let weights = self.key_table.row(fresh);
        let mut id = 0u32;
        let mut computed = 0u32;
        for (i, &weight) in weights.iter().enumerate() {
            let shift = 28 - 4 * i;
            let nibble = ((obfuscated >> shift) & NIBBLE_MAX) ^ (u32::from(weight) & NIBBLE_MAX);
            id |= nibble << shift;
            computed += nibble * u32::from(weight);
        }

        if computed != u32::from(embedded) {
            return Err(CodecError::SignatureMismatch {
                embedded,
                computed: computed as u16,
            });
        }
        Ok(id)
    }

    fn encode(&self, id: u32, fresh: u8) -> String {
        let weights = self.key_table.row(fresh);
        let mut signature = 0u32;
        let mut obfuscated = 0u32;
        for (i, &weight) in weights.iter().enumerate() {
            let shift = 28 - 4 * i;
            let nibble = (id >> shift) & NIBBLE_MAX;
            signature += nibble * u32::from(weight);
            obfuscated |= (nibble ^ (u32::from(weight) & NIBBLE_MAX)) << shift;
        }
        // The KeyTable capacity invariant keeps the sum within 14 bits.
        let payload = (u64::from(signature) << SIGNATURE_SHIFT)
            | (u64::from(fresh) << FRESHNESS_SHIFT)
            | u64::from(obfuscated);

        let mut code = String::with_capacity(CODE_LEN);
        for group in 1..=CODE_LEN as u32 {
            let value = ((payload >> (PAYLOAD_BITS - 5 * group)) & SYMBOL_MASK) as u8;
            code.push(self.alphabet.symbol(value));
        }
        code
    }
}
