use crate::errors::CodecError;

pub const KEY_ROWS: usize = 16;             // one row per freshness value
pub const KEY_COLS: usize = 8;              // one weight per identifier nibble
pub const ALPHABET_LEN: usize = 32;         // 5-bit symbol space
pub const CODE_LEN: usize = 10;             // 50 payload bits / 5 bits per symbol
pub const SIGNATURE_BITS: u32 = 14;
pub const FRESHNESS_BITS: u32 = 4;
pub const IDENTIFIER_BITS: u32 = 32;
pub const PAYLOAD_BITS: u32 = SIGNATURE_BITS + FRESHNESS_BITS + IDENTIFIER_BITS;
pub const SIGNATURE_MAX: u32 = (1 << SIGNATURE_BITS) - 1; // 16383
pub const NIBBLE_MAX: u32 = 0xF;

/// The keyed-transform table: 16 rows of 8 weights. Row selection is driven by
/// the per-code freshness value; the weights feed both the weighted-sum
/// signature and the per-nibble XOR obfuscation.
///
/// Construction rejects any row whose maximum attainable signature
/// (`15 * Σ row`) exceeds [`SIGNATURE_MAX`], so the 14-bit signature field can
/// never silently truncate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTable {
    rows: [[u16; KEY_COLS]; KEY_ROWS],
}

impl KeyTable {
    /// Build a key table from fixed-shape rows.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::SignatureCapacity` if any row could drive the
    /// weighted sum past the 14-bit signature field.
    pub fn new(rows: [[u16; KEY_COLS]; KEY_ROWS]) -> Result<Self, CodecError> {
        for (row, weights) in rows.iter().enumerate() {
            let row_sum: u32 = weights.iter().map(|&w| u32::from(w)).sum();
            let max_sum = NIBBLE_MAX * row_sum;
            if max_sum > SIGNATURE_MAX {
                return Err(CodecError::SignatureCapacity {
                    row,
                    max_sum,
                    capacity: SIGNATURE_MAX,
                });
            }
        }
        Ok(Self { rows })
    }

    /// Build a key table from dynamically shaped rows, validating the 16x8
    /// shape before the capacity check.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::KeyTableRows`, `CodecError::KeyTableRowLength`, or
    /// `CodecError::SignatureCapacity` on a malformed table.
    pub fn from_rows(rows: &[Vec<u16>]) -> Result<Self, CodecError> {
        if rows.len() != KEY_ROWS {
            return Err(CodecError::KeyTableRows {
                expected: KEY_ROWS,
                got: rows.len(),
            });
        }
        let mut fixed = [[0u16; KEY_COLS]; KEY_ROWS];
        for (row, weights) in rows.iter().enumerate() {
            if weights.len() != KEY_COLS {
                return Err(CodecError::KeyTableRowLength {
                    row,
                    expected: KEY_COLS,
                    got: weights.len(),
                });
            }
            fixed[row].copy_from_slice(weights);
        }
        Self::new(fixed)
    }

    #[must_use]
    pub const fn rows(&self) -> &[[u16; KEY_COLS]; KEY_ROWS] {
        &self.rows
    }

    pub(crate) const fn row(&self, fresh: u8) -> &[u16; KEY_COLS] {
        &self.rows[fresh as usize]
    }
}

/// The output character set: 32 distinct symbols, one per 5-bit payload group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [char; ALPHABET_LEN],
}

const STANDARD_SYMBOLS: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '2', '3', '4', '5', '6', '7', '8', '9',
];

impl Alphabet {
    /// Build an alphabet from exactly 32 symbols.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::DuplicateSymbol` if any symbol repeats; repeated
    /// symbols would make decoding ambiguous.
    pub fn new(symbols: [char; ALPHABET_LEN]) -> Result<Self, CodecError> {
        for (i, &symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(&symbol) {
                return Err(CodecError::DuplicateSymbol { symbol });
            }
        }
        Ok(Self { symbols })
    }

    /// Build an alphabet from a dynamically sized symbol slice.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::AlphabetLength` or `CodecError::DuplicateSymbol`
    /// on a malformed symbol set.
    pub fn from_symbols(symbols: &[char]) -> Result<Self, CodecError> {
        if symbols.len() != ALPHABET_LEN {
            return Err(CodecError::AlphabetLength {
                expected: ALPHABET_LEN,
                got: symbols.len(),
            });
        }
        let mut fixed = ['\0'; ALPHABET_LEN];
        fixed.copy_from_slice(symbols);
        Self::new(fixed)
    }

    /// The reference character set: uppercase letters and digits with the
    /// easily confused `0`, `1`, `I`, and `O` left out.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            symbols: STANDARD_SYMBOLS,
        }
    }

    #[must_use]
    pub const fn symbols(&self) -> &[char; ALPHABET_LEN] {
        &self.symbols
    }

    pub(crate) const fn symbol(&self, value: u8) -> char {
        self.symbols[value as usize]
    }

    pub(crate) fn index_of(&self, symbol: char) -> Option<u8> {
        self.symbols
            .iter()
            .position(|&s| s == symbol)
            .map(|i| i as u8)
    }
}
