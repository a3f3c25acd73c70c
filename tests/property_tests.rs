//! Property-based tests for the redemption code codec

use proptest::prelude::*;
use rand_core::OsRng;
use redeemcode::*;

fn any_key_table() -> impl Strategy<Value = KeyTable> {
    // Weights below 100 always satisfy the signature capacity invariant.
    prop::collection::vec(prop::collection::vec(0u16..100, KEY_COLS), KEY_ROWS)
        .prop_map(|rows| KeyTable::from_rows(&rows).expect("bounded weights validate"))
}

// Property test: round-trip holds for every identifier and freshness value
proptest! {
    #[test]
    fn round_trip_recovers_the_identifier(
        table in any_key_table(),
        id in any::<u32>(),
        fresh in 0u8..16
    ) {
        let codec = Codec::new(table, Alphabet::standard());
        let code = codec.generate_with_freshness(id, fresh).unwrap();
        prop_assert_eq!(codec.parse(&code).unwrap(), id);
    }
}

// Property test: generation at fixed freshness is a pure function
proptest! {
    #[test]
    fn fixed_freshness_generation_deterministic(
        table in any_key_table(),
        id in any::<u32>(),
        fresh in 0u8..16
    ) {
        let codec = Codec::new(table, Alphabet::standard());
        let first = codec.generate_with_freshness(id, fresh).unwrap();
        let second = codec.generate_with_freshness(id, fresh).unwrap();
        prop_assert_eq!(first, second);
    }
}

// Property test: every emitted symbol belongs to the configured alphabet
proptest! {
    #[test]
    fn alphabet_closure(
        table in any_key_table(),
        id in any::<u32>()
    ) {
        let alphabet = Alphabet::standard();
        let codec = Codec::new(table, alphabet.clone());
        let code = codec.generate(id);
        prop_assert_eq!(code.chars().count(), CODE_LEN);
        for symbol in code.chars() {
            prop_assert!(alphabet.symbols().contains(&symbol));
        }
    }
}

// Property test: a single-symbol mutation never parses back to the original
proptest! {
    #[test]
    fn single_symbol_mutation_never_yields_original_id(
        table in any_key_table(),
        id in any::<u32>(),
        fresh in 0u8..16,
        position in 0usize..CODE_LEN,
        replacement in 0usize..ALPHABET_LEN
    ) {
        let alphabet = Alphabet::standard();
        let codec = Codec::new(table, alphabet.clone());
        let code = codec.generate_with_freshness(id, fresh).unwrap();
        let mut symbols: Vec<char> = code.chars().collect();
        prop_assume!(symbols[position] != alphabet.symbols()[replacement]);
        symbols[position] = alphabet.symbols()[replacement];
        let mutated: String = symbols.into_iter().collect();
        // A mutation may land on another valid code, but never on one that
        // decodes to the identifier it was mutated from.
        if let Ok(parsed) = codec.parse(&mutated) {
            prop_assert_ne!(parsed, id);
        }
    }
}

// Property test: batch output index i decodes to start + i
proptest! {
    #[test]
    fn batch_correspondence(
        table in any_key_table(),
        start in 0u32..=u32::MAX - 64,
        count in 0u32..64
    ) {
        let codec = Codec::new(table, Alphabet::standard());
        let codes = codec.batch_generate(start, count).unwrap();
        prop_assert_eq!(codes.len(), count as usize);
        for (i, code) in codes.iter().enumerate() {
            prop_assert_eq!(codec.parse(code).unwrap(), start + i as u32);
        }
    }
}

// Property test: parse rejects strings of any length other than 10
proptest! {
    #[test]
    fn parse_rejects_wrong_lengths(
        table in any_key_table(),
        code in "[A-HJ-NP-Z2-9]{0,20}"
    ) {
        prop_assume!(code.chars().count() != CODE_LEN);
        let codec = Codec::new(table, Alphabet::standard());
        prop_assert!(
            matches!(codec.parse(&code), Err(CodecError::CodeLength { .. })),
            "expected CodeLength error for wrong-length input"
        );
    }
}

#[test]
fn freshly_provisioned_tables_round_trip() {
    let table = random_key_table(&mut OsRng).unwrap();
    let codec = Codec::new(table, Alphabet::standard());
    for id in [0u32, 100_001, u32::MAX] {
        for fresh in 0..16u8 {
            let code = codec.generate_with_freshness(id, fresh).unwrap();
            assert_eq!(codec.parse(&code).unwrap(), id);
        }
    }
}
