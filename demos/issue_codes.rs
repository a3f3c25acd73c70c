//! Generate a batch of codes from a freshly provisioned key table and parse
//! one back.

use rand_core::OsRng;
use redeemcode::{random_key_table, Alphabet, Codec, CodecError};

fn main() -> Result<(), CodecError> {
    let table = random_key_table(&mut OsRng)?;
    let codec = Codec::new(table, Alphabet::standard());

    let code = codec.generate(100_001);
    println!("Generated code: {code}");
    let id = codec.parse(&code)?;
    println!("Parsed id: {id}");

    let batch = codec.batch_generate(100_001, 10)?;
    println!("Batch of 10:");
    for (i, code) in batch.iter().enumerate() {
        println!("  {:>7}  {code}", 100_001 + i);
    }
    Ok(())
}
