//! Print a fresh random key table as a Rust array literal, ready to paste
//! into a deployment's configuration. Keep the output secret.

use rand_core::OsRng;
use redeemcode::{random_key_table, CodecError};

fn main() -> Result<(), CodecError> {
    let table = random_key_table(&mut OsRng)?;
    println!("Here is your random key table, keep it out of version control:");
    println!("const KEY_ROWS: [[u16; 8]; 16] = [");
    for row in table.rows() {
        let weights: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("    [{}],", weights.join(", "));
    }
    println!("];");
    Ok(())
}
