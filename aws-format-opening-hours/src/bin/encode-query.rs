//! Prints the base64 query for a JSON request file, for calling the
//! function by hand: `encode-query request.json`

use opening_hours_libs::request::encode_query;
use std::env;
use std::error::Error;
use std::fs;

fn main() -> Result<(), Box<dyn Error>> {
    let path = env::args()
        .nth(1)
        .ok_or("usage: encode-query <request.json>")?;

    let json = fs::read_to_string(&path)?;
    println!("{}", encode_query(&json)?);

    Ok(())
}
