// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed value access example.
//!
//! This example demonstrates the two typed surfaces:
//! - `parse_or`, which never fails and substitutes a fallback when the key
//!   is missing or the value does not parse
//! - the strict `ConfigValue` conversions, which return errors describing
//!   the failed conversion
//!
//! To run this example:
//! ```bash
//! cargo run --example typed_values
//! ```

use inicfg::prelude::*;

const CONFIG: &str = "\
[limits]
retries = 3
timeout = 2.5
verbose = true
workers = eight   # not a number
";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== inicfg: Typed Values ===\n");

    let doc: IniDocument = CONFIG.parse()?;
    let limits = doc.section("limits")?;

    // parse_or: total lookups with a fallback
    println!("--- parse_or ---");
    println!("retries = {}", limits.parse_or("retries", 1u32));
    println!("timeout = {}", limits.parse_or("timeout", 10.0f64));
    println!("verbose = {}", limits.parse_or("verbose", false));
    // "eight" does not parse, so the fallback is returned
    println!("workers = {}", limits.parse_or("workers", 4u32));
    // missing keys also fall back
    println!("burst   = {}", limits.parse_or("burst", 64u32));

    // strict conversions: errors explain what went wrong
    println!("\n--- strict conversions ---");
    let workers = limits.get("workers")?;
    match workers.as_u64("workers") {
        Ok(n) => println!("workers = {n}"),
        Err(err) => println!("conversion failed: {err}"),
    }

    // the strict boolean conversion is lenient about spellings
    let verbose = limits.get("verbose")?;
    println!("verbose (strict) = {}", verbose.as_bool("verbose")?);

    Ok(())
}
