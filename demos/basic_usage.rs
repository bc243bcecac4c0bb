// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the INI crate.
//!
//! This example demonstrates:
//! - Parsing an INI document from an in-memory string
//! - Exact lookups in the default section and in named sections
//! - Lenient lookups with fallback values
//! - Scoping queries to one section with a view
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use inicfg::prelude::*;

const CONFIG: &str = "\
# Application configuration
environment = staging

[server]
host = localhost   ; development default
port = 8080

[database]
url = postgres://localhost/app
pool_size = 16
";

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== inicfg: Basic Usage ===\n");

    let doc: IniDocument = CONFIG.parse()?;

    // Example 1: the default section holds entries before any header
    println!("--- Example 1: Default Section ---");
    println!("environment = {}", doc.get("environment")?);

    // Example 2: exact lookups in a named section
    println!("\n--- Example 2: Named Sections ---");
    println!("server host = {}", doc.get_from("server", "host")?);
    println!("database url = {}", doc.get_from("database", "url")?);

    // Example 3: lenient lookups substitute a fallback for missing keys
    println!("\n--- Example 3: Fallbacks ---");
    let scheme = doc.get_from_or("server", "scheme", "http");
    println!("server scheme = {scheme} (fallback, not in the file)");

    // Example 4: a section view avoids repeating the section name
    println!("\n--- Example 4: Section Views ---");
    let server = doc.section("server")?;
    println!("[{}]", server.name());
    println!("  host = {}", server.get("host")?);
    println!("  port = {}", server.get("port")?);

    // Example 5: lookup failures identify what was missing
    println!("\n--- Example 5: Errors ---");
    match doc.get_from("cache", "ttl") {
        Ok(value) => println!("cache ttl = {value}"),
        Err(err) => println!("lookup failed: {err}"),
    }

    Ok(())
}
