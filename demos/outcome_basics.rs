//! Outcome Basics Example
//!
//! Demonstrates the `Outcome` algebra:
//! - Building outcomes and chaining `map` / `and_then` / `map_err`
//! - Extracting values at the boundary
//! - Iterating a successful collection
//! - Capturing panics with `wrap`

use ripple::prelude::*;

#[derive(Debug)]
enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

fn read(key: &'static str) -> Outcome<String, ConfigError> {
    match key {
        "port" => ok("8080".to_string()),
        "workers" => ok("many".to_string()),
        _ => err(ConfigError::Missing(key)),
    }
}

fn number(key: &'static str) -> Outcome<u32, ConfigError> {
    read(key).and_then(|raw| match raw.parse::<u32>() {
        Ok(n) => ok(n),
        Err(_) => err(ConfigError::Invalid { key, value: raw }),
    })
}

fn example_chaining() {
    println!("\n=== Example 1: Chaining ===");

    for key in ["port", "workers", "timeout"] {
        let described = number(key)
            .map(|n| format!("{} = {}", key, n))
            .map_err(|e| format!("{:?}", e));
        println!("  {}", described);
    }
}

fn example_boundary() {
    println!("\n=== Example 2: Extracting at the Boundary ===");

    let port = number("port").unwrap_or(80);
    let workers = number("workers").unwrap_or_else(|e| {
        println!("  falling back, {:?}", e);
        4
    });
    println!("  port={} workers={}", port, workers);
}

fn example_iteration() {
    println!("\n=== Example 3: Iteration ===");

    let hosts: Outcome<Vec<&str>, ConfigError> = ok(vec!["a.internal", "b.internal"]);
    for host in &hosts {
        println!("  host {}", host);
    }

    let missing: Outcome<Vec<&str>, ConfigError> = err(ConfigError::Missing("hosts"));
    println!("  hosts from a failure: {}", missing.into_iter().count());
}

fn example_wrap() {
    println!("\n=== Example 4: Capturing Panics ===");

    let parsed = wrap(|| "17".parse::<u8>().unwrap());
    println!("  parsed: {:?}", parsed.into_value());

    let crashed = wrap(|| "seventeen".parse::<u8>().unwrap());
    if let Some(panicked) = crashed.into_error() {
        println!("  captured: {}", panicked);
    }
}

fn main() {
    println!("======================================");
    println!("       Outcome Basics Example         ");
    println!("======================================");

    example_chaining();
    example_boundary();
    example_iteration();
    example_wrap();

    println!("\n======================================");
    println!("           Examples Complete           ");
    println!("======================================");
}
