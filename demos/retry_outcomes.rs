//! Retry Outcomes Example
//!
//! Demonstrates the `attempt` retry combinator. Shows practical patterns including:
//! - Retrying a flaky operation until it succeeds
//! - Inspecting the backoff curve before running anything
//! - Stopping nested retries with the attempted marker
//! - Turning panics into retryable failures with `wrap_async`
//!
//! Run with `--features tracing` to see the retry loop's debug events.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use ripple::prelude::*;

// ==================== Basic Attempt ====================

/// Example 1: an operation that fails twice, then succeeds.
async fn example_basic_attempt() {
    println!("\n=== Example 1: Basic Attempt ===");

    let calls = Arc::new(AtomicU32::new(0));

    let outcome = attempt(
        {
            let calls = calls.clone();
            move || {
                let calls = calls.clone();
                async move {
                    let n = calls.fetch_add(1, Ordering::SeqCst);
                    println!("  Attempt {}", n + 1);
                    if n < 2 {
                        err("transient failure")
                    } else {
                        ok("success!")
                    }
                }
            }
        },
        AttemptOptions::new()
            .with_attempts(5)
            .with_delay(Duration::from_millis(50)),
    )
    .await;

    println!("Outcome after {} calls: {}", calls.load(Ordering::SeqCst), outcome);
}

// ==================== Backoff Curve ====================

/// Example 2: the delays `attempt` will use, computed from the options alone.
fn example_backoff_curve() {
    println!("\n=== Example 2: Backoff Curve ===");

    let options = AttemptOptions::new()
        .with_attempts(5)
        .with_delay(Duration::from_millis(100))
        .with_backoff(0.5);

    println!("  before attempt 2: {:?}", options.delay());
    for count in 2..options.max_attempts() {
        println!("  before attempt {}: {:?}", count + 1, options.delay_after(count));
    }
}

// ==================== Nested Attempts ====================

/// Example 3: an inner retry marks its final failure so the outer one stops.
async fn example_nested_attempts() {
    println!("\n=== Example 3: Nested Attempts ===");

    let calls = Arc::new(AtomicU32::new(0));
    let options = AttemptOptions::new()
        .with_attempts(3)
        .with_delay(Duration::from_millis(10));

    let outcome: Outcome<(), &str> = attempt(
        {
            let calls = calls.clone();
            let options = options.clone();
            move || {
                let calls = calls.clone();
                let options = options.clone();
                async move {
                    let mut inner = attempt(
                        move || {
                            let calls = calls.clone();
                            async move {
                                calls.fetch_add(1, Ordering::SeqCst);
                                err("service down")
                            }
                        },
                        options,
                    )
                    .await;
                    inner.mark_attempted();
                    inner
                }
            }
        },
        options,
    )
    .await;

    let rendered = match outcome.as_failure() {
        Some(failure) => failure.to_string(),
        None => "Ok(())".to_string(),
    };
    println!(
        "Outcome: {} (attempted: {}), total calls: {}",
        rendered,
        outcome.is_attempted(),
        calls.load(Ordering::SeqCst)
    );
}

// ==================== Panics ====================

/// Example 4: `attempt` only retries failures it can see, so panics are
/// wrapped first.
async fn example_wrapped_panics() {
    println!("\n=== Example 4: Wrapped Panics ===");

    let calls = Arc::new(AtomicU32::new(0));

    let outcome = attempt(
        {
            let calls = calls.clone();
            move || {
                let calls = calls.clone();
                wrap_async(move || async move {
                    if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                        panic!("driver crashed");
                    }
                    "reconnected"
                })
            }
        },
        AttemptOptions::new().with_delay(Duration::from_millis(10)),
    )
    .await;

    match outcome {
        Outcome::Success(v) => println!("Recovered: {}", v),
        Outcome::Failure(f) => println!("Gave up: {}", f),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    println!("======================================");
    println!("       Retry Outcomes Example         ");
    println!("======================================");

    example_basic_attempt().await;
    example_backoff_curve();
    example_nested_attempts().await;
    example_wrapped_panics().await;

    println!("\n======================================");
    println!("           Examples Complete           ");
    println!("======================================");
}
