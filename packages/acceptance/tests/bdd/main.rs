//! BDD Test Runner for Quilt
//!
//! Drives the Gherkin features in the workspace `features/` directory
//! against the instance reachable as `quilt:80`, the host name the Quilt
//! container gets on the test network.
//!
//! Every feature opens with the `Given a running instance of Quilt`
//! background, so the TCP check runs before each scenario. While Quilt is
//! still starting it holds the scenario for up to 120 seconds, and once
//! that fails the rest of the scenario is skipped rather than reported as
//! a page error. Each scenario gets a fresh `QuiltWorld`, so pages loaded
//! in one scenario never leak into the next. Scenarios run one at a time.
//!
//! The target is only built with the `live` feature:
//!
//! ```bash
//! cargo test -p quilt-acceptance --features live --test bdd
//! RUST_LOG=quilt_acceptance=debug cargo test -p quilt-acceptance --features live --test bdd
//! ```

// Allow panic/expect in test code - these are appropriate for test setup
#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

mod world;

use cucumber::World;
use std::path::Path;

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .init();

    // Find the features directory relative to the package
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let features_dir = Path::new(manifest_dir)
        .parent() // packages/
        .and_then(|p| p.parent()) // project root
        .map(|p| p.join("features"))
        .expect("Could not find features directory");

    if !features_dir.exists() {
        panic!("Features directory not found: {}", features_dir.display());
    }

    world::QuiltWorld::cucumber()
        .max_concurrent_scenarios(1) // One browser session at a time
        .with_default_cli()
        .run_and_exit(features_dir)
        .await;
}
