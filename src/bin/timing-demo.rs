// Copyright (c) 2025 - Cowboy AI, Inc.
//! Timing Demo
//!
//! Drives a debounce, a throttle and an interval loop on the tokio host and
//! logs every emission, so the timing behavior can be watched live.
//!
//! Run with: cargo run --bin timing-demo
//!
//! Optional: pass a JSON timing configuration as the first argument, e.g.
//! `cargo run --bin timing-demo -- '{"debounce_delay_ms": 300}'`

use anyhow::{Context, Result};
use cim_hooks::derive::{average, recover_with};
use cim_hooks::timing::{debounce, interval_loop, throttle, TimingConfig, TokioHost};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(json) => TimingConfig::from_json(&json).context("Invalid timing configuration")?,
        None => TimingConfig::default(),
    };
    info!("Configuration loaded:");
    info!("  - Throttle window: {:?}", config.throttle_delay());
    info!("  - Debounce delay: {:?}", config.debounce_delay());
    info!("  - Interval cadence: {} ms", config.interval_cadence_ms);

    let host = TokioHost::try_current().context("Tokio runtime not available")?;

    let debounced = debounce(
        host.clone(),
        |query: String| info!(%query, "Debounced search"),
        config.debounce_delay(),
    );
    let throttled = throttle(
        host.clone(),
        |position: u32| info!(position, "Throttled scroll"),
        config.throttle_delay(),
    );

    let samples = Arc::new(Mutex::new(Vec::new()));
    let recorder = samples.clone();
    let ticker = interval_loop(
        host.clone(),
        move || {
            let mut samples = recorder.lock();
            let next = samples.len() as f64;
            samples.push(next);
            let mean = recover_with(average(&samples), 0.0);
            info!(count = samples.len(), mean, "Interval tick");
        },
        config.cadence(),
        config.interval,
    )?;

    for (i, query) in ["c", "ci", "cim", "cim-", "cim-hooks"].into_iter().enumerate() {
        debounced.call(query.to_string());
        throttled.call(i as u32 * 10);
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    tokio::time::sleep(config.debounce_delay() + config.throttle_delay()).await;

    ticker.pause();
    info!("Interval paused");
    tokio::time::sleep(Duration::from_millis(500)).await;
    ticker.resume()?;
    info!("Interval resumed");
    tokio::time::sleep(Duration::from_millis(config.interval_cadence_ms as u64 * 2 + 50)).await;

    ticker.stop();
    info!(ticks = ticker.tick_count(), "Demo finished");
    Ok(())
}
