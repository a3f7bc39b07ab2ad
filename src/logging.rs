// ABOUTME: Tracing subscriber setup writing compact structured logs to stderr
// ABOUTME: RUST_LOG overrides the configured level; stdout stays free for command output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 meetprep contributors

//! Structured logging built on `tracing`.

use std::env;
use std::io;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{AppConfig, LogLevel};
use crate::errors::{AppError, AppResult};

/// Initialize the global tracing subscriber at the given base level
///
/// A `RUST_LOG` directive replaces the base level entirely, so individual
/// modules can still be tuned in the field.
///
/// # Errors
///
/// Returns a `ConfigError` when a subscriber is already installed.
pub fn init(level: LogLevel) -> AppResult<()> {
    let env_filter = env::var(EnvFilter::DEFAULT_ENV).map_or_else(
        |_| EnvFilter::default().add_directive(level.to_tracing_level().into()),
        EnvFilter::new,
    );

    let fmt_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(io::stderr)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| {
            AppError::config("tracing subscriber already initialized").with_source(err)
        })?;

    Ok(())
}

/// Initialize logging from the environment-resolved configuration
///
/// # Errors
///
/// Returns a `ConfigError` when a subscriber is already installed.
pub fn init_from_env() -> AppResult<()> {
    init(AppConfig::from_env().log_level)
}
