//! Logging utilities for the application
//!
//! Logging is configured from the environment:
//! - `RUST_LOG` or `LOG_LEVEL` select the level (default `info`)
//! - `LOG_MODE=file` writes to a daily rolling file instead of stderr
//! - `LOG_DATA_DIR` is the directory of the log files (default `logs/`)
//!
//! Stdout is left to the wallet's own output. Records emitted through the
//! `log` facade are forwarded into the same subscriber.
use std::{env, path::PathBuf};

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Directory used for log files when `LOG_DATA_DIR` is not set
pub const DEFAULT_LOG_DIR: &str = "logs/";

/// File name prefix of the rolling log files
pub const LOG_FILE_PREFIX: &str = "name-wallet.log";

type SetupResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

/// Setup logging for the application
///
/// Writes to stderr unless `LOG_MODE` is `file`.
pub fn setup_logging() -> SetupResult {
	let mode = env::var("LOG_MODE").unwrap_or_default();
	if mode.eq_ignore_ascii_case("file") {
		let dir = log_dir(env::var("LOG_DATA_DIR").ok().as_deref());
		std::fs::create_dir_all(&dir)?;
		let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
		setup_logging_with_writer(appender, false)
	} else {
		setup_logging_with_writer(std::io::stderr, true)
	}
}

/// Setup logging for the application with a custom writer
pub fn setup_logging_with_writer<W>(writer: W, ansi: bool) -> SetupResult
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	let directive = log_directive(
		env::var("RUST_LOG").ok().as_deref(),
		env::var("LOG_LEVEL").ok().as_deref(),
	);
	let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(writer)
				.with_ansi(ansi)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.compact(),
				)
				.fmt_fields(fmt::format::PrettyFields::new()),
		)
		.try_init()?;
	Ok(())
}

/// Filter directive from `RUST_LOG`, then `LOG_LEVEL`, then `info`
pub fn log_directive(rust_log: Option<&str>, log_level: Option<&str>) -> String {
	[rust_log, log_level]
		.into_iter()
		.flatten()
		.map(str::trim)
		.find(|value| !value.is_empty())
		.unwrap_or("info")
		.to_lowercase()
}

/// Log file directory, `logs/` unless configured
pub fn log_dir(configured: Option<&str>) -> PathBuf {
	match configured.map(str::trim) {
		Some(dir) if !dir.is_empty() => PathBuf::from(dir),
		_ => PathBuf::from(DEFAULT_LOG_DIR),
	}
}
