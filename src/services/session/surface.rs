//! Presentation of session state.
//!
//! The controller renders through [`PresentationSurface`]; the terminal
//! implementation writes plain text lines to any writer.

use std::{io::Write, sync::Mutex};

use crate::{
	models::{ActivityItem, DetailRecord, HistoryFeed, LookupResult, WalletView},
	services::history::{b256_to_string, format_ether},
	utils::constants::NATIVE_SYMBOL,
};

/// Interface the controller renders its state through
pub trait PresentationSurface: Send + Sync {
	/// Renders the dashboard of the connected (or disconnected) account
	fn render_wallet(&self, view: &WalletView);

	/// Renders the activity feed, including open item details
	fn render_history(&self, feed: &HistoryFeed);

	/// Renders the outcome of a name or address lookup
	fn render_lookup(&self, result: &LookupResult);

	/// Shows a one-off message to the user
	fn alert(&self, message: &str);
}

/// Plain text surface writing to a terminal or any other writer
pub struct TerminalSurface<W: Write + Send> {
	out: Mutex<W>,
}

impl TerminalSurface<std::io::Stdout> {
	pub fn stdout() -> Self {
		Self::new(std::io::stdout())
	}
}

impl<W: Write + Send> TerminalSurface<W> {
	pub fn new(out: W) -> Self {
		Self {
			out: Mutex::new(out),
		}
	}

	/// Consumes the surface and returns the writer
	pub fn into_inner(self) -> W {
		match self.out.into_inner() {
			Ok(out) => out,
			Err(poisoned) => poisoned.into_inner(),
		}
	}

	fn write_lines(&self, lines: &[String]) {
		let mut out = match self.out.lock() {
			Ok(out) => out,
			Err(poisoned) => poisoned.into_inner(),
		};
		for line in lines {
			if let Err(e) = writeln!(out, "{}", line) {
				tracing::warn!(error = %e, "Failed to write to terminal");
				return;
			}
		}
		if let Err(e) = out.flush() {
			tracing::warn!(error = %e, "Failed to flush terminal output");
		}
	}
}

impl<W: Write + Send> PresentationSurface for TerminalSurface<W> {
	fn render_wallet(&self, view: &WalletView) {
		self.write_lines(&wallet_lines(view));
	}

	fn render_history(&self, feed: &HistoryFeed) {
		self.write_lines(&history_lines(feed));
	}

	fn render_lookup(&self, result: &LookupResult) {
		self.write_lines(&[result.to_string()]);
	}

	fn alert(&self, message: &str) {
		self.write_lines(&[message.to_string()]);
	}
}

pub fn wallet_lines(view: &WalletView) -> Vec<String> {
	let Some(address) = &view.address else {
		return vec!["Wallet: Not connected".to_string()];
	};

	let mut lines = vec![format!("Wallet: {}", address)];
	lines.extend(view.balance.iter().cloned());
	lines.extend(view.name.iter().cloned());
	lines.extend(view.network.iter().cloned());
	if view.can_register {
		lines.push("Register a name to receive funds by name".to_string());
	}
	lines
}

pub fn history_lines(feed: &HistoryFeed) -> Vec<String> {
	match feed {
		HistoryFeed::NotConnected => {
			vec!["Connect your wallet first to view transaction history".to_string()]
		}
		HistoryFeed::Empty => vec!["No history found for this account".to_string()],
		HistoryFeed::Items(items) => items
			.iter()
			.enumerate()
			.flat_map(|(index, item)| item_lines(index, item))
			.collect(),
	}
}

fn item_lines(index: usize, item: &ActivityItem) -> Vec<String> {
	let mut lines = vec![format!("[{}] {}", index, item.summary)];
	if !item.expanded {
		return lines;
	}

	match (&item.detail, &item.detail_error) {
		(Some(detail), _) => lines.extend(detail_lines(detail)),
		(None, Some(_)) => lines.push("    Error loading details".to_string()),
		(None, None) => lines.push("    Loading...".to_string()),
	}
	lines
}

fn detail_lines(detail: &DetailRecord) -> Vec<String> {
	vec![
		format!("    Tx Hash: {}", b256_to_string(detail.tx_hash)),
		format!("    From: {}", detail.from.to_checksum(None)),
		format!(
			"    To: {}",
			detail
				.to
				.map(|to| to.to_checksum(None))
				.unwrap_or_else(|| "-".to_string())
		),
		format!("    Block: {}", detail.block_number),
		format!("    Gas Used: {}", detail.gas_used),
		format!("    Value: {} {}", format_ether(detail.value), NATIVE_SYMBOL),
	]
}
