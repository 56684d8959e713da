//! Reconciliation of raw contract logs into an address-scoped activity feed.
//!
//! The reconciler decodes every log with the [`EventCodec`], keeps the ones
//! an address took part in, renders a summary line for each and truncates
//! the result to the most recent matches. It performs no I/O.

use crate::{
	models::{ActivityItem, ContractSpec, DecodedEvent, HistoryFeed, LogEntry},
	services::history::{
		codec::EventCodec,
		helpers::{are_same_address, format_ether, h160_to_string},
	},
	utils::constants::{MAX_HISTORY_ITEMS, NATIVE_SYMBOL},
};

/// Builds the activity feed of an address from the naming contract's logs
#[derive(Debug, Clone)]
pub struct HistoryReconciler {
	codec: EventCodec,
	max_items: usize,
}

impl HistoryReconciler {
	pub fn new(codec: EventCodec) -> Self {
		Self {
			codec,
			max_items: MAX_HISTORY_ITEMS,
		}
	}

	/// Creates a reconciler for the events of a contract ABI
	pub fn for_contract(contract: &ContractSpec) -> Self {
		Self::new(EventCodec::new(&contract.abi))
	}

	pub fn codec(&self) -> &EventCodec {
		&self.codec
	}

	/// Reconciles logs against an address
	///
	/// # Arguments
	/// * `address` - Hex address to match, compared case-insensitively
	/// * `logs` - Logs in chronological order
	///
	/// # Returns
	/// `NotConnected` without an address, `Empty` when nothing matches and
	/// otherwise at most the last 30 matching items in their original order
	pub fn reconcile(&self, address: Option<&str>, logs: &[LogEntry]) -> HistoryFeed {
		let address = match address.map(str::trim) {
			Some(address) if !address.is_empty() => address,
			_ => return HistoryFeed::NotConnected,
		};

		let mut skipped = 0usize;
		let mut items: Vec<ActivityItem> = logs
			.iter()
			.filter_map(|log| match self.codec.decode(log) {
				Some(event) => Some((log, event)),
				None => {
					skipped += 1;
					None
				}
			})
			.filter_map(|(log, event)| {
				summarize(address, &event)
					.map(|summary| ActivityItem::new(summary, log.clone(), event))
			})
			.collect();

		let matched = items.len();
		if matched > self.max_items {
			items.drain(..matched - self.max_items);
		}

		tracing::debug!(
			logs = logs.len(),
			skipped,
			matched,
			kept = items.len(),
			"Reconciled history"
		);

		if items.is_empty() {
			HistoryFeed::Empty
		} else {
			HistoryFeed::Items(items)
		}
	}
}

/// Renders the summary of an event from the point of view of `address`
///
/// # Returns
/// `None` when the address did not take part in the event
pub fn summarize(address: &str, event: &DecodedEvent) -> Option<String> {
	let is_target = |candidate| are_same_address(address, &h160_to_string(candidate));

	match event {
		DecodedEvent::NameRegistered { owner, name } => {
			is_target(*owner).then(|| format!("Registered: {}", name))
		}
		DecodedEvent::FundsSentByName {
			from,
			to_name,
			to_address,
			amount,
		} => {
			if is_target(*from) {
				Some(format!(
					"Sent {} {} → {}",
					format_ether(*amount),
					NATIVE_SYMBOL,
					to_name
				))
			} else if is_target(*to_address) {
				Some(format!(
					"Received {} {} ← {}",
					format_ether(*amount),
					NATIVE_SYMBOL,
					from.to_checksum(None)
				))
			} else {
				None
			}
		}
	}
}
