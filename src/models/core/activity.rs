use alloy::primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use crate::models::{DecodedEvent, LogEntry};

/// Transaction and receipt detail of one activity item
///
/// Fetched from the ledger the first time its item is expanded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DetailRecord {
	pub tx_hash: B256,
	pub from: Address,
	pub to: Option<Address>,
	pub block_number: u64,
	pub gas_used: u64,
	/// Value attached to the transaction in wei
	pub value: U256,
}

/// One reconciled, user-relevant historical event ready for display
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActivityItem {
	/// Display line, e.g. `Registered: alice`
	pub summary: String,
	/// Log the item was built from
	pub source_log: LogEntry,
	/// Decoded form of `source_log`
	pub event: DecodedEvent,
	/// Whether the detail region is shown
	pub expanded: bool,
	/// Cached detail, never refetched once set
	pub detail: Option<DetailRecord>,
	/// Error of the last failed detail fetch, scoped to this item
	pub detail_error: Option<String>,
}

impl ActivityItem {
	pub fn new(summary: String, source_log: LogEntry, event: DecodedEvent) -> Self {
		Self {
			summary,
			source_log,
			event,
			expanded: false,
			detail: None,
			detail_error: None,
		}
	}
}

/// Result of reconciling the ledger history for an address
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum HistoryFeed {
	/// No address to reconcile against; the UI prompts for a connection
	#[default]
	NotConnected,
	/// Connected, but no log involves the address
	Empty,
	/// Matched items in chronological order
	Items(Vec<ActivityItem>),
}

impl HistoryFeed {
	/// Items of the feed, empty for both placeholder states
	pub fn items(&self) -> &[ActivityItem] {
		match self {
			Self::Items(items) => items,
			_ => &[],
		}
	}

	/// Mutable access to a single item by position
	pub fn item_mut(&mut self, index: usize) -> Option<&mut ActivityItem> {
		match self {
			Self::Items(items) => items.get_mut(index),
			_ => None,
		}
	}

	pub fn len(&self) -> usize {
		self.items().len()
	}

	pub fn is_empty(&self) -> bool {
		self.items().is_empty()
	}
}
