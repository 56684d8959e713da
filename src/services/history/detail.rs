//! Lazy detail expansion of activity items.
//!
//! The transaction and receipt behind an item are fetched the first time the
//! item is opened and cached on the item. A failed fetch is recorded on that
//! item only and is attempted again on the next expansion.

use futures::future::join_all;

use crate::{
	models::{ActivityItem, DetailRecord},
	services::{blockchain::LedgerGateway, history::error::HistoryError},
};

/// Returns the detail of an item, fetching it if it is not cached yet
///
/// # Arguments
/// * `item` - Item to expand; receives the cached detail or the fetch error
/// * `gateway` - Ledger used for the transaction and receipt lookups
///
/// # Errors
/// Returns an error if the item's log carries no transaction hash or if
/// either lookup fails
pub async fn expand_item<G: LedgerGateway + ?Sized>(
	item: &mut ActivityItem,
	gateway: &G,
) -> Result<DetailRecord, HistoryError> {
	if let Some(detail) = &item.detail {
		return Ok(detail.clone());
	}

	match fetch_detail(item, gateway).await {
		Ok(detail) => {
			item.detail = Some(detail.clone());
			item.detail_error = None;
			Ok(detail)
		}
		Err(e) => {
			tracing::warn!(summary = %item.summary, error = %e, "Failed to load activity detail");
			item.detail_error = Some(e.to_string());
			Err(e)
		}
	}
}

async fn fetch_detail<G: LedgerGateway + ?Sized>(
	item: &ActivityItem,
	gateway: &G,
) -> Result<DetailRecord, HistoryError> {
	let tx_hash = item
		.source_log
		.transaction_hash()
		.ok_or_else(|| HistoryError::decode_error("Log has no transaction hash"))?;

	let transaction = gateway.get_transaction(tx_hash).await?;
	let receipt = gateway.get_transaction_receipt(tx_hash).await?;

	Ok(DetailRecord {
		tx_hash,
		from: transaction.from,
		to: transaction.to.or_else(|| item.event.recipient()),
		block_number: receipt.block_number(),
		gas_used: receipt.gas_used(),
		value: transaction.value,
	})
}

/// Flips the expanded state of an item
///
/// Opening an item without cached detail fetches it; closing never does.
///
/// # Returns
/// The new expanded state
pub async fn toggle_item<G: LedgerGateway + ?Sized>(item: &mut ActivityItem, gateway: &G) -> bool {
	if item.expanded {
		item.expanded = false;
		return false;
	}

	item.expanded = true;
	if item.detail.is_none() {
		// Failure is kept in `detail_error`
		let _ = expand_item(item, gateway).await;
	}
	true
}

/// Opens and expands every item concurrently
///
/// # Returns
/// One result per item, in item order
pub async fn expand_items<G: LedgerGateway + ?Sized>(
	items: &mut [ActivityItem],
	gateway: &G,
) -> Vec<Result<DetailRecord, HistoryError>> {
	join_all(items.iter_mut().map(|item| {
		item.expanded = true;
		expand_item(item, gateway)
	}))
	.await
}
