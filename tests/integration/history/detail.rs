use crate::integration::mocks::*;
use mockall::predicate;
use name_wallet::{
	models::{ActivityItem, DetailRecord},
	services::{
		blockchain::BlockChainError,
		history::{expand_item, expand_items, toggle_item, HistoryError, HistoryReconciler},
	},
};

fn create_items(logs: &[name_wallet::models::LogEntry]) -> Vec<ActivityItem> {
	HistoryReconciler::for_contract(&create_contract_spec())
		.reconcile(Some(&ALICE.to_string()), logs)
		.items()
		.to_vec()
}

fn expect_detail(gateway: &mut MockLedgerGateway, block: u8, to: Option<alloy::primitives::Address>, times: usize) {
	let hash = tx_hash(block);
	gateway
		.expect_get_transaction()
		.with(predicate::eq(hash))
		.times(times)
		.returning(move |hash| Ok(create_transaction(hash, ALICE, to, ONE_ETHER)));
	gateway
		.expect_get_transaction_receipt()
		.with(predicate::eq(hash))
		.times(times)
		.returning(move |hash| Ok(create_receipt(hash, block as u64, 52_000)));
}

#[tokio::test]
async fn test_toggle_twice_fetches_once() {
	let mut items = create_items(&[registered_log(ALICE, "alice", 1)]);
	let mut gateway = MockLedgerGateway::new();
	expect_detail(&mut gateway, 1, Some(CONTRACT_ADDRESS), 1);

	let item = &mut items[0];
	assert!(toggle_item(item, &gateway).await);
	assert!(!toggle_item(item, &gateway).await);
	assert!(toggle_item(item, &gateway).await);

	assert!(item.expanded);
	assert_eq!(
		item.detail,
		Some(DetailRecord {
			tx_hash: tx_hash(1),
			from: ALICE,
			to: Some(CONTRACT_ADDRESS),
			block_number: 1,
			gas_used: 52_000,
			value: alloy::primitives::U256::from(ONE_ETHER),
		})
	);
}

#[tokio::test]
async fn test_expand_item_uses_cache() {
	let mut items = create_items(&[registered_log(ALICE, "alice", 1)]);
	let mut gateway = MockLedgerGateway::new();
	expect_detail(&mut gateway, 1, Some(CONTRACT_ADDRESS), 1);

	let first = expand_item(&mut items[0], &gateway).await.unwrap();
	let second = expand_item(&mut items[0], &gateway).await.unwrap();

	assert_eq!(first, second);
}

#[tokio::test]
async fn test_missing_to_falls_back_to_event_recipient() {
	let mut items = create_items(&[sent_log(ALICE, "bob", BOB, ONE_ETHER, 4)]);
	let mut gateway = MockLedgerGateway::new();
	expect_detail(&mut gateway, 4, None, 1);

	let detail = expand_item(&mut items[0], &gateway).await.unwrap();

	assert_eq!(detail.to, Some(BOB));
}

#[tokio::test]
async fn test_failed_fetch_is_scoped_to_item_and_retried_on_next_open() {
	let mut items = create_items(&[registered_log(ALICE, "alice", 1)]);
	let mut gateway = MockLedgerGateway::new();
	let mut seq = mockall::Sequence::new();
	gateway
		.expect_get_transaction()
		.times(1)
		.in_sequence(&mut seq)
		.returning(|_| Err(BlockChainError::request_error("Transaction not found")));
	gateway
		.expect_get_transaction()
		.times(1)
		.in_sequence(&mut seq)
		.returning(|hash| Ok(create_transaction(hash, ALICE, Some(CONTRACT_ADDRESS), 0)));
	gateway
		.expect_get_transaction_receipt()
		.times(1)
		.returning(|hash| Ok(create_receipt(hash, 1, 21_000)));

	let item = &mut items[0];
	assert!(toggle_item(item, &gateway).await);
	assert!(item.detail.is_none());
	assert_eq!(
		item.detail_error.as_deref(),
		Some("Detail fetch error: Request error: Transaction not found")
	);
	assert_eq!(item.summary, "Registered: alice");

	toggle_item(item, &gateway).await;
	assert!(toggle_item(item, &gateway).await);
	assert!(item.detail.is_some());
	assert!(item.detail_error.is_none());
}

#[tokio::test]
async fn test_log_without_transaction_hash() {
	let mut log = registered_log(ALICE, "alice", 1);
	log.0.transaction_hash = None;
	let mut items = create_items(&[log]);
	let gateway = MockLedgerGateway::new();

	let result = expand_item(&mut items[0], &gateway).await;

	assert!(matches!(result, Err(HistoryError::DecodeError(_))));
	assert!(items[0].detail_error.is_some());
}

#[tokio::test]
async fn test_expand_items_expands_each_item() {
	let mut items = create_items(&[
		registered_log(ALICE, "alice", 1),
		sent_log(ALICE, "bob", BOB, ONE_ETHER, 2),
		sent_log(CAROL, "alice", ALICE, ONE_ETHER, 3),
	]);
	let mut gateway = MockLedgerGateway::new();
	gateway
		.expect_get_transaction()
		.times(3)
		.returning(|hash| {
			if hash == tx_hash(3) {
				Err(BlockChainError::request_error("Transaction not found"))
			} else {
				Ok(create_transaction(hash, ALICE, Some(CONTRACT_ADDRESS), 0))
			}
		});
	gateway
		.expect_get_transaction_receipt()
		.times(2)
		.returning(|hash| Ok(create_receipt(hash, 1, 21_000)));

	let results = expand_items(&mut items, &gateway).await;

	assert_eq!(results.len(), 3);
	assert!(results[0].is_ok());
	assert!(results[1].is_ok());
	assert!(results[2].is_err());
	assert!(items.iter().all(|item| item.expanded));
	assert!(items[2].detail_error.is_some());
	assert!(items[0].detail_error.is_none());
}
