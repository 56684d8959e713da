use crate::integration::mocks::*;
use alloy::primitives::{Bytes, U256};
use mockito::{Matcher, Server, ServerGuard};
use name_wallet::{
	models::EVMTransactionRequest,
	services::blockchain::{BlockChainError, EvmClient, LedgerGateway},
};
use serde_json::json;

/// Mocks the connection probe every client issues at construction
async fn create_server() -> ServerGuard {
	let mut server = Server::new_async().await;
	server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({ "method": "net_version" })))
		.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"31337"}"#)
		.create_async()
		.await;
	server
}

async fn mock_method(server: &mut ServerGuard, method: &str, result: serde_json::Value) -> mockito::Mock {
	server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({ "method": method })))
		.with_body(json!({ "jsonrpc": "2.0", "id": 1, "result": result }).to_string())
		.create_async()
		.await
}

#[tokio::test]
async fn test_new_fails_when_no_endpoint_answers() {
	let mut server = Server::new_async().await;
	server.mock("POST", "/").with_status(503).create_async().await;
	let network = create_test_network_with_urls(vec![&server.url()]);

	let result = EvmClient::new(&network).await;

	assert!(matches!(result, Err(BlockChainError::ConnectionError(_))));
}

#[tokio::test]
async fn test_request_accounts() {
	let mut server = create_server().await;
	let mock = mock_method(&mut server, "eth_requestAccounts", json!([ALICE, BOB])).await;
	let client = EvmClient::new(&create_test_network_with_urls(vec![&server.url()]))
		.await
		.unwrap();

	let accounts = client.request_accounts().await.unwrap();

	assert_eq!(accounts, vec![ALICE, BOB]);
	mock.assert_async().await;
}

#[tokio::test]
async fn test_get_balance() {
	let mut server = create_server().await;
	let mock = server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({
			"method": "eth_getBalance",
			"params": [ALICE, "latest"]
		})))
		.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"0xde0b6b3a7640000"}"#)
		.create_async()
		.await;
	let client = EvmClient::new(&create_test_network_with_urls(vec![&server.url()]))
		.await
		.unwrap();

	let balance = client.get_balance(ALICE).await.unwrap();

	assert_eq!(balance, U256::from(ONE_ETHER));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_get_network_known_and_unknown_chain() {
	let mut server = create_server().await;
	mock_method(&mut server, "eth_chainId", json!("0xaa36a7")).await;
	let mut network = create_test_network_with_urls(vec![&server.url()]);
	network.chain_id = None;
	let client = EvmClient::new(&network).await.unwrap();

	let identity = client.get_network().await.unwrap();
	assert_eq!(identity.name, "sepolia");
	assert_eq!(identity.chain_id, 11155111);

	let mut local = create_server().await;
	mock_method(&mut local, "eth_chainId", json!("0x7a69")).await;
	let client = EvmClient::new(&create_test_network_with_urls(vec![&local.url()]))
		.await
		.unwrap();

	let identity = client.get_network().await.unwrap();
	assert_eq!(identity.to_string(), "Anvil (Chain ID: 31337)");
}

#[tokio::test]
async fn test_get_logs_requests_full_range() {
	let mut server = create_server().await;
	let log = registered_log(ALICE, "alice", 1);
	let mock = server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({
			"method": "eth_getLogs",
			"params": [{
				"address": CONTRACT_ADDRESS,
				"fromBlock": "0x0",
				"toBlock": "latest"
			}]
		})))
		.with_body(json!({ "jsonrpc": "2.0", "id": 1, "result": [log] }).to_string())
		.create_async()
		.await;
	let client = EvmClient::new(&create_test_network_with_urls(vec![&server.url()]))
		.await
		.unwrap();

	let logs = client.get_logs(CONTRACT_ADDRESS, 0, None).await.unwrap();

	assert_eq!(logs, vec![log]);
	mock.assert_async().await;
}

#[tokio::test]
async fn test_get_transaction_and_receipt() {
	let mut server = create_server().await;
	let hash = tx_hash(1);
	mock_method(
		&mut server,
		"eth_getTransactionByHash",
		json!({
			"hash": hash,
			"from": ALICE,
			"to": CONTRACT_ADDRESS,
			"value": "0x0",
			"blockNumber": "0x1",
			"nonce": "0x0",
			"gas": "0x5208"
		}),
	)
	.await;
	mock_method(
		&mut server,
		"eth_getTransactionReceipt",
		json!({
			"transactionHash": hash,
			"blockNumber": "0x1",
			"gasUsed": "0xcb20",
			"status": "0x1",
			"logs": []
		}),
	)
	.await;
	let client = EvmClient::new(&create_test_network_with_urls(vec![&server.url()]))
		.await
		.unwrap();

	let transaction = client.get_transaction(hash).await.unwrap();
	let receipt = client.get_transaction_receipt(hash).await.unwrap();

	assert_eq!(transaction.from, ALICE);
	assert_eq!(transaction.to, Some(CONTRACT_ADDRESS));
	assert_eq!(receipt.block_number(), 1);
	assert_eq!(receipt.gas_used(), 52_000);
}

#[tokio::test]
async fn test_missing_transaction_is_request_error() {
	let mut server = create_server().await;
	mock_method(&mut server, "eth_getTransactionByHash", serde_json::Value::Null).await;
	let client = EvmClient::new(&create_test_network_with_urls(vec![&server.url()]))
		.await
		.unwrap();

	let result = client.get_transaction(tx_hash(1)).await;

	assert_eq!(
		result,
		Err(BlockChainError::RequestError("Transaction not found".to_string()))
	);
}

#[tokio::test]
async fn test_json_rpc_error_carries_revert_reason() {
	let mut server = create_server().await;
	server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({ "method": "eth_sendTransaction" })))
		.with_body(
			r#"{"jsonrpc":"2.0","id":1,"error":{"code":3,"message":"execution reverted: name already taken"}}"#,
		)
		.create_async()
		.await;
	let client = EvmClient::new(&create_test_network_with_urls(vec![&server.url()]))
		.await
		.unwrap();

	let result = client
		.send_transaction(EVMTransactionRequest::transaction(
			ALICE,
			CONTRACT_ADDRESS,
			Bytes::from(vec![0x01]),
			None,
		))
		.await;

	match result {
		Err(BlockChainError::RequestError(msg)) => {
			assert!(msg.contains("eth_sendTransaction failed"));
			assert!(msg.contains("name already taken"));
		}
		other => panic!("expected request error, got {:?}", other),
	}
}

#[tokio::test]
async fn test_call_sends_data_field() {
	let mut server = create_server().await;
	let mock = server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({
			"method": "eth_call",
			"params": [{ "to": CONTRACT_ADDRESS, "data": "0x01020304" }, "latest"]
		})))
		.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"0x"}"#)
		.create_async()
		.await;
	let client = EvmClient::new(&create_test_network_with_urls(vec![&server.url()]))
		.await
		.unwrap();

	let output = client
		.call(EVMTransactionRequest::call(
			CONTRACT_ADDRESS,
			Bytes::from(vec![1, 2, 3, 4]),
		))
		.await
		.unwrap();

	assert!(output.is_empty());
	mock.assert_async().await;
}

#[tokio::test]
async fn test_wait_for_confirmation_polls_until_mined() {
	let mut transport = MockEVMTransportClient::new();
	let mut seq = mockall::Sequence::new();
	transport
		.expect_send_raw_request()
		.withf(|method, _| method == "eth_getTransactionReceipt")
		.times(2)
		.in_sequence(&mut seq)
		.returning(|_, _| Ok(json!({ "jsonrpc": "2.0", "id": 1, "result": null })));
	transport
		.expect_send_raw_request()
		.withf(|method, _| method == "eth_getTransactionReceipt")
		.times(1)
		.in_sequence(&mut seq)
		.returning(|_, _| {
			Ok(json!({ "jsonrpc": "2.0", "id": 1, "result": {
				"transactionHash": tx_hash(7),
				"blockNumber": "0x7",
				"gasUsed": "0x5208",
				"status": "0x1"
			}}))
		});
	let client = EvmClient::new_with_transport(transport, create_test_network_with_urls(vec![]));

	let receipt = client.wait_for_confirmation(tx_hash(7)).await.unwrap();

	assert_eq!(receipt.block_number(), 7);
}

#[tokio::test]
async fn test_wait_for_confirmation_reverted() {
	let mut transport = MockEVMTransportClient::new();
	transport.expect_send_raw_request().returning(|_, _| {
		Ok(json!({ "jsonrpc": "2.0", "id": 1, "result": {
			"transactionHash": tx_hash(8),
			"blockNumber": "0x8",
			"gasUsed": "0x5208",
			"status": "0x0"
		}}))
	});
	let client = EvmClient::new_with_transport(transport, create_test_network_with_urls(vec![]));

	let result = client.wait_for_confirmation(tx_hash(8)).await;

	assert!(matches!(result, Err(BlockChainError::TransactionError(_))));
}

#[tokio::test]
async fn test_wait_for_confirmation_times_out() {
	let mut transport = MockEVMTransportClient::new();
	transport
		.expect_send_raw_request()
		.returning(|_, _| Ok(json!({ "jsonrpc": "2.0", "id": 1, "result": null })));
	let mut network = create_test_network_with_urls(vec![]);
	network.confirmation_poll_ms = 100;
	network.confirmation_timeout_ms = 250;
	let client = EvmClient::new_with_transport(transport, network);

	let result = client.wait_for_confirmation(tx_hash(9)).await;

	match result {
		Err(BlockChainError::TransactionError(msg)) => assert!(msg.contains("not confirmed")),
		other => panic!("expected timeout, got {:?}", other),
	}
}
