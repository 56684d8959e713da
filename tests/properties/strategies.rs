use alloy::{
	json_abi::JsonAbi,
	primitives::{address, Address, Bytes, Log as PrimitiveLog, LogData, B256, U256},
	rpc::types::Log as RpcLog,
	sol,
	sol_types::SolEvent,
};
use name_wallet::{
	models::LogEntry,
	services::history::{EventCodec, HistoryReconciler},
};
use proptest::prelude::*;
use serde_json::json;

const MIN_COLLECTION_SIZE: usize = 0;
const MAX_COLLECTION_SIZE: usize = 80;

sol! {
	event NameRegistered(address indexed owner, string name);
	event SentByName(address indexed from, string toName, address indexed toAddress, uint256 amount);
}

pub const CONTRACT_ADDRESS: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");

/// Accounts the generated logs are drawn from; the first one is the viewer
pub const ACCOUNTS: [Address; 4] = [
	address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8"),
	address!("0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC"),
	address!("0x90F79bf6EB2c4f870365E785982E1f101E93b906"),
	address!("0x15d34AAf54267DB7D7c367839AAf71A00a2C6A65"),
];

pub fn viewer() -> Address {
	ACCOUNTS[0]
}

/// Shape of one generated contract log
#[derive(Debug, Clone)]
pub enum LogSpec {
	Registered { owner: usize, name: String },
	Sent { from: usize, to: usize, to_name: String, wei: u64 },
	Malformed,
}

impl LogSpec {
	/// Whether the log involves the viewer
	pub fn involves_viewer(&self) -> bool {
		match self {
			Self::Registered { owner, .. } => *owner == 0,
			Self::Sent { from, to, .. } => *from == 0 || *to == 0,
			Self::Malformed => false,
		}
	}

	pub fn to_log(&self, block: u64) -> LogEntry {
		let data = match self {
			Self::Registered { owner, name } => NameRegistered {
				owner: ACCOUNTS[*owner],
				name: name.clone(),
			}
			.encode_log_data(),
			Self::Sent {
				from,
				to,
				to_name,
				wei,
			} => SentByName {
				from: ACCOUNTS[*from],
				toName: to_name.clone(),
				toAddress: ACCOUNTS[*to],
				amount: U256::from(*wei),
			}
			.encode_log_data(),
			Self::Malformed => LogData::new_unchecked(
				vec![NameRegistered::SIGNATURE_HASH, viewer().into_word()],
				Bytes::from(vec![0x00, 0x01]),
			),
		};

		LogEntry(RpcLog {
			inner: PrimitiveLog {
				address: CONTRACT_ADDRESS,
				data,
			},
			block_number: Some(block),
			transaction_hash: Some(B256::from(U256::from(block))),
			..Default::default()
		})
	}
}

pub fn log_spec_strategy() -> impl Strategy<Value = LogSpec> {
	let account = 0..ACCOUNTS.len();
	prop_oneof![
		4 => (account.clone(), "[a-z0-9]{1,12}")
			.prop_map(|(owner, name)| LogSpec::Registered { owner, name }),
		5 => (account.clone(), account, "[a-z0-9]{1,12}", any::<u64>()).prop_map(
			|(from, to, to_name, wei)| LogSpec::Sent {
				from,
				to,
				to_name,
				wei,
			}
		),
		1 => Just(LogSpec::Malformed),
	]
}

/// Chronological log sequences, block numbers ascending from 1
pub fn log_sequence_strategy() -> impl Strategy<Value = (Vec<LogSpec>, Vec<LogEntry>)> {
	prop::collection::vec(log_spec_strategy(), MIN_COLLECTION_SIZE..MAX_COLLECTION_SIZE).prop_map(
		|specs| {
			let logs = specs
				.iter()
				.enumerate()
				.map(|(i, spec)| spec.to_log(i as u64 + 1))
				.collect();
			(specs, logs)
		},
	)
}

pub fn create_reconciler() -> HistoryReconciler {
	let abi: JsonAbi = serde_json::from_value(json!([
		{ "type": "event", "name": "NameRegistered", "anonymous": false,
		  "inputs": [
			{ "name": "owner", "type": "address", "indexed": true },
			{ "name": "name", "type": "string", "indexed": false }
		  ] },
		{ "type": "event", "name": "SentByName", "anonymous": false,
		  "inputs": [
			{ "name": "from", "type": "address", "indexed": true },
			{ "name": "toName", "type": "string", "indexed": false },
			{ "name": "toAddress", "type": "address", "indexed": true },
			{ "name": "amount", "type": "uint256", "indexed": false }
		  ] }
	]))
	.unwrap();
	HistoryReconciler::new(EventCodec::new(&abi))
}
