#![no_main]

use alloy::{
	json_abi::JsonAbi,
	primitives::{Bytes, Log as PrimitiveLog, LogData, B256},
	rpc::types::Log as RpcLog,
};
use libfuzzer_sys::fuzz_target;
use name_wallet::{
	models::LogEntry,
	services::history::{EventCodec, HistoryReconciler},
};
use std::sync::OnceLock;

const ABI: &str = r#"[
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
]"#;

/// Codec under test and the selectors of its two events
fn codec() -> &'static (EventCodec, [B256; 2]) {
	static CODEC: OnceLock<(EventCodec, [B256; 2])> = OnceLock::new();
	CODEC.get_or_init(|| {
		let abi: JsonAbi = serde_json::from_str(ABI).unwrap();
		let selector = |name: &str| abi.event(name).unwrap()[0].selector();
		let selectors = [selector("NameRegistered"), selector("SentByName")];
		(EventCodec::new(&abi), selectors)
	})
}

// First byte selects the event and topic count, the next 32-byte chunks are
// topics and the rest is the log body
fuzz_target!(|data: &[u8]| {
	let Some((&header, rest)) = data.split_first() else {
		return;
	};

	let (codec, selectors) = codec();
	let topic_count = (header >> 1) as usize % 4;
	let split = (topic_count * 32).min(rest.len());
	let (topic_bytes, body) = rest.split_at(split);

	let mut topics = vec![selectors[(header & 1) as usize]];
	topics.extend(topic_bytes.chunks_exact(32).map(B256::from_slice));

	let log = LogEntry(RpcLog {
		inner: PrimitiveLog {
			address: Default::default(),
			data: LogData::new_unchecked(topics, Bytes::copy_from_slice(body)),
		},
		block_number: Some(1),
		..Default::default()
	});

	let _ = codec.decode(&log);
	let _ = HistoryReconciler::new(codec.clone())
		.reconcile(Some("0x0000000000000000000000000000000000000000"), &[log]);
});
