//! Best-effort decoding of naming contract logs.
//!
//! Logs are matched against the `NameRegistered` and `SentByName` events of
//! the contract ABI by their selector (first topic). Anything that does not
//! decode into one of the two shapes yields `None`; decoding never fails the
//! batch it is part of.

use std::collections::HashMap;

use alloy::{
	dyn_abi::{DynSolValue, EventExt},
	json_abi::{Event, JsonAbi},
};

use crate::models::{DecodedEvent, LogEntry, NAME_REGISTERED_EVENT, SENT_BY_NAME_EVENT};

/// Decoder for the naming contract's event schema
#[derive(Debug, Clone, Default)]
pub struct EventCodec {
	name_registered: Vec<Event>,
	sent_by_name: Vec<Event>,
}

impl EventCodec {
	/// Creates a codec from the events declared in the contract ABI
	pub fn new(abi: &JsonAbi) -> Self {
		Self {
			name_registered: abi.event(NAME_REGISTERED_EVENT).cloned().unwrap_or_default(),
			sent_by_name: abi.event(SENT_BY_NAME_EVENT).cloned().unwrap_or_default(),
		}
	}

	/// Decodes a log entry into one of the known events
	///
	/// # Returns
	/// `None` when the selector is unknown, the payload is malformed or a
	/// decoded field does not have the expected type
	pub fn decode(&self, log: &LogEntry) -> Option<DecodedEvent> {
		let selector = *log.topics().first()?;

		if let Some(event) = find_event(&self.name_registered, selector) {
			let mut params = decode_params(event, log)?;
			return Some(DecodedEvent::NameRegistered {
				owner: params.get("owner")?.as_address()?,
				name: take_string(&mut params, "name")?,
			});
		}

		if let Some(event) = find_event(&self.sent_by_name, selector) {
			let mut params = decode_params(event, log)?;
			return Some(DecodedEvent::FundsSentByName {
				from: params.get("from")?.as_address()?,
				to_address: params.get("toAddress")?.as_address()?,
				amount: params.get("amount")?.as_uint()?.0,
				to_name: take_string(&mut params, "toName")?,
			});
		}

		None
	}
}

fn find_event(events: &[Event], selector: alloy::primitives::B256) -> Option<&Event> {
	events.iter().find(|event| event.selector() == selector)
}

/// Decodes a log against an event and keys the values by input name
fn decode_params(event: &Event, log: &LogEntry) -> Option<HashMap<String, DynSolValue>> {
	let decoded = event.decode_log(log.payload()).ok()?;
	let mut indexed = decoded.indexed.into_iter();
	let mut body = decoded.body.into_iter();

	event
		.inputs
		.iter()
		.map(|input| {
			let value = if input.indexed {
				indexed.next()
			} else {
				body.next()
			}?;
			Some((input.name.clone(), value))
		})
		.collect()
}

fn take_string(params: &mut HashMap<String, DynSolValue>, name: &str) -> Option<String> {
	match params.remove(name)? {
		DynSolValue::String(value) => Some(value),
		_ => None,
	}
}
