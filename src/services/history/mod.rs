//! Activity history service.
//!
//! Turns the naming contract's raw logs into the activity feed of a single
//! address and expands feed items with their transaction detail on demand.
//!
//! - `codec`: decoding of `NameRegistered` and `SentByName` logs
//! - `reconciler`: relevance filtering, summaries and truncation
//! - `detail`: lazy, cached transaction and receipt lookups per item

mod codec;
mod detail;
mod error;
mod helpers;
mod reconciler;

pub use codec::EventCodec;
pub use detail::{expand_item, expand_items, toggle_item};
pub use error::HistoryError;
pub use helpers::{
	are_same_address, b256_to_string, format_ether, h160_to_string, normalize_address,
	parse_ether,
};
pub use reconciler::{summarize, HistoryReconciler};
