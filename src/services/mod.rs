//! Core services of the name wallet.
//!
//! - `blockchain`: ledger gateway over JSON-RPC
//! - `contract`: naming contract reads and writes
//! - `history`: activity feed reconciliation and detail expansion
//! - `session`: session controller, durable store and presentation

pub mod blockchain;
pub mod contract;
pub mod history;
pub mod session;
