//! Name wallet library.
//!
//! A wallet client for a name registry contract on an EVM ledger: connect an
//! account through a JSON-RPC wallet provider, register or release a name,
//! send funds by name, look names and addresses up, and browse the
//! account's activity reconciled from the contract's event logs.
//!
//! - `bootstrap`: wiring of configuration, gateway, store and surface
//! - `models`: domain types and configuration loading
//! - `services`: gateway, contract, history and session services
//! - `utils`: constants and logging setup

pub mod bootstrap;
pub mod models;
pub mod services;
pub mod utils;
