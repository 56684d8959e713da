//! Bootstrap module for wiring the wallet's services.
//!
//! Loads the network and contract configuration, connects the ledger
//! gateway and assembles a [`SessionController`] over the durable session
//! file and the terminal surface.

use anyhow::Context;
use std::{
	io::Stdout,
	path::{Path, PathBuf},
};

use crate::{
	models::{
		ConfigLoader, ContractSpec, Network, DEFAULT_CONTRACT_CONFIG_PATH,
		DEFAULT_NETWORK_CONFIG_PATH,
	},
	services::{
		blockchain::{EvmClient, HttpTransportClient},
		session::{FileSessionStore, SessionController, TerminalSurface},
	},
	utils::constants::DEFAULT_SESSION_FILE,
};

/// Controller type of the command line wallet
pub type WalletController = SessionController<
	EvmClient<HttpTransportClient>,
	FileSessionStore,
	TerminalSurface<Stdout>,
>;

/// Locations of the files the wallet reads and writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletPaths {
	pub network_config: PathBuf,
	pub contract_config: PathBuf,
	pub session_file: PathBuf,
}

impl Default for WalletPaths {
	fn default() -> Self {
		Self {
			network_config: PathBuf::from(DEFAULT_NETWORK_CONFIG_PATH),
			contract_config: PathBuf::from(DEFAULT_CONTRACT_CONFIG_PATH),
			session_file: PathBuf::from(DEFAULT_SESSION_FILE),
		}
	}
}

/// Loads and validates the network configuration
pub fn load_network(path: &Path) -> anyhow::Result<Network> {
	Network::load_from_path(path)
		.with_context(|| format!("Failed to load network config {}", path.display()))
}

/// Loads and validates the naming contract description
pub fn load_contract(path: &Path) -> anyhow::Result<ContractSpec> {
	ContractSpec::load_from_path(path)
		.with_context(|| format!("Failed to load contract {}", path.display()))
}

/// Initializes the wallet controller
///
/// The returned controller is disconnected; callers restore or connect the
/// session as needed.
///
/// # Errors
/// Returns an error if a configuration file is missing or invalid, or if
/// none of the configured RPC endpoints is reachable
pub async fn initialize_controller(paths: &WalletPaths) -> anyhow::Result<WalletController> {
	let network = load_network(&paths.network_config)?;
	let contract = load_contract(&paths.contract_config)?;

	let gateway = EvmClient::new(&network)
		.await
		.with_context(|| format!("Failed to connect to network {}", network.slug))?;
	tracing::info!(
		network = %network.slug,
		contract = %contract.address,
		"Wallet initialized"
	);

	Ok(SessionController::new(
		gateway,
		FileSessionStore::new(&paths.session_file),
		TerminalSurface::stdout(),
		contract,
	))
}
