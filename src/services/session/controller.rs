//! Session controller.
//!
//! Owns the session context, the derived wallet view and the activity feed,
//! and turns user actions into ledger and contract calls. Every action runs
//! to completion before the next one starts; failures are alerted once
//! through the presentation surface and leave the state as it was.

use alloy::primitives::Address;
use tracing::instrument;

use crate::{
	models::{ContractSpec, HistoryFeed, LookupResult, SessionContext, WalletView},
	services::{
		blockchain::{BlockChainError, LedgerGateway},
		contract::NamingContract,
		history::{expand_items, format_ether, parse_ether, toggle_item, HistoryReconciler},
		session::{error::SessionError, store::SessionStore, surface::PresentationSurface},
	},
	utils::constants::NATIVE_SYMBOL,
};

/// Drives a wallet session against a ledger, a durable store and a surface
pub struct SessionController<G, S, P>
where
	G: LedgerGateway,
	S: SessionStore,
	P: PresentationSurface,
{
	gateway: G,
	store: S,
	surface: P,
	contract: NamingContract,
	reconciler: HistoryReconciler,
	context: SessionContext,
	view: WalletView,
	history: HistoryFeed,
}

impl<G, S, P> SessionController<G, S, P>
where
	G: LedgerGateway,
	S: SessionStore,
	P: PresentationSurface,
{
	/// Creates a disconnected controller for a deployed naming contract
	pub fn new(gateway: G, store: S, surface: P, contract: ContractSpec) -> Self {
		Self {
			gateway,
			store,
			surface,
			reconciler: HistoryReconciler::for_contract(&contract),
			contract: NamingContract::new(contract),
			context: SessionContext::default(),
			view: WalletView::default(),
			history: HistoryFeed::default(),
		}
	}

	pub fn context(&self) -> &SessionContext {
		&self.context
	}

	pub fn view(&self) -> &WalletView {
		&self.view
	}

	pub fn history(&self) -> &HistoryFeed {
		&self.history
	}

	pub fn surface(&self) -> &P {
		&self.surface
	}

	/// Requests an account from the provider and starts a fresh session
	#[instrument(skip_all)]
	pub async fn connect(&mut self) -> Result<Address, SessionError> {
		let result = self.try_connect().await;
		self.report(result)
	}

	/// Ends the session
	///
	/// Clears the durable account and resets the view and the feed. The
	/// provider's authorization is left untouched.
	#[instrument(skip_all)]
	pub async fn disconnect(&mut self) -> Result<(), SessionError> {
		if let Err(e) = self.store.clear().await {
			tracing::warn!(error = %e, "Failed to clear stored session");
		}
		self.reset();
		self.surface.render_wallet(&self.view);
		tracing::info!("Wallet disconnected");
		Ok(())
	}

	/// Reconnects silently when a durable account exists
	///
	/// # Returns
	/// Whether a session is active afterwards
	#[instrument(skip_all)]
	pub async fn restore(&mut self) -> bool {
		match self.store.load_account().await {
			Ok(Some(saved)) => {
				tracing::debug!(account = %saved, "Restoring saved session");
			}
			Ok(None) => return false,
			Err(e) => {
				tracing::warn!(error = %e, "Failed to read stored session");
				return false;
			}
		}

		match self.try_connect().await {
			Ok(_) => true,
			Err(e) => {
				tracing::warn!(error = %e, "Silent reconnect failed");
				self.reset();
				false
			}
		}
	}

	/// Connects when disconnected, disconnects when connected
	pub async fn toggle_connection(&mut self) -> Result<(), SessionError> {
		if self.context.is_connected() {
			self.disconnect().await
		} else {
			self.connect().await.map(|_| ())
		}
	}

	/// Reloads balance, name, network and history of the connected account
	#[instrument(skip_all)]
	pub async fn refresh(&mut self) -> Result<(), SessionError> {
		let result = self.try_refresh().await;
		self.report(result)
	}

	#[instrument(skip(self))]
	pub async fn register_name(&mut self, name: &str) -> Result<(), SessionError> {
		let result = self.try_register_name(name).await;
		self.report(result)
	}

	#[instrument(skip_all)]
	pub async fn unregister_name(&mut self) -> Result<(), SessionError> {
		let result = self.try_unregister_name().await;
		self.report(result)
	}

	/// Sends an ether amount to the owner of a name
	#[instrument(skip(self))]
	pub async fn send_funds(&mut self, to_name: &str, amount: &str) -> Result<(), SessionError> {
		let result = self.try_send_funds(to_name, amount).await;
		self.report(result)
	}

	/// Looks up the address a name resolves to; no connection is needed
	#[instrument(skip(self))]
	pub async fn resolve_name(&self, name: &str) -> Result<LookupResult, SessionError> {
		let name = name.trim();
		if name.is_empty() {
			return self.report(Err(SessionError::invalid_input("Enter a name")));
		}

		let result = match self.contract.resolve_name(&self.gateway, name).await {
			Ok(Some(address)) => LookupResult::Resolved {
				name: name.to_string(),
				address,
			},
			Ok(None) => LookupResult::NotRegistered,
			Err(e) => {
				tracing::warn!(error = %e, "Name resolution failed");
				LookupResult::Failed("Error resolving".to_string())
			}
		};

		self.surface.render_lookup(&result);
		Ok(result)
	}

	/// Looks up the name registered by an address; no connection is needed
	#[instrument(skip(self))]
	pub async fn reverse_lookup(&self, address: &str) -> Result<LookupResult, SessionError> {
		let address = address.trim();
		if address.is_empty() {
			return self.report(Err(SessionError::invalid_input("Enter an address")));
		}

		let failed = || LookupResult::Failed("Invalid address or error".to_string());
		let result = match parse_address(address) {
			Some(owner) => match self.contract.name_of(&self.gateway, owner).await {
				Ok(name) if name.is_empty() => LookupResult::NoName,
				Ok(name) => LookupResult::NameFound {
					address: owner,
					name,
				},
				Err(e) => {
					tracing::warn!(error = %e, "Reverse lookup failed");
					failed()
				}
			},
			None => failed(),
		};

		self.surface.render_lookup(&result);
		Ok(result)
	}

	/// Rebuilds and renders the activity feed
	#[instrument(skip_all)]
	pub async fn load_history(&mut self) -> Result<(), SessionError> {
		let result = self.fetch_history().await;
		self.history = self.report(result)?;
		self.surface.render_history(&self.history);
		Ok(())
	}

	/// Opens or closes one feed item, loading its detail on first open
	///
	/// # Returns
	/// The new expanded state of the item
	#[instrument(skip(self))]
	pub async fn toggle_history_item(&mut self, index: usize) -> Result<bool, SessionError> {
		let Some(item) = self.history.item_mut(index) else {
			return self.report(Err(SessionError::invalid_input(format!(
				"No history item {}",
				index
			))));
		};

		let expanded = toggle_item(item, &self.gateway).await;
		self.surface.render_history(&self.history);
		Ok(expanded)
	}

	/// Opens every feed item and loads the missing details concurrently
	#[instrument(skip_all)]
	pub async fn expand_all_history(&mut self) {
		if let HistoryFeed::Items(items) = &mut self.history {
			let results = expand_items(items, &self.gateway).await;
			let failed = results.iter().filter(|result| result.is_err()).count();
			tracing::debug!(items = results.len(), failed, "Expanded history");
		}
		self.surface.render_history(&self.history);
	}

	async fn try_connect(&mut self) -> Result<Address, SessionError> {
		let accounts = self
			.gateway
			.request_accounts()
			.await
			.map_err(|e| match e {
				BlockChainError::ConnectionError(msg) => SessionError::provider_unavailable(msg),
				other => SessionError::wallet_rejected(other.to_string()),
			})?;
		let address = accounts
			.into_iter()
			.next()
			.ok_or_else(|| SessionError::wallet_rejected("No account was authorized"))?;

		self.reset();
		self.context = SessionContext::connected(address);
		if let Err(e) = self.store.save_account(address).await {
			tracing::warn!(error = %e, "Failed to persist session");
		}

		self.view.address = Some(address.to_checksum(None));
		tracing::info!(account = %address, "Wallet connected");

		if let Err(e) = self.try_refresh().await {
			self.surface.render_wallet(&self.view);
			return Err(e);
		}
		Ok(address)
	}

	async fn try_refresh(&mut self) -> Result<(), SessionError> {
		let address = self.require_connected()?;

		let balance = self.gateway.get_balance(address).await?;
		let name = match self.contract.name_of(&self.gateway, address).await {
			Ok(name) => name,
			Err(e) => {
				tracing::warn!(error = %e, "nameOf call failed");
				String::new()
			}
		};
		let network = self.gateway.get_network().await?;

		let view = WalletView {
			address: Some(address.to_checksum(None)),
			balance: Some(format!(
				"Balance: {} {}",
				format_ether(balance),
				NATIVE_SYMBOL
			)),
			can_register: name.is_empty(),
			name: Some(if name.is_empty() {
				"No name registered".to_string()
			} else {
				format!("Name: {}", name)
			}),
			network: Some(format!("Network: {}", network)),
		};

		let history = self.fetch_history().await?;

		self.view = view;
		self.history = history;
		self.surface.render_wallet(&self.view);
		Ok(())
	}

	async fn try_register_name(&mut self, name: &str) -> Result<(), SessionError> {
		let from = self.require_connected()?;
		let name = name.trim();
		if name.is_empty() {
			return Err(SessionError::invalid_input("Enter a name"));
		}

		self.contract
			.register_name(&self.gateway, from, name)
			.await?;
		self.surface
			.alert(&format!("Name \"{}\" registered successfully!", name));
		self.try_refresh().await
	}

	async fn try_unregister_name(&mut self) -> Result<(), SessionError> {
		let from = self.require_connected()?;

		self.contract.unregister_name(&self.gateway, from).await?;
		self.surface.alert("Name unregistered!");
		self.try_refresh().await
	}

	async fn try_send_funds(&mut self, to_name: &str, amount: &str) -> Result<(), SessionError> {
		let from = self.require_connected()?;
		let (to_name, amount) = (to_name.trim(), amount.trim());
		if to_name.is_empty() || amount.is_empty() {
			return Err(SessionError::invalid_input("Fill all fields"));
		}
		let value = parse_ether(amount).map_err(SessionError::invalid_input)?;

		self.contract
			.transfer_by_name(&self.gateway, from, to_name, value)
			.await?;
		self.surface.alert(&format!(
			"Sent {} {} to {}",
			amount, NATIVE_SYMBOL, to_name
		));
		self.try_refresh().await
	}

	/// Fetches the contract's logs and reconciles them against the session
	async fn fetch_history(&self) -> Result<HistoryFeed, SessionError> {
		let Some(address) = self.context.address else {
			return Ok(HistoryFeed::NotConnected);
		};

		let logs = self
			.gateway
			.get_logs(self.contract.address(), 0, None)
			.await
			.map_err(|e| SessionError::history_error(e.to_string()))?;

		let target = address.to_string();
		Ok(self.reconciler.reconcile(Some(&target), &logs))
	}

	fn require_connected(&self) -> Result<Address, SessionError> {
		self.context.address.ok_or(SessionError::NotConnected)
	}

	fn reset(&mut self) {
		self.context = SessionContext::default();
		self.view = WalletView::default();
		self.history = HistoryFeed::NotConnected;
	}

	/// Alerts the user about a failed action
	fn report<T>(&self, result: Result<T, SessionError>) -> Result<T, SessionError> {
		if let Err(e) = &result {
			self.surface.alert(&e.to_string());
		}
		result
	}
}

/// Parses a hex address, enforcing the EIP-55 checksum on mixed-case input
fn parse_address(input: &str) -> Option<Address> {
	let digits = input.strip_prefix("0x").unwrap_or(input);
	let mixed_case = digits.chars().any(|c| c.is_ascii_lowercase())
		&& digits.chars().any(|c| c.is_ascii_uppercase());
	if mixed_case {
		Address::parse_checksummed(input, None).ok()
	} else {
		input.parse().ok()
	}
}
