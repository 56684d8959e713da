//! Typed access to the naming contract.
//!
//! Calls are encoded with the contract's JSON ABI and dispatched through a
//! [`LedgerGateway`]. Writes are submitted on behalf of the connected
//! account and awaited until mined.

use alloy::{
	dyn_abi::{DynSolValue, FunctionExt, JsonAbiExt},
	json_abi::Function,
	primitives::{Address, Bytes, U256},
};

use crate::{
	models::{ContractSpec, EVMTransactionReceipt, EVMTransactionRequest},
	services::{
		blockchain::LedgerGateway,
		contract::error::{call_failure, transaction_failure, ContractError},
	},
	utils::constants::{
		NAME_OF_FUNCTION, REGISTER_NAME_FUNCTION, RESOLVE_NAME_FUNCTION, TRANSFER_BY_NAME_FUNCTION,
		UNREGISTER_NAME_FUNCTION,
	},
};

/// Client of the deployed naming contract
#[derive(Debug, Clone)]
pub struct NamingContract {
	spec: ContractSpec,
}

impl NamingContract {
	pub fn new(spec: ContractSpec) -> Self {
		Self { spec }
	}

	pub fn address(&self) -> Address {
		self.spec.address
	}

	/// Name registered by an account, empty when it has none
	pub async fn name_of<G: LedgerGateway + ?Sized>(
		&self,
		gateway: &G,
		owner: Address,
	) -> Result<String, ContractError> {
		let output = self
			.call(gateway, NAME_OF_FUNCTION, &[DynSolValue::Address(owner)])
			.await?;
		match output.into_iter().next() {
			Some(DynSolValue::String(name)) => Ok(name),
			_ => Err(ContractError::abi_error(format!(
				"{} did not return a string",
				NAME_OF_FUNCTION
			))),
		}
	}

	/// Address a name resolves to
	///
	/// # Returns
	/// `None` when the contract answers with the zero address
	pub async fn resolve_name<G: LedgerGateway + ?Sized>(
		&self,
		gateway: &G,
		name: &str,
	) -> Result<Option<Address>, ContractError> {
		let output = self
			.call(
				gateway,
				RESOLVE_NAME_FUNCTION,
				&[DynSolValue::String(name.to_string())],
			)
			.await?;
		let address = output
			.first()
			.and_then(DynSolValue::as_address)
			.ok_or_else(|| {
				ContractError::abi_error(format!(
					"{} did not return an address",
					RESOLVE_NAME_FUNCTION
				))
			})?;
		Ok((!address.is_zero()).then_some(address))
	}

	pub async fn register_name<G: LedgerGateway + ?Sized>(
		&self,
		gateway: &G,
		from: Address,
		name: &str,
	) -> Result<EVMTransactionReceipt, ContractError> {
		self.transact(
			gateway,
			from,
			REGISTER_NAME_FUNCTION,
			&[DynSolValue::String(name.to_string())],
			None,
		)
		.await
	}

	pub async fn unregister_name<G: LedgerGateway + ?Sized>(
		&self,
		gateway: &G,
		from: Address,
	) -> Result<EVMTransactionReceipt, ContractError> {
		self.transact(gateway, from, UNREGISTER_NAME_FUNCTION, &[], None)
			.await
	}

	/// Sends `value` wei to the owner of `to_name`
	pub async fn transfer_by_name<G: LedgerGateway + ?Sized>(
		&self,
		gateway: &G,
		from: Address,
		to_name: &str,
		value: U256,
	) -> Result<EVMTransactionReceipt, ContractError> {
		self.transact(
			gateway,
			from,
			TRANSFER_BY_NAME_FUNCTION,
			&[DynSolValue::String(to_name.to_string())],
			Some(value),
		)
		.await
	}

	fn function(&self, name: &str) -> Result<&Function, ContractError> {
		self.spec
			.abi
			.function(name)
			.and_then(|overloads| overloads.first())
			.ok_or_else(|| ContractError::abi_error(format!("Function {} not found in ABI", name)))
	}

	/// Encodes a call, selector included
	fn encode(&self, name: &str, args: &[DynSolValue]) -> Result<Bytes, ContractError> {
		let input = self.function(name)?.abi_encode_input(args)?;
		Ok(Bytes::from(input))
	}

	async fn call<G: LedgerGateway + ?Sized>(
		&self,
		gateway: &G,
		name: &str,
		args: &[DynSolValue],
	) -> Result<Vec<DynSolValue>, ContractError> {
		let input = self.encode(name, args)?;
		let output = gateway
			.call(EVMTransactionRequest::call(self.spec.address, input))
			.await
			.map_err(call_failure)?;
		Ok(self.function(name)?.abi_decode_output(&output)?)
	}

	async fn transact<G: LedgerGateway + ?Sized>(
		&self,
		gateway: &G,
		from: Address,
		name: &str,
		args: &[DynSolValue],
		value: Option<U256>,
	) -> Result<EVMTransactionReceipt, ContractError> {
		let input = self.encode(name, args)?;
		let request = EVMTransactionRequest::transaction(from, self.spec.address, input, value);

		let hash = gateway
			.send_transaction(request)
			.await
			.map_err(transaction_failure)?;
		tracing::debug!(function = name, tx_hash = %hash, "Awaiting confirmation");

		gateway
			.wait_for_confirmation(hash)
			.await
			.map_err(transaction_failure)
	}
}
