//! Constants shared across the wallet.

/// Storage key under which the connected account is persisted
pub const CONNECTED_ACCOUNT_KEY: &str = "connectedAccount";

/// Default location of the durable session file
pub const DEFAULT_SESSION_FILE: &str = "data/session.json";

/// Number of most recent matches kept in the activity feed
pub const MAX_HISTORY_ITEMS: usize = 30;

/// Decimals of the native currency's smallest unit
pub const NATIVE_DECIMALS: u8 = 18;

/// Display symbol of the native currency
pub const NATIVE_SYMBOL: &str = "ETH";

/// Substring the contract reverts with when a name is already registered
pub const NAME_TAKEN_REASON: &str = "name already taken";

/// Naming contract read: `nameOf(address) -> string`
pub const NAME_OF_FUNCTION: &str = "nameOf";

/// Naming contract read: `resolveName(string) -> address`
pub const RESOLVE_NAME_FUNCTION: &str = "resolveName";

/// Naming contract write: `registerName(string)`
pub const REGISTER_NAME_FUNCTION: &str = "registerName";

/// Naming contract write: `unregisterName()`
pub const UNREGISTER_NAME_FUNCTION: &str = "unregisterName";

/// Naming contract write: `transferByName(string)` payable
pub const TRANSFER_BY_NAME_FUNCTION: &str = "transferByName";

/// Functions the contract ABI must declare
pub const REQUIRED_FUNCTIONS: [&str; 5] = [
	NAME_OF_FUNCTION,
	RESOLVE_NAME_FUNCTION,
	REGISTER_NAME_FUNCTION,
	UNREGISTER_NAME_FUNCTION,
	TRANSFER_BY_NAME_FUNCTION,
];
