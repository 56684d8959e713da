//! Name wallet command line entry point.
//!
//! Each invocation performs one wallet action against the configured
//! network. The connected account persists in the session file between
//! invocations; actions other than lookups silently restore it first.
//!
//! # Flow
//! 1. Parses the command line and loads `.env`
//! 2. Sets up logging
//! 3. Loads the network and contract configuration and connects the gateway
//! 4. Runs the requested action, alerting failures on the terminal

use clap::{Arg, ArgAction, ArgMatches, Command};
use dotenvy::dotenv;
use name_wallet::{
	bootstrap::{initialize_controller, WalletController, WalletPaths},
	services::session::PresentationSurface,
	utils::logging::setup_logging,
};
use std::{
	env::{set_var, var},
	path::PathBuf,
	process::ExitCode,
};
use tracing::error;

fn cli() -> Command {
	Command::new("name-wallet")
		.version(env!("CARGO_PKG_VERSION"))
		.about("A wallet client for a name registry contract: register names and send funds by name.")
		.subcommand_required(true)
		.arg(
			Arg::new("config")
				.long("config")
				.help("Path to the network configuration (default: config/network.json)")
				.value_name("PATH")
				.global(true),
		)
		.arg(
			Arg::new("contract")
				.long("contract")
				.help("Path to the contract description (default: contract.json)")
				.value_name("PATH")
				.global(true),
		)
		.arg(
			Arg::new("session-file")
				.long("session-file")
				.help("Path to the session file (default: data/session.json)")
				.value_name("PATH")
				.global(true),
		)
		.arg(
			Arg::new("log-file")
				.long("log-file")
				.help("Write logs to file instead of stderr")
				.action(ArgAction::SetTrue)
				.global(true),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL")
				.global(true),
		)
		.arg(
			Arg::new("log-path")
				.long("log-path")
				.help("Path to store log files (default: logs/)")
				.value_name("PATH")
				.global(true),
		)
		.subcommand(Command::new("connect").about("Connect the provider's account"))
		.subcommand(Command::new("disconnect").about("Forget the connected account"))
		.subcommand(Command::new("status").about("Show balance, name and network"))
		.subcommand(
			Command::new("register")
				.about("Register a name for the connected account")
				.arg(Arg::new("name").required(true)),
		)
		.subcommand(Command::new("unregister").about("Release the connected account's name"))
		.subcommand(
			Command::new("send")
				.about("Send ETH to the owner of a name")
				.arg(Arg::new("to-name").required(true).value_name("NAME"))
				.arg(Arg::new("amount").required(true).value_name("ETH")),
		)
		.subcommand(
			Command::new("resolve")
				.about("Look up the address a name resolves to")
				.arg(Arg::new("name").required(true)),
		)
		.subcommand(
			Command::new("reverse")
				.about("Look up the name registered by an address")
				.arg(Arg::new("address").required(true)),
		)
		.subcommand(
			Command::new("history")
				.about("Show the connected account's activity")
				.arg(
					Arg::new("expand")
						.long("expand")
						.help("Show the details of an item (repeatable)")
						.value_name("INDEX")
						.value_parser(clap::value_parser!(usize))
						.action(ArgAction::Append),
				)
				.arg(
					Arg::new("expand-all")
						.long("expand-all")
						.help("Show the details of every item")
						.action(ArgAction::SetTrue)
						.conflicts_with("expand"),
				),
		)
}

/// Only applies CLI options whose environment variables are not already set
fn apply_env_overrides(matches: &ArgMatches) {
	if matches.get_flag("log-file") && var("LOG_MODE").is_err() {
		set_var("LOG_MODE", "file");
	}

	if let Some(level) = matches.get_one::<String>("log-level") {
		if var("LOG_LEVEL").is_err() {
			set_var("LOG_LEVEL", level);
		}
	}

	if let Some(path) = matches.get_one::<String>("log-path") {
		if var("LOG_DATA_DIR").is_err() {
			set_var("LOG_DATA_DIR", path);
		}
	}
}

fn wallet_paths(matches: &ArgMatches) -> WalletPaths {
	let defaults = WalletPaths::default();
	let path_arg = |name: &str| matches.get_one::<String>(name).map(PathBuf::from);

	WalletPaths {
		network_config: path_arg("config").unwrap_or(defaults.network_config),
		contract_config: path_arg("contract").unwrap_or(defaults.contract_config),
		session_file: path_arg("session-file").unwrap_or(defaults.session_file),
	}
}

/// Runs one wallet action; failures have already been alerted
async fn run_command(controller: &mut WalletController, command: &str, args: &ArgMatches) -> bool {
	let arg = |name: &str| args.get_one::<String>(name).cloned().unwrap_or_default();

	match command {
		"connect" => controller.connect().await.is_ok(),
		"disconnect" => controller.disconnect().await.is_ok(),
		"status" => {
			if !controller.restore().await {
				controller.surface().render_wallet(controller.view());
			}
			true
		}
		"register" => {
			controller.restore().await;
			controller.register_name(&arg("name")).await.is_ok()
		}
		"unregister" => {
			controller.restore().await;
			controller.unregister_name().await.is_ok()
		}
		"send" => {
			controller.restore().await;
			controller
				.send_funds(&arg("to-name"), &arg("amount"))
				.await
				.is_ok()
		}
		"resolve" => controller.resolve_name(&arg("name")).await.is_ok(),
		"reverse" => controller.reverse_lookup(&arg("address")).await.is_ok(),
		"history" => {
			// A restored session already carries the reconciled feed
			if controller.restore().await {
				controller.surface().render_history(controller.history());
			} else if controller.load_history().await.is_err() {
				return false;
			}
			if args.get_flag("expand-all") {
				controller.expand_all_history().await;
				return true;
			}
			let indices: Vec<usize> = args
				.get_many::<usize>("expand")
				.map(|values| values.copied().collect())
				.unwrap_or_default();
			let mut ok = true;
			for index in indices {
				ok &= controller.toggle_history_item(index).await.is_ok();
			}
			ok
		}
		other => {
			error!("Unknown command: {}", other);
			false
		}
	}
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
	let matches = cli().get_matches();

	// Load environment variables from .env file
	dotenv().ok();
	apply_env_overrides(&matches);

	setup_logging().unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let Some((command, args)) = matches.subcommand() else {
		return Ok(ExitCode::FAILURE);
	};

	let mut controller = initialize_controller(&wallet_paths(&matches)).await?;

	if run_command(&mut controller, command, args).await {
		Ok(ExitCode::SUCCESS)
	} else {
		Ok(ExitCode::FAILURE)
	}
}
