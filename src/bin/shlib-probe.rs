// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use shlib::{prefix, Locator};

/// Locate and load a native shared library the way `shlib::load_shlib` does.
#[derive(Debug, Parser)]
#[command(name = "shlib-probe")]
struct Cli {
	/// Short library name, without prefix or suffix.
	name: String,

	/// Installation root holding `lib/` and `bin/`.
	/// Defaults to the prefix of this executable.
	#[arg(short, long, env = "SHLIB_SDK_DIR")]
	sdk_dir: Option<PathBuf>,

	/// Report the loader search paths and every failed attempt.
	#[arg(short, long, default_value_t = false)]
	verbose: bool,

	/// Only locate the library on disk, do not load it.
	#[arg(long, default_value_t = false, conflicts_with = "symbol")]
	find: bool,

	/// Print the candidate paths and exit.
	#[arg(long, default_value_t = false)]
	list: bool,

	/// Resolve this symbol after loading.
	#[arg(long)]
	symbol: Option<String>,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	let filter = if cli.verbose { "info" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

	let sdk_dir = cli
		.sdk_dir
		.clone()
		.or_else(|| prefix::sdk_prefix().ok())
		.unwrap_or_else(|| PathBuf::from("."));
	info!("SDK directory: {}", sdk_dir.display());
	let locator = Locator::new(&cli.name, &sdk_dir).verbose(cli.verbose);

	if cli.list {
		for path in locator.candidates() {
			println!("{}", path.display());
		}
		return ExitCode::SUCCESS;
	}

	if cli.find {
		return match locator.find() {
			Some(path) => {
				println!("{}", path.display());
				ExitCode::SUCCESS
			}
			None => {
				error!("`{}` not found under {}", cli.name, sdk_dir.display());
				ExitCode::FAILURE
			}
		};
	}

	let lib = match locator.load() {
		Ok(lib) => lib,
		Err(e) => {
			error!("{e}");
			return ExitCode::FAILURE;
		}
	};
	println!("{}", lib.path().display());

	if let Some(name) = cli.symbol.as_deref() {
		match lib.symbol(name) {
			Ok(sym) => println!("{name} = {:p}", sym.cast::<()>()),
			Err(e) => {
				error!("symbol `{name}`: {e}");
				return ExitCode::FAILURE;
			}
		}
	}
	ExitCode::SUCCESS
}
