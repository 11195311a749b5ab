// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
//! Loader search-path variables, read for diagnostics only.
//!
//! The system loaders consult these on their own; the search in [`Locator`](crate::Locator)
//! never does.

use log::Level;
use std::env;

/// Variables the system loaders read their search paths from.
pub const SEARCH_PATH_VARS: [&str; 3] = ["PATH", "LD_LIBRARY_PATH", "DYLD_LIBRARY_PATH"];

/// Returns each of [`SEARCH_PATH_VARS`] with its current value.
///
/// A variable that is unset, or not valid unicode, reads as empty.
pub fn search_path_vars() -> Vec<(&'static str, String)> {
	SEARCH_PATH_VARS
		.iter()
		.map(|&name| (name, env::var(name).unwrap_or_default()))
		.collect()
}

/// Logs every search-path variable at `level`.
pub fn log_search_paths(level: Level) {
	if !log::log_enabled!(level) {
		return;
	}
	for (name, value) in search_path_vars() {
		log::log!(level, "{name}: {value}");
	}
}
