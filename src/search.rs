// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason

use log::Level;
use std::path::{Path, PathBuf};

use crate::error::{Attempt, Error};
use crate::{env, Library, Platform, Result};

/// Configuration of a single library search.
///
/// ```no_run
/// use shlib::Locator;
///
/// let lib = Locator::new("qimessaging", "/opt/naoqi-sdk")
/// 	.verbose(true)
/// 	.load()
/// 	.unwrap();
/// println!("loaded from {}", lib.path().display());
/// ```
#[derive(Debug, Clone)]
pub struct Locator {
	name: String,
	sdk_dir: PathBuf,
	verbose: bool,
	platform: Platform,
}

impl Locator {
	/// Constructs a new `Locator` for the short library `name`, without prefix or suffix.
	pub fn new<P: AsRef<Path>>(name: &str, sdk_dir: P) -> Self {
		Self {
			name: name.to_owned(),
			sdk_dir: sdk_dir.as_ref().to_path_buf(),
			verbose: false,
			platform: Platform::current(),
		}
	}

	/// Report the loader search-path variables and every failed attempt at `Info`/`Warn`.
	///
	/// When disabled the same events are still logged, at `Trace`.
	#[inline]
	pub fn verbose(mut self, verbose: bool) -> Self {
		self.verbose = verbose;
		self
	}

	/// Overrides the naming conventions, which default to [`Platform::current`].
	#[inline]
	pub fn platform(mut self, platform: Platform) -> Self {
		self.platform = platform;
		self
	}

	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[inline]
	pub fn sdk_dir(&self) -> &Path {
		&self.sdk_dir
	}

	/// Every path [`load`](Locator::load) would try, in order.
	pub fn candidates(&self) -> Vec<PathBuf> {
		self.platform.candidates(&self.name, &self.sdk_dir)
	}

	/// Returns the first candidate that exists on disk, without loading it.
	///
	/// Bare file names are only checked on Windows, relative to the working directory.
	/// `dlopen` never looks in the working directory for them, so elsewhere they are
	/// skipped. A library reachable only through the loader's own search path is not
	/// found here.
	pub fn find(&self) -> Option<PathBuf> {
		if self.validate().is_err() {
			return None;
		}
		self.candidates().into_iter().find(|path| self.is_searchable(path) && path.is_file())
	}

	fn is_searchable(&self, path: &Path) -> bool {
		self.platform == Platform::Windows || path.parent() != Some(Path::new(""))
	}

	/// Loads the first candidate the system loader accepts.
	///
	/// On Windows `<sdk_dir>/bin` is registered as a process-wide DLL directory first.
	///
	/// # Errors
	/// [`ErrorKind::InvalidName`](crate::ErrorKind::InvalidName) if the name is empty or
	/// looks like a path, [`ErrorKind::NotFound`](crate::ErrorKind::NotFound) with every
	/// failed [`Attempt`] if no candidate loaded.
	pub fn load(&self) -> Result<Library> {
		self.validate()?;
		let level = self.level(Level::Info);
		env::log_search_paths(level);

		if let Some(dir) = self.platform.dll_dir(&self.sdk_dir) {
			if let Err(e) = crate::set_dll_directory(&dir) {
				log::log!(self.level(Level::Warn), "{} : {}", dir.display(), e);
			}
		}

		log::log!(level, "Loading {}", self.name);
		let mut attempts = Vec::new();
		for path in self.candidates() {
			match Library::open(&path) {
				Ok(lib) => {
					log::debug!("loaded `{}` from {}", self.name, path.display());
					return Ok(lib);
				}
				Err(error) => {
					let attempt = Attempt { path, error };
					log::log!(self.level(Level::Warn), "{attempt}");
					attempts.push(attempt);
				}
			}
		}
		Err(Error::not_found(&self.name, attempts))
	}

	/// Like [`load`](Locator::load), but discards the reason nothing loaded.
	#[inline]
	pub fn try_load(&self) -> Option<Library> {
		self.load().ok()
	}

	fn level(&self, level: Level) -> Level {
		if self.verbose {
			level
		} else {
			Level::Trace
		}
	}

	fn validate(&self) -> Result<()> {
		let name = self.name.as_str();
		if name.is_empty() || name.contains(['/', '\\', '\0']) {
			Err(Error::invalid_name(name))
		} else {
			Ok(())
		}
	}
}
