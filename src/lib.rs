// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
//! Locate and load native shared libraries from an SDK layout.
//!
//! The loader builds a short list of candidate paths from a library's short name,
//! following the naming conventions of the host platform, and hands each one to the
//! operating system's loader until one succeeds.
//!
//! | platform | prefix | suffixes          | directories                       |
//! |----------|--------|-------------------|-----------------------------------|
//! | Linux    | `lib`  | `.so`             | `""`, `../lib`, `<sdk>/lib`       |
//! | macOS    | `lib`  | `.dylib`          | `""`, `../lib`, `<sdk>/lib`       |
//! | Windows  |        | `.dll`, `_d.dll`  | `""`, `.`, `<sdk>/lib`, `<sdk>/bin` |
//!
//! # Examples
//!
//! ```no_run
//! let lib = shlib::load_shlib("qimessaging", "/opt/naoqi-sdk", false);
//! if let Some(lib) = lib {
//!     println!("loaded {}", lib.path().display());
//! }
//! ```
use std::path::Path;

mod error;
mod library;
mod os;
mod platform;
mod search;

pub mod env;
pub mod prefix;

pub use error::{Attempt, Error, ErrorKind};
pub use library::{Library, Symbol};
pub use platform::Platform;
pub use search::Locator;

/// The result of a shlib function
pub type Result<T> = std::result::Result<T, Error>;

/// Attempts to load `name` from the usual places relative to `sdk_dir`.
///
/// Returns the first candidate the operating system agrees to load, or `None` if every
/// candidate failed. Failed attempts are not reported unless `verbose` is set, in which
/// case the loader search-path variables and every failure are logged at `Info`/`Warn`.
///
/// On Windows `<sdk_dir>/bin` is registered as a process-wide DLL directory before the
/// first attempt. The registration is not undone.
///
/// See [`Locator`] for a version that reports why nothing loaded.
pub fn load_shlib<P: AsRef<Path>>(name: &str, sdk_dir: P, verbose: bool) -> Option<Library> {
	Locator::new(name, sdk_dir).verbose(verbose).try_load()
}

/// Registers `dir` as an additional directory the Windows loader searches for DLLs.
///
/// This mutates process-wide state and replaces any directory registered earlier.
/// On other platforms this does nothing.
///
/// # Errors
/// Returns the operating system error if the directory could not be registered.
pub fn set_dll_directory<P: AsRef<Path>>(dir: P) -> std::io::Result<()> {
	unsafe { os::dylib_set_directory(dir.as_ref().as_os_str()) }
}
