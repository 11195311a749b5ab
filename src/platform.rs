// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
use std::path::{Path, PathBuf};

/// Shared library naming and search conventions.
///
/// Every unix target that isn't macOS follows the [`Linux`](Platform::Linux) conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
	Linux,
	MacOs,
	Windows,
}

impl Platform {
	/// The conventions of the platform this crate was compiled for.
	#[inline]
	pub const fn current() -> Self {
		if cfg!(windows) {
			Self::Windows
		} else if cfg!(target_os = "macos") {
			Self::MacOs
		} else {
			Self::Linux
		}
	}

	/// File name prefix, `lib` on unix.
	#[inline]
	pub const fn prefix(self) -> &'static str {
		match self {
			Self::Linux | Self::MacOs => "lib",
			Self::Windows => "",
		}
	}

	/// File name suffixes in the order they are tried.
	///
	/// Windows tries the release name before the `_d` debug name.
	#[inline]
	pub const fn suffixes(self) -> &'static [&'static str] {
		match self {
			Self::Linux => &[".so"],
			Self::MacOs => &[".dylib"],
			Self::Windows => &[".dll", "_d.dll"],
		}
	}

	/// Candidate file names for `name`, one per suffix.
	///
	/// # Examples
	///
	/// ```
	/// use shlib::Platform;
	/// assert_eq!(Platform::Linux.file_names("foo"), ["libfoo.so"]);
	/// assert_eq!(Platform::Windows.file_names("foo"), ["foo.dll", "foo_d.dll"]);
	/// ```
	pub fn file_names(self, name: &str) -> Vec<String> {
		self.suffixes()
			.iter()
			.map(|suffix| format!("{}{name}{suffix}", self.prefix()))
			.collect()
	}

	/// Directories searched, highest priority first.
	///
	/// The first entry is always empty, which leaves the bare file name to the
	/// operating system's own search rules.
	pub fn search_dirs(self, sdk_dir: &Path) -> Vec<PathBuf> {
		match self {
			Self::Linux | Self::MacOs => vec![
				PathBuf::new(),
				PathBuf::from("../lib"),
				sdk_dir.join("lib"),
			],
			Self::Windows => vec![
				PathBuf::new(),
				PathBuf::from("."),
				sdk_dir.join("lib"),
				sdk_dir.join("bin"),
			],
		}
	}

	/// The directory registered with the Windows loader before any attempt.
	///
	/// `None` on platforms without a process-wide DLL directory.
	pub fn dll_dir(self, sdk_dir: &Path) -> Option<PathBuf> {
		match self {
			Self::Windows => Some(sdk_dir.join("bin")),
			Self::Linux | Self::MacOs => None,
		}
	}

	/// Every candidate path for `name`, suffixes outer and directories inner.
	///
	/// # Examples
	///
	/// ```
	/// use shlib::Platform;
	/// use std::path::{Path, PathBuf};
	///
	/// let sdk = Path::new("sdk");
	/// let paths = Platform::MacOs.candidates("foo", sdk);
	/// assert_eq!(paths, [
	/// 	PathBuf::from("libfoo.dylib"),
	/// 	Path::new("../lib").join("libfoo.dylib"),
	/// 	sdk.join("lib").join("libfoo.dylib"),
	/// ]);
	/// ```
	pub fn candidates(self, name: &str, sdk_dir: &Path) -> Vec<PathBuf> {
		let dirs = self.search_dirs(sdk_dir);
		self.file_names(name)
			.iter()
			.flat_map(|file| dirs.iter().map(move |dir| dir.join(file)))
			.collect()
	}
}

impl Default for Platform {
	fn default() -> Self {
		Self::current()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn current_matches_target() {
		let platform = Platform::current();
		if cfg!(windows) {
			assert_eq!(platform, Platform::Windows);
		} else if cfg!(target_os = "macos") {
			assert_eq!(platform, Platform::MacOs);
		} else {
			assert_eq!(platform, Platform::Linux);
		}
	}

	#[test]
	fn windows_tries_release_then_debug() {
		let sdk = Path::new("sdk");
		let paths = Platform::Windows.candidates("qi", sdk);
		assert_eq!(paths.len(), 8);
		assert_eq!(paths[0], PathBuf::from("qi.dll"));
		assert_eq!(paths[1], Path::new(".").join("qi.dll"));
		assert_eq!(paths[2], sdk.join("lib").join("qi.dll"));
		assert_eq!(paths[3], sdk.join("bin").join("qi.dll"));
		assert_eq!(paths[4], PathBuf::from("qi_d.dll"));
		assert_eq!(paths[7], sdk.join("bin").join("qi_d.dll"));
	}

	#[test]
	fn dll_dir_only_on_windows() {
		let sdk = Path::new("sdk");
		assert_eq!(Platform::Windows.dll_dir(sdk), Some(sdk.join("bin")));
		assert_eq!(Platform::Linux.dll_dir(sdk), None);
		assert_eq!(Platform::MacOs.dll_dir(sdk), None);
	}
}
