// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
//! Installation prefix discovery.
//!
//! An SDK installs executables under `<prefix>/bin` and libraries under `<prefix>/lib`,
//! so the prefix of a running program is two levels above its executable.

use std::{env, io, path};

/// Returns the installation prefix of the running executable.
///
/// # Errors
/// Fails if the executable path is unavailable, or has fewer than two parent directories.
pub fn sdk_prefix() -> io::Result<path::PathBuf> {
	let exe = env::current_exe()?;
	sdk_prefix_of(&exe).ok_or_else(|| {
		io::Error::new(
			io::ErrorKind::NotFound,
			format!("`{}` is not inside an installation prefix", exe.display()),
		)
	})
}

/// Returns the installation prefix of the executable at `exe`: the parent of its directory.
///
/// # Examples
///
/// ```
/// use shlib::prefix::sdk_prefix_of;
/// use std::path::Path;
///
/// let exe = Path::new("opt").join("sdk").join("bin").join("app");
/// assert_eq!(sdk_prefix_of(&exe), Some(Path::new("opt").join("sdk")));
/// ```
pub fn sdk_prefix_of(exe: &path::Path) -> Option<path::PathBuf> {
	exe.parent()?.parent().map(path::Path::to_path_buf)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::{Path, PathBuf};

	#[test]
	fn too_shallow() {
		assert_eq!(sdk_prefix_of(Path::new("app")), None);
		assert_eq!(sdk_prefix_of(&Path::new("bin").join("app")), Some(PathBuf::new()));
	}

	#[test]
	fn running_executable() {
		let exe = env::current_exe().unwrap();
		let prefix = sdk_prefix().unwrap();
		assert!(exe.starts_with(&prefix));
		assert_eq!(exe.parent().unwrap().parent().unwrap(), prefix);
	}
}
