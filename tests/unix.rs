#![cfg(unix)]

use shlib::*;

#[test]
fn test_set_dll_directory_is_noop() {
	set_dll_directory("/nonexistent").unwrap();
}

#[test]
fn test_loader_error_message() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("libbroken.so");
	std::fs::write(&path, b"\x7fELF").unwrap();
	let err = Library::open(&path).unwrap_err();
	assert!(!err.to_string().is_empty());
}

#[test]
fn test_nul_in_path() {
	assert!(Library::open("lib\0foo.so").is_err());
}

// Removes a file on drop so a failed assertion doesn't leave it behind.
struct Cleanup(std::path::PathBuf);

impl Drop for Cleanup {
	fn drop(&mut self) {
		let _ = std::fs::remove_file(&self.0);
	}
}

// `dlopen` never searches the working directory for a bare name, so `find` shouldn't either.
#[test]
fn test_find_skips_working_directory() {
	let sdk = tempfile::tempdir().unwrap();
	let file = std::env::current_dir().unwrap().join("libshlib_cwd_fixture.so");
	std::fs::write(&file, b"").unwrap();
	let _cleanup = Cleanup(file);

	let locator = Locator::new("shlib_cwd_fixture", sdk.path());
	assert_eq!(locator.find(), None);
	assert_eq!(locator.load().unwrap_err().kind(), ErrorKind::NotFound);
}
