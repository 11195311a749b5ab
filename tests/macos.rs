#![cfg(target_os = "macos")]

use shlib::*;

// `libSystem.dylib` is found by dyld's fallback search, so the bare candidate wins.
#[test]
fn test_load_system() {
	let sdk = tempfile::tempdir().unwrap();
	let lib = load_shlib("System", sdk.path(), false).unwrap();
	assert_eq!(lib.path(), std::path::Path::new("libSystem.dylib"));
}

#[test]
fn test_sym_addr() {
	let lib = Library::open("libSystem.dylib").unwrap();
	let sym = lib.symbol("malloc").unwrap();
	assert!(!sym.cast::<()>().is_null());
}

#[test]
fn test_missing_symbol() {
	let lib = Library::open("libSystem.dylib").unwrap();
	assert!(lib.symbol("shlib_definitely_not_a_symbol").is_err());
}
