#![cfg(windows)]

use shlib::*;
use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;
use std::path::PathBuf;
use std::sync::Mutex;

// Every `load` swaps the process-wide DLL directory.
static DLL_DIR: Mutex<()> = Mutex::new(());

extern "system" {
	fn GetDllDirectoryW(nbufferlength: u32, lpbuffer: *mut u16) -> u32;
}

fn dll_directory() -> PathBuf {
	let mut buf = vec![0u16; 1024];
	let len = unsafe { GetDllDirectoryW(buf.len() as u32, buf.as_mut_ptr()) };
	assert!(len > 0 && (len as usize) < buf.len());
	OsString::from_wide(&buf[..len as usize]).into()
}

#[test]
fn test_load_kernel32() {
	let _lock = DLL_DIR.lock().unwrap_or_else(|e| e.into_inner());
	let sdk = tempfile::tempdir().unwrap();
	let lib = load_shlib("kernel32", sdk.path(), false).unwrap();
	assert_eq!(lib.path(), std::path::Path::new("kernel32.dll"));
	assert!(lib.symbol("GetLastError").is_ok());
}

#[test]
fn test_debug_suffix_tried_last() {
	let _lock = DLL_DIR.lock().unwrap_or_else(|e| e.into_inner());
	let sdk = tempfile::tempdir().unwrap();
	let err = Locator::new("shlib_no_such_library", sdk.path()).load().unwrap_err();
	let attempts = err.attempts();
	let ends_with = |a: &Attempt, file: &str| a.path.to_string_lossy().ends_with(file);
	assert_eq!(attempts.len(), 8);
	assert!(attempts[..4].iter().all(|a| ends_with(a, "shlib_no_such_library.dll")));
	assert!(attempts[4..].iter().all(|a| ends_with(a, "shlib_no_such_library_d.dll")));
}

#[test]
fn test_load_registers_sdk_bin() {
	let _lock = DLL_DIR.lock().unwrap_or_else(|e| e.into_inner());
	let sdk = tempfile::tempdir().unwrap();
	std::fs::create_dir(sdk.path().join("bin")).unwrap();

	set_dll_directory(sdk.path()).unwrap();
	assert_eq!(dll_directory(), sdk.path());

	let err = Locator::new("shlib_no_such_library", sdk.path()).load().unwrap_err();
	assert_eq!(err.kind(), ErrorKind::NotFound);
	assert_eq!(dll_directory(), sdk.path().join("bin"));
}
