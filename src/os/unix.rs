// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
use super::Handle;
use std::os::unix::ffi::OsStrExt;
use std::{ffi, io, ptr};

#[cfg(not(any(target_os = "linux", target_os = "macos", target_env = "gnu")))]
use std::sync;

// `dlerror` is only thread-local on some platforms.
#[cfg(not(any(target_os = "linux", target_os = "macos", target_env = "gnu")))]
#[inline]
fn dylib_guard<'a>() -> sync::LockResult<sync::MutexGuard<'a, ()>> {
	static LOCK: sync::Mutex<()> = sync::Mutex::new(());
	LOCK.lock()
}

#[cfg(any(target_os = "linux", target_os = "macos", target_env = "gnu"))]
#[inline(always)]
fn dylib_guard() {}

unsafe fn dylib_error() -> io::Error {
	let msg = libc::dlerror();
	if msg.is_null() {
		io::Error::new(io::ErrorKind::Other, "unknown dynamic loader error")
	} else {
		let msg = ffi::CStr::from_ptr(msg).to_string_lossy().into_owned();
		io::Error::new(io::ErrorKind::Other, msg)
	}
}

unsafe fn map_result<F>(f: F) -> io::Result<Handle>
where
	F: FnOnce() -> *mut ffi::c_void,
{
	let _lock = dylib_guard();
	let _ = libc::dlerror(); // clear existing errors
	ptr::NonNull::new(f()).ok_or_else(|| dylib_error())
}

pub(crate) unsafe fn dylib_open(path: &ffi::OsStr) -> io::Result<Handle> {
	let c_str = ffi::CString::new(path.as_bytes())?;
	map_result(|| libc::dlopen(c_str.as_ptr(), libc::RTLD_NOW | libc::RTLD_LOCAL))
}

pub(crate) unsafe fn dylib_symbol(lib_handle: Handle, name: &str) -> io::Result<Handle> {
	let c_str = ffi::CString::new(name)?;
	map_result(|| libc::dlsym(lib_handle.as_ptr(), c_str.as_ptr()))
}

pub(crate) unsafe fn dylib_close(lib_handle: Handle) -> io::Result<()> {
	let _lock = dylib_guard();
	let _ = libc::dlerror(); // clear existing errors
	if libc::dlclose(lib_handle.as_ptr()) != 0 {
		Err(dylib_error())
	} else {
		Ok(())
	}
}

// unix loaders only read their search path from the environment at startup.
#[inline]
pub(crate) unsafe fn dylib_set_directory(_dir: &ffi::OsStr) -> io::Result<()> {
	Ok(())
}
