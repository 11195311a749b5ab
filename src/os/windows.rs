// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
use std::os::windows::ffi::OsStrExt;
use std::{ffi, io, ptr};

use super::Handle;

mod c;

fn to_wide(path: &ffi::OsStr) -> Vec<u16> {
	path.encode_wide().chain(std::iter::once(0u16)).collect()
}

#[inline]
pub(crate) unsafe fn dylib_open(path: &ffi::OsStr) -> io::Result<Handle> {
	let wide_str: Vec<u16> = to_wide(path);
	// flags of zero keep the standard search order, which includes `SetDllDirectoryW`.
	let handle = c::LoadLibraryExW(wide_str.as_ptr(), ptr::null_mut(), 0);
	ptr::NonNull::new(handle.cast()).ok_or_else(io::Error::last_os_error)
}

#[inline]
pub(crate) unsafe fn dylib_symbol(lib_handle: Handle, name: &str) -> io::Result<Handle> {
	let c_str = ffi::CString::new(name)?;
	let addr = c::GetProcAddress(lib_handle.as_ptr().cast(), c_str.as_ptr());
	ptr::NonNull::new(addr).ok_or_else(io::Error::last_os_error)
}

#[inline]
pub(crate) unsafe fn dylib_close(lib_handle: Handle) -> io::Result<()> {
	if c::FreeLibrary(lib_handle.as_ptr().cast()) == 0 {
		Err(io::Error::last_os_error())
	} else {
		Ok(())
	}
}

pub(crate) unsafe fn dylib_set_directory(dir: &ffi::OsStr) -> io::Result<()> {
	let wide_str: Vec<u16> = to_wide(dir);
	if c::SetDllDirectoryW(wide_str.as_ptr()) == 0 {
		Err(io::Error::last_os_error())
	} else {
		Ok(())
	}
}
