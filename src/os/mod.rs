// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
use unix as imp;
#[cfg(windows)]
use windows as imp;

use std::{ffi, ptr};

/// Raw library handle as returned by the system loader.
pub(crate) type Handle = ptr::NonNull<ffi::c_void>;

pub(crate) use imp::{dylib_close, dylib_open, dylib_set_directory, dylib_symbol};
