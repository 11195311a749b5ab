// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason

use std::{ffi, io, marker, mem, path, ptr};

use crate::os;

/// An object providing access to an open shared library on the filesystem.
///
/// The library is closed when dropped. The path it was opened with is kept, so callers
/// can tell which of several candidates won.
#[derive(Debug)]
pub struct Library {
	handle: os::Handle,
	path: path::PathBuf,
}

// Library handles are process-wide, so they may be shared between threads.
unsafe impl Send for Library {}
unsafe impl Sync for Library {}

impl Library {
	/// Attempts to open a shared library through the system loader.
	///
	/// `path` is handed over as is. A bare file name is resolved by the system's own
	/// search rules.
	///
	/// # Errors
	/// Returns the loader's error if the library could not be loaded.
	///
	/// # Examples
	///
	/// ```no_run
	/// use shlib::Library;
	///
	/// let lib = Library::open("libfoo.so").unwrap();
	/// ```
	pub fn open<P: AsRef<path::Path>>(path: P) -> io::Result<Self> {
		let path = path.as_ref();
		let handle = unsafe { os::dylib_open(path.as_os_str())? };
		Ok(Self {
			handle,
			path: path.to_path_buf(),
		})
	}

	/// Retrieves a symbol from the library.
	///
	/// # Errors
	/// Returns an error if the symbol does not exist, or if `name` contains a nul byte.
	///
	/// # Examples
	///
	/// ```no_run
	/// use shlib::Library;
	/// use std::mem;
	///
	/// let lib = Library::open("libfoo.so").unwrap();
	/// let sym = lib.symbol("foo_init").unwrap();
	/// let foo_init: unsafe extern "C" fn() = unsafe { mem::transmute(sym.cast::<()>()) };
	/// ```
	pub fn symbol<'a>(&'a self, name: &str) -> io::Result<Symbol<'a>> {
		let addr = unsafe { os::dylib_symbol(self.handle, name)? };
		Ok(Symbol(addr.as_ptr(), marker::PhantomData))
	}

	/// The path this library was opened with.
	#[inline]
	pub fn path(&self) -> &path::Path {
		&self.path
	}

	/// Closes the library, reporting any error from the system loader.
	///
	/// Dropping the library closes it as well, but ignores the result.
	///
	/// # Errors
	/// May error depending on system call.
	pub fn close(self) -> io::Result<()> {
		let this = mem::ManuallyDrop::new(self);
		// `this` is never dropped, so the path has to be released by hand.
		drop(unsafe { ptr::read(&this.path) });
		unsafe { os::dylib_close(this.handle) }
	}
}

impl Drop for Library {
	fn drop(&mut self) {
		let _ = unsafe { os::dylib_close(self.handle) };
	}
}

/// The raw address of a symbol, bound to the lifetime of its [`Library`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(transparent)]
pub struct Symbol<'a>(*mut ffi::c_void, marker::PhantomData<&'a Library>);

impl Symbol<'_> {
	/// Casts to a pointer of another type.
	#[inline]
	pub const fn cast<T>(self) -> *mut T {
		self.0 as _
	}
}
