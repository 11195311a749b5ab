// Copyright (c) 2023 Jonathan "Razordor" Alan Thomason
use std::{fmt, io, path};

/// A general category of shlib failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// No candidate path could be loaded.
	NotFound,
	/// The short name cannot be turned into a file name.
	InvalidName,
}

/// A single failed load attempt.
#[derive(Debug)]
pub struct Attempt {
	pub path: path::PathBuf,
	pub error: io::Error,
}

impl fmt::Display for Attempt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} : {}", self.path.display(), self.error)
	}
}

#[derive(Debug, thiserror::Error)]
enum Repr {
	#[error("library `{name}` not found ({} paths tried)", .attempts.len())]
	NotFound { name: String, attempts: Vec<Attempt> },
	#[error("invalid library name `{0}`")]
	InvalidName(String),
}

/// The error type for shlib operations.
#[derive(Debug, thiserror::Error)]
#[error("shlib error: {repr}")]
pub struct Error {
	repr: Repr,
}

impl Error {
	pub(crate) fn not_found(name: &str, attempts: Vec<Attempt>) -> Self {
		Self {
			repr: Repr::NotFound {
				name: name.to_owned(),
				attempts,
			},
		}
	}

	pub(crate) fn invalid_name(name: &str) -> Self {
		Self {
			repr: Repr::InvalidName(name.to_owned()),
		}
	}

	#[inline]
	pub fn kind(&self) -> ErrorKind {
		match self.repr {
			Repr::NotFound { .. } => ErrorKind::NotFound,
			Repr::InvalidName(_) => ErrorKind::InvalidName,
		}
	}

	/// Every failed attempt in the order it was made.
	///
	/// Empty unless the kind is [`ErrorKind::NotFound`].
	pub fn attempts(&self) -> &[Attempt] {
		match &self.repr {
			Repr::NotFound { attempts, .. } => attempts,
			Repr::InvalidName(_) => &[],
		}
	}
}
