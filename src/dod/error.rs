// SPDX-License-Identifier: MIT
// Project: dodigest
// File: error.rs
// Author: dodigest maintainers
// Copyright (c) 2026 dodigest maintainers

//! Error taxonomy shared by both digest tools. The CLI shells map each
//! kind to its own exit status.

use std::borrow::Cow;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestErrorKind {
	Usage,
	InvalidCheckData,
	FileAccess,
	Mismatch,
	EmptyContent,
	Io,
}

impl DigestErrorKind {
	pub fn exit_code(self) -> i32 {
		match self {
			DigestErrorKind::Usage
			| DigestErrorKind::InvalidCheckData => 1,
			DigestErrorKind::FileAccess => 2,
			DigestErrorKind::Mismatch => 3,
			DigestErrorKind::EmptyContent => 4,
			DigestErrorKind::Io => 5,
		}
	}
}

#[derive(Debug)]
pub struct DigestError {
	kind: DigestErrorKind,
	message: Cow<'static, str>,
}

impl DigestError {
	pub fn new(
		kind: DigestErrorKind,
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	/// Failure to open `path` at all.
	pub fn open(path: &Path, err: io::Error) -> Self {
		Self::new(
			DigestErrorKind::FileAccess,
			format!("Unable to open {}, {}", path.display(), err),
		)
	}

	/// Failure while reading an already opened `path`.
	pub fn read(path: &Path, err: io::Error) -> Self {
		Self::new(
			DigestErrorKind::Io,
			format!("Unable to read {}, {}", path.display(), err),
		)
	}

	pub fn kind(&self) -> DigestErrorKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		self.message.as_ref()
	}

	pub fn exit_code(&self) -> i32 {
		self.kind.exit_code()
	}
}

impl std::fmt::Display for DigestError {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for DigestError {}

impl From<io::Error> for DigestError {
	fn from(err: io::Error) -> Self {
		DigestError::new(DigestErrorKind::Io, err.to_string())
	}
}
