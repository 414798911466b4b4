// SPDX-License-Identifier: MIT
// Project: dodigest
// File: key.rs
// Author: dodigest maintainers
// Copyright (c) 2026 dodigest maintainers

//! The HMAC key. `dohmac` always uses the compiled-in application
//! identifier; existing verifiers depend on it, so the CLI exposes no
//! runtime override. Library callers may pass any other key.

use std::borrow::Cow;

/// Application identifier embedded as the HMAC key.
pub const DEFAULT_KEY: &[u8] = b"ActivCash_6.0.x";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestKey {
	bytes: Cow<'static, [u8]>,
}

impl DigestKey {
	pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
		Self {
			bytes: Cow::Owned(bytes.into()),
		}
	}

	pub fn as_bytes(&self) -> &[u8] {
		self.bytes.as_ref()
	}

	pub fn is_default(&self) -> bool {
		self.as_bytes() == DEFAULT_KEY
	}
}

impl Default for DigestKey {
	fn default() -> Self {
		Self {
			bytes: Cow::Borrowed(DEFAULT_KEY),
		}
	}
}

impl AsRef<[u8]> for DigestKey {
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}
