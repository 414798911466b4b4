// SPDX-License-Identifier: MIT
// Project: dodigest
// File: commands.rs
// Author: dodigest maintainers
// Copyright (c) 2026 dodigest maintainers

//! File-level HMAC-MD5 operation used by `dohmac`.

use crate::dod::error::{DigestError, DigestErrorKind};
use crate::dod::mac::hmac::{hmac_md5, HmacMd5Tag};
use crate::dod::mac::key::DigestKey;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const EMPTY_CONTENT_MESSAGE: &str = "File has not content to hash";

/// Loads the whole file and tags its contents. An empty file is reported
/// as [`DigestErrorKind::EmptyContent`] and no tag is computed.
pub fn hmac_file(
	path: &Path,
	key: &DigestKey,
) -> Result<HmacMd5Tag, DigestError> {
	let mut file =
		File::open(path).map_err(|err| DigestError::open(path, err))?;
	let mut contents = Vec::new();
	file.read_to_end(&mut contents)
		.map_err(|err| DigestError::read(path, err))?;
	if contents.is_empty() {
		return Err(DigestError::new(
			DigestErrorKind::EmptyContent,
			EMPTY_CONTENT_MESSAGE,
		));
	}
	Ok(hmac_md5(key.as_bytes(), &contents))
}

#[cfg(test)]
mod tests {
	use super::*;
	use hex_literal::hex;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[test]
	fn tags_file_with_default_key() {
		let mut file = NamedTempFile::new().expect("tempfile");
		file.write_all(b"The quick brown fox jumps over the lazy dog\n")
			.expect("write fixture");
		let tag = hmac_file(file.path(), &DigestKey::default())
			.expect("tag");
		assert_eq!(tag, hex!("6486d16a18cec2bef3c811e1ec16a165"));
	}

	#[test]
	fn tags_file_with_alternate_key() {
		let mut file = NamedTempFile::new().expect("tempfile");
		file.write_all(b"The quick brown fox jumps over the lazy dog\n")
			.expect("write fixture");
		let key = DigestKey::new(b"Jefe".to_vec());
		assert!(!key.is_default());
		let tag = hmac_file(file.path(), &key).expect("tag");
		assert_eq!(tag, hex!("a7de5619f151c41377f0c0b94ba421d3"));
		assert_ne!(
			tag,
			hmac_file(file.path(), &DigestKey::default()).expect("tag")
		);
	}

	#[test]
	fn empty_file_is_rejected() {
		let file = NamedTempFile::new().expect("tempfile");
		let err = hmac_file(file.path(), &DigestKey::default())
			.expect_err("empty file");
		assert_eq!(err.kind(), DigestErrorKind::EmptyContent);
		assert_eq!(err.message(), EMPTY_CONTENT_MESSAGE);
	}

	#[test]
	fn missing_file_is_file_access_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let err = hmac_file(
			&dir.path().join("absent.bin"),
			&DigestKey::default(),
		)
		.expect_err("missing file");
		assert_eq!(err.kind(), DigestErrorKind::FileAccess);
	}
}
