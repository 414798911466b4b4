// SPDX-License-Identifier: MIT
// Project: dodigest
// File: check.rs
// Author: dodigest maintainers
// Copyright (c) 2026 dodigest maintainers

//! Comparison of a computed digest against previously generated checking
//! data supplied as hex on the command line.

use crate::dod::error::{DigestError, DigestErrorKind};

pub const EQUAL_MESSAGE: &str = "Data file is equal to the checking data.";
pub const DIFFERS_MESSAGE: &str = "Data file differs from checking data.";

/// Expected digest bytes decoded from user-supplied hex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckingData {
	expected: Vec<u8>,
}

impl CheckingData {
	/// Accepts upper- or lowercase hex of exactly `digest_len` bytes.
	pub fn parse(
		hex_text: &str,
		digest_len: usize,
	) -> Result<Self, DigestError> {
		let expected_chars = digest_len * 2;
		if hex_text.len() != expected_chars {
			return Err(DigestError::new(
				DigestErrorKind::InvalidCheckData,
				format!(
					"Invalid checking data size {}. It must be {} characters.",
					hex_text.len(),
					expected_chars
				),
			));
		}
		let expected = hex::decode(hex_text).map_err(|err| {
			DigestError::new(
				DigestErrorKind::InvalidCheckData,
				format!("Invalid checking data: {}", err),
			)
		})?;
		Ok(Self { expected })
	}

	pub fn matches(&self, digest: &[u8]) -> bool {
		self.expected == digest
	}

	/// Returns the line to print, or a mismatch error carrying it.
	pub fn verify(
		&self,
		digest: &[u8],
	) -> Result<&'static str, DigestError> {
		if self.matches(digest) {
			Ok(EQUAL_MESSAGE)
		} else {
			Err(DigestError::new(
				DigestErrorKind::Mismatch,
				DIFFERS_MESSAGE,
			))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_is_case_insensitive() {
		let lower = CheckingData::parse("0aff", 2).expect("lower");
		let upper = CheckingData::parse("0AFF", 2).expect("upper");
		assert_eq!(lower, upper);
		assert!(lower.matches(&[0x0a, 0xff]));
	}

	#[test]
	fn wrong_length_is_rejected() {
		let err = CheckingData::parse("abc", 2).expect_err("length");
		assert_eq!(err.kind(), DigestErrorKind::InvalidCheckData);
		assert_eq!(
			err.message(),
			"Invalid checking data size 3. It must be 4 characters."
		);
	}

	#[test]
	fn non_hex_is_rejected() {
		let err = CheckingData::parse("zz00", 2).expect_err("hex");
		assert_eq!(err.kind(), DigestErrorKind::InvalidCheckData);
	}

	#[test]
	fn verify_reports_mismatch() {
		let data = CheckingData::parse("0000", 2).expect("parse");
		assert_eq!(data.verify(&[0, 0]).expect("equal"), EQUAL_MESSAGE);
		let err = data.verify(&[0, 1]).expect_err("differs");
		assert_eq!(err.kind(), DigestErrorKind::Mismatch);
		assert_eq!(err.message(), DIFFERS_MESSAGE);
	}
}
