// SPDX-License-Identifier: MIT
// Project: dodigest
// File: lib.rs
// Author: dodigest maintainers
// Copyright (c) 2026 dodigest maintainers

pub mod dod {
	pub mod app;
	pub mod check;
	pub mod error;
	pub mod mac;
	pub mod weak;
	pub mod xor;
}

#[cfg(test)]
mod tests {
	use super::*;
	use dod::mac::hmac::hmac_md5;
	use dod::mac::key::DEFAULT_KEY;
	use dod::xor::{xor_bytes, BLOCK_SIZE, SEED_BYTE};
	use hex_literal::hex;

	#[test]
	fn test_hmac_default_key_empty_message() {
		assert_eq!(
			hmac_md5(DEFAULT_KEY, b""),
			hex!("0d9a2acf32775f9da9fe3752b3393753")
		);
	}

	#[test]
	fn test_hmac_default_key_single_byte() {
		assert_eq!(
			hmac_md5(DEFAULT_KEY, b"a"),
			hex!("238e16105946e9fa24f93115d94bccda")
		);
	}

	#[test]
	fn test_hmac_default_key_hundred_bytes() {
		let message: Vec<u8> = (0..100u8).collect();
		assert_eq!(
			hmac_md5(DEFAULT_KEY, &message),
			hex!("48878a973da8f1b8515f8e2a1a899bd0")
		);
	}

	#[test]
	fn test_xor_empty_is_seed() {
		assert_eq!(xor_bytes(b""), [SEED_BYTE; BLOCK_SIZE]);
	}

	#[test]
	fn test_xor_two_counting_blocks() {
		let data: Vec<u8> = (0..128u8).collect();
		assert_eq!(xor_bytes(&data), [0x63u8; BLOCK_SIZE]);
	}

	#[test]
	fn test_xor_partial_second_block() {
		let data: Vec<u8> = (0..100u8).collect();
		assert_eq!(
			hex::encode(xor_bytes(&data)),
			"6363636363636363636363636363636363636363636363636363636363636363\
			636363632425262728292a2b2c2d2e2f303132333435363738393a3b3c3d3e3f"
		);
	}
}
