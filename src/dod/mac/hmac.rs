// SPDX-License-Identifier: MIT
// Project: dodigest
// File: hmac.rs
// Author: dodigest maintainers
// Copyright (c) 2026 dodigest maintainers

//! Nested-hash HMAC construction over a block-oriented digest, with the
//! MD5 specialisation used by `dohmac`.

use digest::core_api::BlockSizeUser;
use digest::{Digest, Output};
use md5::Md5;

pub const OUTER_PAD: u8 = 0x5c;
pub const INNER_PAD: u8 = 0x36;

/// Size in bytes of an HMAC-MD5 tag.
pub const HMAC_MD5_LEN: usize = 16;

pub type HmacMd5Tag = [u8; HMAC_MD5_LEN];

/// Reduces `key` to exactly one block of `D`: keys longer than the
/// block are hashed first, then the result is zero-padded on the right.
pub fn normalize_key<D>(key: &[u8]) -> Vec<u8>
where
	D: Digest + BlockSizeUser,
{
	let block_size = D::block_size();
	let mut block = vec![0u8; block_size];
	if key.len() > block_size {
		let hashed = D::digest(key);
		block[..hashed.len()].copy_from_slice(&hashed);
	} else {
		block[..key.len()].copy_from_slice(key);
	}
	block
}

fn xor_pad(block: &[u8], pad: u8) -> Vec<u8> {
	block.iter().map(|b| b ^ pad).collect()
}

/// `hash(outer_pad || hash(inner_pad || message))` with both pads derived
/// from the normalized key block.
pub fn hmac<D>(key: &[u8], message: &[u8]) -> Output<D>
where
	D: Digest + BlockSizeUser,
{
	let block = normalize_key::<D>(key);
	let inner = D::new()
		.chain_update(xor_pad(&block, INNER_PAD))
		.chain_update(message)
		.finalize();
	D::new()
		.chain_update(xor_pad(&block, OUTER_PAD))
		.chain_update(inner)
		.finalize()
}

pub fn hmac_md5(key: &[u8], message: &[u8]) -> HmacMd5Tag {
	hmac::<Md5>(key, message).into()
}
