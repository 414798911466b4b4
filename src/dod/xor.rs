// SPDX-License-Identifier: MIT
// Project: dodigest
// File: xor.rs
// Author: dodigest maintainers
// Copyright (c) 2026 dodigest maintainers

//! 64-byte block XOR checksum used by `doxor`.
//!
//! The accumulator starts as 64 bytes of `#` (0x23). Input is folded in
//! consecutive 64-byte blocks with `acc[i] ^= block[i]`. A final partial
//! block is right-padded with the seed byte before folding, so an input
//! whose length is a multiple of 64 (including an empty one) folds no
//! extra block.
//!
//! This is a cheap fingerprint for spotting gross differences between
//! files, not an integrity primitive: XOR folding is trivially collidable.

use crate::dod::error::DigestError;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

pub const BLOCK_SIZE: usize = 64;
pub const SEED_BYTE: u8 = b'#';

pub type XorBlock = [u8; BLOCK_SIZE];

const READ_BUFFER_SIZE: usize = 8192;

fn fold(accumulator: &mut XorBlock, block: &[u8]) {
	for (acc, byte) in accumulator.iter_mut().zip(block) {
		*acc ^= byte;
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockXor {
	accumulator: XorBlock,
	pending: XorBlock,
	pending_len: usize,
}

impl Default for BlockXor {
	fn default() -> Self {
		Self::new()
	}
}

impl BlockXor {
	pub fn new() -> Self {
		Self {
			accumulator: [SEED_BYTE; BLOCK_SIZE],
			pending: [0u8; BLOCK_SIZE],
			pending_len: 0,
		}
	}

	pub fn update(&mut self, mut data: &[u8]) {
		if self.pending_len > 0 {
			let take = (BLOCK_SIZE - self.pending_len).min(data.len());
			self.pending[self.pending_len..self.pending_len + take]
				.copy_from_slice(&data[..take]);
			self.pending_len += take;
			data = &data[take..];
			if self.pending_len < BLOCK_SIZE {
				return;
			}
			fold(&mut self.accumulator, &self.pending);
			self.pending_len = 0;
		}

		let mut blocks = data.chunks_exact(BLOCK_SIZE);
		for block in &mut blocks {
			fold(&mut self.accumulator, block);
		}
		let tail = blocks.remainder();
		self.pending[..tail.len()].copy_from_slice(tail);
		self.pending_len = tail.len();
	}

	pub fn finalize(mut self) -> XorBlock {
		if self.pending_len > 0 {
			self.pending[self.pending_len..].fill(SEED_BYTE);
			fold(&mut self.accumulator, &self.pending);
		}
		self.accumulator
	}
}

impl Write for BlockXor {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.update(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

pub fn xor_bytes(data: &[u8]) -> XorBlock {
	let mut folder = BlockXor::new();
	folder.update(data);
	folder.finalize()
}

pub fn xor_file(path: &Path) -> Result<XorBlock, DigestError> {
	let file =
		File::open(path).map_err(|err| DigestError::open(path, err))?;
	let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
	let mut folder = BlockXor::new();
	io::copy(&mut reader, &mut folder)
		.map_err(|err| DigestError::read(path, err))?;
	Ok(folder.finalize())
}
