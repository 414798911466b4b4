// SPDX-License-Identifier: MIT
// Project: dodigest
// Module: digest posture notices
// Author: dodigest maintainers
// Copyright (c) 2026 dodigest maintainers

//! Stderr notices describing what each digest can and cannot be trusted
//! for. stdout stays reserved for the tool output.

use colored::Colorize;

const NIST_REFERENCE: &str =
	"https://doi.org/10.6028/NIST.SP.800-131Ar2";
const RFC6151_REFERENCE: &str = "https://www.rfc-editor.org/rfc/rfc6151";

/// Metadata describing a digest produced by one of the tools.
#[derive(Debug, Clone)]
pub struct DigestPosture {
	/// Identifier used by the tool (e.g., "hmac-md5").
	pub algorithm_id: &'static str,
	pub display_name: &'static str,
	pub cryptographic: bool,
	pub advice: &'static str,
	pub references: &'static [&'static str],
}

const POSTURES: &[DigestPosture] = &[
	DigestPosture {
		algorithm_id: "hmac-md5",
		display_name: "HMAC-MD5",
		cryptographic: true,
		advice: "Kept for compatibility with existing verifiers; prefer HMAC-SHA256 for new integrations",
		references: &[RFC6151_REFERENCE, NIST_REFERENCE],
	},
	DigestPosture {
		algorithm_id: "block-xor",
		display_name: "Block XOR",
		cryptographic: false,
		advice: "Use it only to spot accidental file differences",
		references: &[],
	},
];

pub fn posture_for(algorithm: &str) -> Option<&'static DigestPosture> {
	let needle = algorithm.to_ascii_lowercase();
	POSTURES.iter().find(|entry| entry.algorithm_id == needle)
}

impl DigestPosture {
	pub fn headline(&self) -> String {
		if self.cryptographic {
			format!(
				"WARNING: {} is a legacy construction (MD5 collisions known)",
				self.display_name
			)
		} else {
			format!(
				"NOTE: {} is not a cryptographic checksum",
				self.display_name
			)
		}
	}

	pub fn banner(&self) -> String {
		format!("⚠ {}. {}.", self.headline(), self.advice)
	}
}

/// Emits the notice for `algorithm` to stderr, highlighted when the
/// terminal supports it.
pub fn emit_notice(algorithm: &str) {
	let Some(posture) = posture_for(algorithm) else {
		return;
	};
	eprintln!("{}", posture.banner().yellow().bold());
	if !posture.references.is_empty() {
		eprintln!(
			"{}",
			format!("References: {}", posture.references.join(" | "))
				.yellow()
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hmac_md5_is_flagged_legacy() {
		let posture = posture_for("HMAC-MD5").expect("hmac-md5");
		assert!(posture.cryptographic);
		assert!(posture.banner().contains("legacy"));
		assert!(posture.references.iter().any(|r| r.contains("rfc6151")));
	}

	#[test]
	fn block_xor_is_flagged_non_cryptographic() {
		let posture = posture_for("block-xor").expect("block-xor");
		assert!(!posture.cryptographic);
		assert!(posture.banner().contains("not a cryptographic"));
	}

	#[test]
	fn unknown_algorithm_has_no_posture() {
		assert!(posture_for("sha256").is_none());
	}
}
