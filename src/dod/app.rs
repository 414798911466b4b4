// SPDX-License-Identifier: MIT
// Project: dodigest
// File: app.rs
// Author: dodigest maintainers
// Copyright (c) 2026 dodigest maintainers

use crate::dod::check::CheckingData;
use crate::dod::error::{DigestError, DigestErrorKind};
use crate::dod::mac::commands::hmac_file;
use crate::dod::mac::hmac::HMAC_MD5_LEN;
use crate::dod::mac::key::DigestKey;
use crate::dod::weak::emit_notice;
use crate::dod::xor::{xor_file, BLOCK_SIZE, SEED_BYTE};
use clap::error::ErrorKind;
use clap::{crate_authors, crate_version, Arg, ArgAction};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const HMAC_TOOL: &str = "dohmac";
pub const XOR_TOOL: &str = "doxor";

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

/// Static description of one digest tool's console contract.
struct ToolProfile {
	name: &'static str,
	algorithm_id: &'static str,
	about: &'static str,
	long_about: String,
	banner: &'static [&'static str],
	file_label: &'static str,
	result_label: Option<&'static str>,
	digest_len: usize,
}

impl ToolProfile {
	fn hmac() -> Self {
		Self {
			name: HMAC_TOOL,
			algorithm_id: "hmac-md5",
			about: "Compute the HMAC-MD5 digest of a file",
			long_about: "Compute the HMAC-MD5 digest of a file's contents \
				using the application key compiled into this tool. \
				Empty files are reported and not digested."
				.to_string(),
			banner: &[],
			file_label: "File to hash",
			result_label: None,
			digest_len: HMAC_MD5_LEN,
		}
	}

	fn xor() -> Self {
		Self {
			name: XOR_TOOL,
			algorithm_id: "block-xor",
			about: "Compute the 64-byte block XOR checksum of a file",
			long_about: format!(
				"Fold a file into a {size}-byte checksum. The accumulator \
				starts as {size} bytes of 0x{seed:02x} ('{seed_char}') and \
				every {size}-byte block is XORed into it in file order. A \
				final partial block is right-padded with 0x{seed:02x} \
				before folding; an empty file yields the untouched seed. \
				This is not a cryptographic checksum.",
				size = BLOCK_SIZE,
				seed = SEED_BYTE,
				seed_char = SEED_BYTE as char,
			),
			banner: &["DoXOR", "-----"],
			file_label: "File to XOR",
			result_label: Some("Result:"),
			digest_len: BLOCK_SIZE,
		}
	}

	fn usage_line(&self) -> String {
		format!("USAGE: {} <path to file>", self.name)
	}
}

#[derive(Debug)]
struct Invocation {
	path: PathBuf,
	check: Option<String>,
	quiet: bool,
}

enum Parsed {
	Run(Invocation),
	Exit(i32),
}

fn build_cli(profile: &ToolProfile) -> clap::Command {
	clap::Command::new(profile.name)
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name(profile.name)
		.version(crate_version!())
		.author(crate_authors!())
		.about(profile.about)
		.long_about(profile.long_about.clone())
		.arg(
			Arg::new("path")
				.help("File to digest")
				.value_parser(clap::value_parser!(PathBuf))
				.required(true),
		)
		.arg(
			Arg::new("check")
				.short('c')
				.long("check")
				.value_name("HEX")
				.help("Compare the digest against previously generated checking data"),
		)
		.arg(
			Arg::new("quiet")
				.short('q')
				.long("quiet")
				.help("Suppress the digest notice on stderr")
				.action(ArgAction::SetTrue),
		)
}

fn parse_invocation<I, T, W>(
	profile: &ToolProfile,
	args: I,
	out: &mut W,
) -> io::Result<Parsed>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
	W: Write,
{
	match build_cli(profile).try_get_matches_from(args) {
		Ok(matches) => {
			let path = matches
				.get_one::<PathBuf>("path")
				.cloned()
				.unwrap_or_default();
			Ok(Parsed::Run(Invocation {
				path,
				check: matches.get_one::<String>("check").cloned(),
				quiet: matches.get_flag("quiet"),
			}))
		}
		Err(err) => match err.kind() {
			ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
				write!(out, "{}", err)?;
				Ok(Parsed::Exit(0))
			}
			_ => {
				writeln!(out, "{}", profile.usage_line())?;
				Ok(Parsed::Exit(DigestErrorKind::Usage.exit_code()))
			}
		},
	}
}

fn emit_digest<W: Write>(
	profile: &ToolProfile,
	digest: &[u8],
	check: Option<&CheckingData>,
	out: &mut W,
) -> Result<(), DigestError> {
	if let Some(label) = profile.result_label {
		writeln!(out, "{}", label)?;
	}
	writeln!(out, "{}", hex::encode(digest))?;
	if let Some(check) = check {
		let line = check.verify(digest)?;
		writeln!(out, "{}", line)?;
	}
	Ok(())
}

fn report_failure<W: Write>(
	err: &DigestError,
	out: &mut W,
) -> io::Result<()> {
	match err.kind() {
		DigestErrorKind::EmptyContent | DigestErrorKind::Mismatch => {
			writeln!(out, "{}", err)
		}
		_ => {
			writeln!(out, "Unexpected error:")?;
			writeln!(out, "{}", err)
		}
	}
}

fn run_tool<I, T, W, F>(
	profile: &ToolProfile,
	args: I,
	out: &mut W,
	compute: F,
) -> io::Result<i32>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
	W: Write,
	F: FnOnce(&Path) -> Result<Vec<u8>, DigestError>,
{
	for line in profile.banner {
		writeln!(out, "{}", line)?;
	}
	let invocation = match parse_invocation(profile, args, out)? {
		Parsed::Run(invocation) => invocation,
		Parsed::Exit(code) => return Ok(code),
	};

	writeln!(
		out,
		"{} = {}",
		profile.file_label,
		invocation.path.display()
	)?;
	let check = match invocation
		.check
		.as_deref()
		.map(|text| CheckingData::parse(text, profile.digest_len))
		.transpose()
	{
		Ok(check) => check,
		Err(err) => {
			writeln!(out, "{}", err)?;
			writeln!(out, "{}", profile.usage_line())?;
			return Ok(err.exit_code());
		}
	};
	if !invocation.quiet {
		emit_notice(profile.algorithm_id);
	}

	let started = Instant::now();
	let outcome = compute(&invocation.path).and_then(|digest| {
		emit_digest(profile, &digest, check.as_ref(), out)
	});
	let code = match outcome {
		Ok(()) => 0,
		Err(err) => {
			report_failure(&err, out)?;
			err.exit_code()
		}
	};
	writeln!(
		out,
		"Processing completed: {}s",
		started.elapsed().as_secs_f64()
	)?;
	out.flush()?;
	Ok(code)
}

fn finish(result: io::Result<i32>) -> i32 {
	match result {
		Ok(code) => code,
		Err(err) => {
			eprintln!("Error: {}", err);
			DigestErrorKind::Io.exit_code()
		}
	}
}

/// Entry point of `dohmac`. Returns the process exit status.
pub fn run_hmac<I, T, W>(args: I, out: &mut W) -> i32
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
	W: Write,
{
	let key = DigestKey::default();
	finish(run_tool(&ToolProfile::hmac(), args, out, |path| {
		hmac_file(path, &key).map(|tag| tag.to_vec())
	}))
}

/// Entry point of `doxor`. Returns the process exit status.
pub fn run_xor<I, T, W>(args: I, out: &mut W) -> i32
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
	W: Write,
{
	finish(run_tool(&ToolProfile::xor(), args, out, |path| {
		xor_file(path).map(|block| block.to_vec())
	}))
}
