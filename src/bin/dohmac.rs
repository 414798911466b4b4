// SPDX-License-Identifier: MIT
// Project: dodigest
// File: dohmac.rs
// Author: dodigest maintainers
// Copyright (c) 2026 dodigest maintainers

use dodigest::dod::app;

fn main() {
	let code = app::run_hmac(std::env::args_os(), &mut std::io::stdout());
	std::process::exit(code);
}
