// SPDX-License-Identifier: MIT
// Project: dodigest
// Module: mac (keyed file digest)
// Author: dodigest maintainers
// Copyright (c) 2026 dodigest maintainers

//! Keyed message authentication for `dohmac`: the HMAC construction, the
//! compiled-in key and the file-level command.

pub mod commands;
pub mod hmac;
pub mod key;
