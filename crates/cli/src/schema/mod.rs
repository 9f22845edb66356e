// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Types for JSON output structures.
//!
//! These are the exact shapes printed by `-o json`, and also derive JSON
//! Schema definitions via schemars for the `schema` command.

pub mod catalog;
pub mod timeline;
