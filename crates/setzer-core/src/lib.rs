// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Setzer — Core types, configuration and error definitions shared across all
// crates.

pub mod config;
pub mod error;
pub mod report;
pub mod types;

pub use config::BuildConfig;
pub use error::SetzerError;
pub use types::*;
