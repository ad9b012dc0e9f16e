// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Optional PDF post-processing stages: size reduction and linearization.

pub mod linearize;
pub mod reduce;

pub use linearize::linearize;
pub use reduce::reduce;

use std::io;
use std::path::Path;

use tempfile::NamedTempFile;

/// Create a scratch file in the same directory as `target`.
///
/// Living next to the target keeps the final rename on one filesystem. The
/// file is deleted when the handle drops unless it is persisted first.
pub(crate) fn scratch_beside(target: &Path, suffix: &str) -> io::Result<NamedTempFile> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    tempfile::Builder::new()
        .prefix(".setzer-")
        .suffix(suffix)
        .tempfile_in(dir)
}
