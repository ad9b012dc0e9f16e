// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stand-in executables for the external tools.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write an executable `/bin/sh` script called `name` into `dir`.
pub fn stub(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write stub");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod stub");
    path
}

/// An engine that honours `--output=<base>` and writes `<base>.pdf` and
/// `<base>.ps`, then runs `tail` (e.g. `exit 2` or `echo noise`).
pub fn engine_stub(dir: &Path, tail: &str) -> PathBuf {
    let body = format!(
        r#"for arg in "$@"; do
  case "$arg" in
    --output=*) out="${{arg#--output=}}" ;;
  esac
done
echo "engine pdf" > "$out.pdf"
echo "engine ps" > "$out.ps"
{tail}"#
    );
    stub(dir, "engine", &body)
}

/// Sorted names of the entries in `dir`.
pub fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
