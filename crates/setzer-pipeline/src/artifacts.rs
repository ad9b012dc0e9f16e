// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Lifecycle of the build's output files.
//
// An artifact is either absent or the complete result of a successful build.
// Finished artifacts are made read-only so that nothing downstream edits a
// generated file by accident.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use setzer_core::config::ArtifactPaths;
use setzer_core::error::Result;
use tracing::debug;

/// The primary (PDF) and secondary (PostScript) outputs of a build.
#[derive(Debug, Clone)]
pub struct ManagedArtifacts {
    pdf: PathBuf,
    ps: PathBuf,
}

impl ManagedArtifacts {
    pub fn new(paths: &ArtifactPaths) -> Self {
        Self {
            pdf: paths.pdf.clone(),
            ps: paths.ps.clone(),
        }
    }

    pub fn pdf(&self) -> &Path {
        &self.pdf
    }

    pub fn ps(&self) -> &Path {
        &self.ps
    }

    /// Delete every artifact that exists. Absent files are skipped, so this is
    /// safe to call any number of times.
    pub fn remove_existing(&self) -> Result<()> {
        for path in [&self.ps, &self.pdf] {
            if remove_if_exists(path)? {
                debug!(path = %path.display(), "removed artifact");
            }
        }
        Ok(())
    }

    /// Final pass after all stages succeeded: drop or lock the PostScript file,
    /// and lock the PDF.
    pub fn finalize(&self, unlink_ps: bool) -> Result<()> {
        if self.ps.is_file() {
            if unlink_ps {
                remove_if_exists(&self.ps)?;
                debug!(path = %self.ps.display(), "removed intermediate postscript");
            } else {
                make_read_only(&self.ps)?;
            }
        }
        if self.pdf.is_file() {
            make_read_only(&self.pdf)?;
        }
        Ok(())
    }
}

/// Remove `path` if it is a regular file. Returns whether anything was removed.
pub fn remove_if_exists(path: &Path) -> io::Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    make_replaceable(path)?;
    fs::remove_file(path)?;
    Ok(true)
}

/// Allow `path` to be deleted or renamed over.
///
/// On unix that is governed by the directory, so a locked artifact needs no
/// change. Windows refuses to touch a read-only file, so the flag is cleared
/// there; `ManagedArtifacts::finalize` locks the file again.
pub fn make_replaceable(path: &Path) -> io::Result<()> {
    #[cfg(not(unix))]
    {
        let mut perms = fs::metadata(path)?.permissions();
        if perms.readonly() {
            perms.set_readonly(false);
            fs::set_permissions(path, perms)?;
        }
    }
    #[cfg(unix)]
    let _ = path;
    Ok(())
}

/// Restrict `path` to read-only: `r--r--r--` on unix.
pub fn make_read_only(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o444))
    }
    #[cfg(not(unix))]
    {
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_readonly(true);
        fs::set_permissions(path, perms)
    }
}
