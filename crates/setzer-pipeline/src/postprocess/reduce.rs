// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF size reduction by a PostScript round trip.
//
// `pdf2ps` renders the PDF to PostScript at the requested language level, the
// original PDF is discarded, and `ps2pdf` regenerates it from the PostScript.
// Ghostscript's re-distillation usually drops unused resources and merges
// duplicate fonts, which is where the savings come from.

use std::fs;
use std::path::Path;

use setzer_core::config::Toolchain;
use setzer_core::error::Result;
use setzer_core::types::RunRequest;
use tracing::{info, instrument};

use super::scratch_beside;
use crate::artifacts::remove_if_exists;
use crate::gate::GatedRunner;

/// Regenerate `pdf` through an intermediate PostScript file.
///
/// The intermediate lives only for the duration of this call.
#[instrument(skip_all, fields(pdf = %pdf.display(), language_level = language_level))]
pub fn reduce(
    runner: &GatedRunner,
    toolchain: &Toolchain,
    pdf: &Path,
    language_level: u8,
) -> Result<()> {
    let before = fs::metadata(pdf)?.len();
    let intermediate = scratch_beside(pdf, ".ps")?;

    runner.run(
        &RunRequest::new(&toolchain.pdf2ps)
            .arg(format!("-dLanguageLevel={language_level}"))
            .arg(pdf)
            .arg(intermediate.path()),
    )?;
    remove_if_exists(pdf)?;
    runner.run(
        &RunRequest::new(&toolchain.ps2pdf)
            .arg(intermediate.path())
            .arg(pdf),
    )?;

    let after = fs::metadata(pdf)?.len();
    info!(before, after, "pdf regenerated");
    Ok(())
}
