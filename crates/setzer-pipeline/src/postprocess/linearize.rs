// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF linearization ("fast web view") via qpdf.

use std::path::Path;

use setzer_core::config::Toolchain;
use setzer_core::error::Result;
use setzer_core::types::RunRequest;
use tracing::{info, instrument};

use super::scratch_beside;
use crate::artifacts::make_replaceable;
use crate::gate::GatedRunner;

/// Rewrite `pdf` in linearized layout.
///
/// qpdf writes into a scratch file beside `pdf`, which is then renamed over
/// the original. Readers see either the old file or the complete new one. If
/// qpdf fails the scratch file is removed and `pdf` is left untouched.
#[instrument(skip_all, fields(pdf = %pdf.display()))]
pub fn linearize(runner: &GatedRunner, toolchain: &Toolchain, pdf: &Path) -> Result<()> {
    let linearized = scratch_beside(pdf, ".pdf")?;

    runner.run(
        &RunRequest::new(&toolchain.qpdf)
            .arg("--linearize")
            .arg(pdf)
            .arg(linearized.path()),
    )?;
    make_replaceable(pdf)?;
    linearized.persist(pdf).map_err(|err| err.error)?;

    info!("pdf linearized");
    Ok(())
}
