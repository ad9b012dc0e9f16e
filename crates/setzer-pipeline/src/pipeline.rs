// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The build pipeline: pre-clean → engine → [reduce] → [linearize] → finalize.
//
// Stages run strictly in order with no retries. The first failing stage
// aborts the build, and the managed artifacts are deleted before the error is
// returned, so a failed build never leaves output behind.

use setzer_core::config::BuildConfig;
use setzer_core::error::{Result, SetzerError};
use tracing::{error, info, instrument, warn};

use crate::artifacts::ManagedArtifacts;
use crate::engine;
use crate::gate::GatedRunner;
use crate::postprocess;

/// One build, driven by an immutable configuration.
pub struct BuildPipeline<'a> {
    config: &'a BuildConfig,
    runner: GatedRunner,
    artifacts: ManagedArtifacts,
}

impl<'a> BuildPipeline<'a> {
    pub fn new(config: &'a BuildConfig) -> Self {
        Self {
            config,
            runner: GatedRunner::new(config.gate),
            artifacts: ManagedArtifacts::new(&config.artifacts),
        }
    }

    /// Run every enabled stage.
    ///
    /// The input is checked before anything is touched; a missing input leaves
    /// existing artifacts alone. Any later failure removes them.
    #[instrument(skip_all, fields(input = %self.config.input.display()))]
    pub fn run(&self) -> Result<()> {
        if !self.config.input.is_file() {
            return Err(SetzerError::InputNotFound(self.config.input.clone()));
        }

        match self.stages() {
            Ok(()) => {
                info!("build complete");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "build failed, removing outputs");
                Err(after_cleanup(err, self.artifacts.remove_existing()))
            }
        }
    }

    fn stages(&self) -> Result<()> {
        let config = self.config;

        self.artifacts.remove_existing()?;
        engine::typeset(&self.runner, config, &self.artifacts)?;

        if config.stages.reduce {
            postprocess::reduce(
                &self.runner,
                &config.toolchain,
                self.artifacts.pdf(),
                config.stages.language_level,
            )?;
        }
        if config.stages.linearize {
            postprocess::linearize(&self.runner, &config.toolchain, self.artifacts.pdf())?;
        }

        self.artifacts.finalize(config.stages.unlink_ps)
    }
}

/// The error to report once outputs have been removed after `err`. A failed
/// cleanup is attached rather than dropped.
fn after_cleanup(err: SetzerError, cleanup: Result<()>) -> SetzerError {
    match cleanup {
        Ok(()) => err,
        Err(cleanup) => {
            error!(error = %cleanup, "could not remove outputs");
            SetzerError::CleanupFailed {
                error: Box::new(err),
                cleanup: Box::new(cleanup),
            }
        }
    }
}
