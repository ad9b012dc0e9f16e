// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Setzer.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::RunFailure;

/// Top-level error type for all Setzer operations. Every variant is fatal to
/// the build.
#[derive(Debug, Error)]
pub enum SetzerError {
    // -- Child processes --
    #[error("{} failed ({}) with return code {}", .0.request.program().to_string_lossy(), .0.reason, .0.outcome.status)]
    GatedFailure(Box<RunFailure>),

    #[error("could not start `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    // -- Artifacts --
    #[error("expected output {} was not produced: {source}", .path.display())]
    MissingArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input file {} does not exist", .0.display())]
    InputNotFound(PathBuf),

    /// A stage failed and the outputs could not be removed afterwards.
    #[error("{error} (outputs may remain: {cleanup})")]
    CleanupFailed {
        #[source]
        error: Box<SetzerError>,
        cleanup: Box<SetzerError>,
    },

    // -- Storage / serialisation --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<RunFailure> for SetzerError {
    fn from(failure: RunFailure) -> Self {
        Self::GatedFailure(Box::new(failure))
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SetzerError>;
