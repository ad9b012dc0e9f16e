// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Build configuration. Constructed once at startup and passed by reference to
// every stage; nothing in Setzer reads configuration from global state.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::EngineLogLevel;

/// Complete settings for one build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Source document handed to the engine.
    pub input: PathBuf,
    /// Value of the engine's `--output=` flag (directory or file base name).
    pub output_base: String,
    /// Files this build produces and must clean up on failure.
    pub artifacts: ArtifactPaths,
    /// Which formats the engine is asked to produce.
    pub formats: FormatSelection,
    pub log_level: EngineLogLevel,
    pub gate: GatePolicy,
    pub stages: StageSelection,
    pub toolchain: Toolchain,
}

impl BuildConfig {
    /// A configuration with every option at its default.
    pub fn new(
        input: impl Into<PathBuf>,
        output_base: impl Into<String>,
        artifacts: ArtifactPaths,
    ) -> Self {
        Self {
            input: input.into(),
            output_base: output_base.into(),
            artifacts,
            formats: FormatSelection::default(),
            log_level: EngineLogLevel::default(),
            gate: GatePolicy::default(),
            stages: StageSelection::default(),
            toolchain: Toolchain::default(),
        }
    }
}

/// Paths of the managed output artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactPaths {
    /// Primary artifact (PDF).
    pub pdf: PathBuf,
    /// Secondary artifact (PostScript).
    pub ps: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatSelection {
    pub ps: bool,
    pub pdf: bool,
}

impl Default for FormatSelection {
    fn default() -> Self {
        Self { ps: true, pdf: true }
    }
}

/// Rules the gated runner applies to every finished child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatePolicy {
    /// Emit debug diagnostics.
    pub debug: bool,
    /// Treat any stdout/stderr output as failure even when the exit code is 0.
    pub stop_on_output: bool,
    /// In debug mode, fail every run so its output is always shown.
    pub debug_forces_failure: bool,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            debug: false,
            stop_on_output: true,
            debug_forces_failure: false,
        }
    }
}

/// Optional post-processing and finalisation behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSelection {
    /// Round-trip the PDF through PostScript to shrink it.
    pub reduce: bool,
    /// Rewrite the PDF in linearized (web-optimised) layout.
    pub linearize: bool,
    /// Delete the PostScript artifact once the build is done.
    pub unlink_ps: bool,
    /// PostScript language level used by the reduction stage.
    pub language_level: u8,
}

impl Default for StageSelection {
    fn default() -> Self {
        Self {
            reduce: false,
            linearize: true,
            unlink_ps: false,
            language_level: 3,
        }
    }
}

/// External programs the pipeline drives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolchain {
    pub engine: String,
    pub qpdf: String,
    pub pdf2ps: String,
    pub ps2pdf: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            engine: "lilypond".into(),
            qpdf: "qpdf".into(),
            pdf2ps: "pdf2ps".into(),
            ps2pdf: "ps2pdf".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BuildConfig {
        BuildConfig::new(
            "book.ly",
            "out/book",
            ArtifactPaths {
                pdf: "out/book.pdf".into(),
                ps: "out/book.ps".into(),
            },
        )
    }

    #[test]
    fn defaults_match_documented_behaviour() {
        let config = sample();
        assert!(config.formats.ps && config.formats.pdf);
        assert!(!config.gate.debug);
        assert!(config.gate.stop_on_output);
        assert!(!config.gate.debug_forces_failure);
        assert!(!config.stages.reduce);
        assert!(config.stages.linearize);
        assert!(!config.stages.unlink_ps);
        assert_eq!(config.stages.language_level, 3);
        assert_eq!(config.log_level, EngineLogLevel::Error);
        assert_eq!(config.toolchain.engine, "lilypond");
    }

    #[test]
    fn config_serialises_for_debug_logging() {
        let json = serde_json::to_string(&sample()).expect("serialise");
        assert!(json.contains("\"log_level\":\"error\""));
        let back: BuildConfig = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back.artifacts, sample().artifacts);
    }
}
