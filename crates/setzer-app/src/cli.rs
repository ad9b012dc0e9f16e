// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command line surface. Parsed once and turned into a `BuildConfig`.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use setzer_core::config::{
    ArtifactPaths, BuildConfig, FormatSelection, GatePolicy, StageSelection, Toolchain,
};
use setzer_core::types::EngineLogLevel;

/// Run the typesetting engine quietly, then post-process the PDF it produced.
///
/// Engine output is only shown when something goes wrong, and on any failure
/// the PDF and PostScript outputs are deleted.
#[derive(Debug, Parser)]
#[command(name = "setzer", version, args_override_self = true)]
pub struct Args {
    /// Input document for the engine
    #[arg(long, value_name = "FILE")]
    pub ly: PathBuf,
    /// PostScript file the engine produces
    #[arg(long, value_name = "FILE")]
    pub ps: PathBuf,
    /// PDF file the engine produces
    #[arg(long, value_name = "FILE")]
    pub pdf: PathBuf,
    /// Value passed through to the engine's --output flag
    #[arg(long, value_name = "BASE")]
    pub output: String,

    /// Ask the engine for PostScript
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub do_ps: bool,
    /// Ask the engine for PDF
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub do_pdf: bool,
    /// Emit debug info
    #[arg(long)]
    pub debug: bool,
    /// With --debug, treat every run as failed so its output is always shown
    #[arg(long, default_value_t = false, action = ArgAction::Set)]
    pub debug_forces_failure: bool,
    /// Delete the PostScript file at the end
    #[arg(long, default_value_t = false, action = ArgAction::Set)]
    pub unlink_ps: bool,
    /// Shrink the PDF through a PostScript round trip
    #[arg(long, default_value_t = false, action = ArgAction::Set)]
    pub reduce: bool,
    /// Linearize the PDF afterwards
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub linearize: bool,
    /// Fail when a tool prints anything, even on success
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub stop_on_output: bool,

    /// Engine log level: none (silent), error, warning, basic, progress, info, debug
    #[arg(long, value_name = "LEVEL", default_value = "error")]
    pub loglevel: EngineLogLevel,
    /// PostScript language level for --reduce
    #[arg(long, value_name = "N", default_value_t = 3)]
    pub language_level: u8,

    /// Typesetting engine executable
    #[arg(long, value_name = "EXE", env = "SETZER_ENGINE", default_value = "lilypond")]
    pub engine: String,
    /// qpdf executable
    #[arg(long, value_name = "EXE", env = "SETZER_QPDF", default_value = "qpdf")]
    pub qpdf: String,
    /// pdf2ps executable
    #[arg(long, value_name = "EXE", env = "SETZER_PDF2PS", default_value = "pdf2ps")]
    pub pdf2ps: String,
    /// ps2pdf executable
    #[arg(long, value_name = "EXE", env = "SETZER_PS2PDF", default_value = "ps2pdf")]
    pub ps2pdf: String,
}

impl Args {
    pub fn into_config(self) -> BuildConfig {
        BuildConfig {
            input: self.ly,
            output_base: self.output,
            artifacts: ArtifactPaths {
                pdf: self.pdf,
                ps: self.ps,
            },
            formats: FormatSelection {
                ps: self.do_ps,
                pdf: self.do_pdf,
            },
            log_level: self.loglevel,
            gate: GatePolicy {
                debug: self.debug,
                stop_on_output: self.stop_on_output,
                debug_forces_failure: self.debug_forces_failure,
            },
            stages: StageSelection {
                reduce: self.reduce,
                linearize: self.linearize,
                unlink_ps: self.unlink_ps,
                language_level: self.language_level,
            },
            toolchain: Toolchain {
                engine: self.engine,
                qpdf: self.qpdf,
                pdf2ps: self.pdf2ps,
                ps2pdf: self.ps2pdf,
            },
        }
    }
}
