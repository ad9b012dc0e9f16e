// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Setzer build driver.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Verbosity requested from the typesetting engine.
///
/// The variants are declared from quietest to chattiest, so the derived
/// ordering matches the engine's own notion of "more verbose".
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EngineLogLevel {
    /// No output at all.
    None,
    /// Errors only.
    #[default]
    Error,
    Warning,
    Basic,
    Progress,
    /// The engine's own default.
    Info,
    Debug,
}

impl EngineLogLevel {
    /// Every level, quietest first.
    pub const ALL: [EngineLogLevel; 7] = [
        Self::None,
        Self::Error,
        Self::Warning,
        Self::Basic,
        Self::Progress,
        Self::Info,
        Self::Debug,
    ];

    /// Keyword passed to the engine as `--loglevel=<KEYWORD>`.
    pub fn engine_keyword(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Basic => "BASIC",
            Self::Progress => "PROGRESS",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Lower-case name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Basic => "basic",
            Self::Progress => "progress",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for EngineLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineLogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "silent" => Ok(Self::None),
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "basic" => Ok(Self::Basic),
            "progress" => Ok(Self::Progress),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            other => Err(format!(
                "unknown log level `{other}` (expected one of: none, silent, error, warning, basic, progress, info, debug)"
            )),
        }
    }
}

/// A command line to execute: program first, then its arguments.
///
/// Arguments are kept as `OsString` so paths reach the child byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    argv: Vec<OsString>,
}

impl RunRequest {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            argv: vec![program.into()],
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.argv.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.argv.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.argv[0]
    }

    /// Arguments after the program name.
    pub fn arguments(&self) -> &[OsString] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[OsString] {
        &self.argv
    }
}

/// Renders as a bracketed list of quoted arguments, e.g. `['qpdf', '--linearize']`.
impl fmt::Display for RunRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, arg) in self.argv.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}'", arg.to_string_lossy())?;
        }
        f.write_str("]")
    }
}

/// Everything a finished child process left behind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunOutcome {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, or the negated signal number when the child was killed.
    pub status: i32,
}

impl RunOutcome {
    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// Whether the child wrote anything to stdout or stderr.
    pub fn has_output(&self) -> bool {
        !self.stdout.is_empty() || !self.stderr.is_empty()
    }
}

/// Why the gate rejected a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The child exited with a non-zero status.
    NonZeroExit,
    /// The child exited cleanly but printed something while output is forbidden.
    UnexpectedOutput,
    /// Debug mode is configured to treat every run as failed.
    DebugForced,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NonZeroExit => "non-zero exit status",
            Self::UnexpectedOutput => "unexpected output",
            Self::DebugForced => "debug mode forces failure",
        })
    }
}

/// A run the gate rejected, with everything needed to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFailure {
    pub request: RunRequest,
    pub outcome: RunOutcome,
    pub reason: FailureReason,
}
