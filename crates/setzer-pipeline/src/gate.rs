// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output-gated child process execution.
//
// A child's stdout and stderr are captured in memory and never reach the
// terminal. Only after the child has exited does the gate decide whether the
// run counts as a failure; a rejected run comes back as
// `SetzerError::GatedFailure` carrying everything the child printed.

use std::process::{Command, ExitStatus, Stdio};

use setzer_core::config::GatePolicy;
use setzer_core::error::{Result, SetzerError};
use setzer_core::types::{FailureReason, RunFailure, RunOutcome, RunRequest};
use tracing::{debug, instrument, warn};

/// Decide whether a finished run is acceptable under `policy`.
///
/// Returns `None` when the run passes, or the first reason it fails:
/// a non-zero exit beats unexpected output, which beats a debug-forced failure.
pub fn verdict(policy: &GatePolicy, outcome: &RunOutcome) -> Option<FailureReason> {
    if !outcome.success() {
        Some(FailureReason::NonZeroExit)
    } else if policy.stop_on_output && outcome.has_output() {
        Some(FailureReason::UnexpectedOutput)
    } else if policy.debug && policy.debug_forces_failure {
        Some(FailureReason::DebugForced)
    } else {
        None
    }
}

/// Runs child processes to completion and applies the gate to each one.
#[derive(Debug, Clone, Copy, Default)]
pub struct GatedRunner {
    policy: GatePolicy,
}

impl GatedRunner {
    pub fn new(policy: GatePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    /// Run `request` with captured output and block until it exits.
    ///
    /// The child inherits the environment, gets a null stdin, and has both
    /// output streams drained fully before the verdict is taken.
    #[instrument(skip_all, fields(program = %request.program().to_string_lossy()))]
    pub fn run(&self, request: &RunRequest) -> Result<RunOutcome> {
        debug!("running {request}");

        let output = Command::new(request.program())
            .args(request.arguments())
            .stdin(Stdio::null())
            .output()
            .map_err(|source| SetzerError::Launch {
                program: request.program().to_string_lossy().into_owned(),
                source,
            })?;

        let outcome = RunOutcome {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: status_code(output.status),
        };

        match verdict(&self.policy, &outcome) {
            Some(reason) => {
                warn!(status = outcome.status, %reason, "child run rejected");
                Err(RunFailure {
                    request: request.clone(),
                    outcome,
                    reason,
                }
                .into())
            }
            None => {
                debug!(status = outcome.status, "child run accepted");
                Ok(outcome)
            }
        }
    }
}

/// Exit code of the child, or the negated signal number if it was killed.
fn status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}
