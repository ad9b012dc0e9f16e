// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Diagnostic text written to stderr when a build fails.
//
// A gated failure dumps everything the child printed, followed by its return
// code and the offending command line. Every other error gets a short
// one-line explanation. Outputs that could not be cleaned up afterwards get
// an extra line. Each line is prefixed with the program name so the
// report stays readable inside a larger build log.

use crate::error::SetzerError;
use crate::types::RunFailure;

/// Render the complete failure report for `err`.
pub fn render_failure(prog: &str, err: &SetzerError) -> String {
    match err {
        SetzerError::GatedFailure(failure) => render_gated(prog, failure),
        SetzerError::InputNotFound(_) => format!("{prog}: {err}\n"),
        SetzerError::CleanupFailed { error, cleanup } => {
            let mut out = render_failure(prog, error);
            out.push_str(&format!("{prog}: could not remove outputs: {cleanup}\n"));
            out
        }
        other => format!("{prog}: {other}\n{prog}: exiting because of errors\n"),
    }
}

fn render_gated(prog: &str, failure: &RunFailure) -> String {
    let mut out = String::new();
    let outcome = &failure.outcome;

    if !outcome.stdout.is_empty() {
        out.push_str(&format!("{prog}: stdout is\n"));
        push_block(&mut out, &outcome.stdout);
    }
    if !outcome.stderr.is_empty() {
        out.push_str(&format!("{prog}: stderr is\n"));
        push_block(&mut out, &outcome.stderr);
    }
    out.push_str(&format!("{prog}: return code is [{}]\n", outcome.status));
    out.push_str(&format!("{prog}: error in executing {}\n", failure.request));
    out
}

fn push_block(out: &mut String, text: &str) {
    out.push_str(text);
    if !text.ends_with('\n') {
        out.push('\n');
    }
}
