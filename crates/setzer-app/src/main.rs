// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Setzer — quiet, fail-fast driver for one typesetting build step.
//
// Entry point. Parses the command line, initialises logging, runs the build
// pipeline and maps the outcome to an exit status: 0 on success, 1 on any
// failure, with the failure report on stderr.

mod cli;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use setzer_core::config::BuildConfig;
use setzer_core::error::Result;
use setzer_core::report::render_failure;
use setzer_pipeline::BuildPipeline;

fn main() -> ExitCode {
    let args = cli::Args::parse();
    init_tracing(args.debug);

    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    tracing::debug!(?argv, "arguments");
    let prog = program_name(argv.first().map(String::as_str));

    let config = args.into_config();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", render_failure(&prog, &err));
            ExitCode::FAILURE
        }
    }
}

fn run(config: &BuildConfig) -> Result<()> {
    if config.gate.debug {
        let resolved = serde_json::to_string(config)?;
        tracing::debug!(config = %resolved, "resolved configuration");
    }
    BuildPipeline::new(config).run()
}

/// Logs go to stderr so stdout stays free for whatever calls us. `RUST_LOG`
/// wins over the default level.
fn init_tracing(debug: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter(debug))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Filter used when `RUST_LOG` is unset. Rejected runs are already described
/// by the failure report, so the gate's warnings stay hidden by default.
fn default_filter(debug: bool) -> &'static str {
    if debug { "debug" } else { "error" }
}

/// Prefix for diagnostic lines: the name this binary was invoked as.
fn program_name(arg0: Option<&str>) -> String {
    arg0.and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "setzer".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_quiet_unless_debugging() {
        assert_eq!(default_filter(false), "error");
        assert_eq!(default_filter(true), "debug");
    }

    #[test]
    fn program_name_is_the_invoked_basename() {
        assert_eq!(program_name(Some("/usr/local/bin/setzer")), "setzer");
        assert_eq!(program_name(Some("typeset")), "typeset");
        assert_eq!(program_name(None), "setzer");
    }
}
