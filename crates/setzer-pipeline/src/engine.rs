// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Typesetting engine invocation.

use setzer_core::config::BuildConfig;
use setzer_core::error::{Result, SetzerError};
use setzer_core::types::RunRequest;
use tracing::{info, instrument};

use crate::artifacts::{ManagedArtifacts, make_read_only};
use crate::gate::GatedRunner;

/// Build the engine command line:
/// `<engine> --loglevel=<LEVEL> [--ps] [--pdf] --output=<base> <input>`.
pub fn engine_request(config: &BuildConfig) -> RunRequest {
    let mut request = RunRequest::new(&config.toolchain.engine)
        .arg(format!("--loglevel={}", config.log_level.engine_keyword()));
    if config.formats.ps {
        request = request.arg("--ps");
    }
    if config.formats.pdf {
        request = request.arg("--pdf");
    }
    request
        .arg(format!("--output={}", config.output_base))
        .arg(&config.input)
}

/// Run the engine and lock down every artifact it was asked to produce.
///
/// A requested artifact that is missing after a successful run is reported as
/// `SetzerError::MissingArtifact`.
#[instrument(skip_all, fields(input = %config.input.display()))]
pub fn typeset(
    runner: &GatedRunner,
    config: &BuildConfig,
    artifacts: &ManagedArtifacts,
) -> Result<()> {
    runner.run(&engine_request(config))?;

    let requested = [
        (config.formats.ps, artifacts.ps()),
        (config.formats.pdf, artifacts.pdf()),
    ];
    for (wanted, path) in requested {
        if wanted {
            make_read_only(path).map_err(|source| SetzerError::MissingArtifact {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    info!("engine finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use setzer_core::config::ArtifactPaths;
    use setzer_core::types::EngineLogLevel;
    use std::ffi::OsString;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    fn config() -> BuildConfig {
        BuildConfig::new(
            "score/book.ly",
            "out/book",
            ArtifactPaths {
                pdf: "out/book.pdf".into(),
                ps: "out/book.ps".into(),
            },
        )
    }

    #[test]
    fn default_request_asks_for_both_formats() {
        let request = engine_request(&config());
        assert_eq!(
            request.argv(),
            os(&[
                "lilypond",
                "--loglevel=ERROR",
                "--ps",
                "--pdf",
                "--output=out/book",
                "score/book.ly",
            ])
        );
    }

    #[test]
    fn request_honours_formats_and_level() {
        let mut config = config();
        config.formats.ps = false;
        config.log_level = EngineLogLevel::None;
        config.toolchain.engine = "/opt/lilypond/bin/lilypond".into();

        let request = engine_request(&config);
        assert_eq!(request.program(), "/opt/lilypond/bin/lilypond");
        assert!(request.argv().contains(&OsString::from("--loglevel=NONE")));
        assert!(!request.argv().contains(&OsString::from("--ps")));
        assert!(request.argv().contains(&OsString::from("--pdf")));
    }

    #[cfg(unix)]
    #[test]
    fn input_path_is_passed_byte_for_byte() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let mut config = config();
        config.input = OsStr::from_bytes(b"/tmp/score-\xff.ly").into();

        let request = engine_request(&config);
        let last = request.argv().last().expect("input argument");
        assert_eq!(last.as_bytes(), b"/tmp/score-\xff.ly");
    }
}
