// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared fixtures for the command line tests: stand-in tools and a scratch
// build directory.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub struct Workspace {
    pub tools: TempDir,
    pub out: TempDir,
    pub input: PathBuf,
}

impl Workspace {
    /// Fresh directories, an input document, and well-behaved stubs for every
    /// external tool. `engine_tail` runs after the engine wrote its outputs.
    pub fn new(engine_tail: &str) -> Self {
        let tools = tempfile::tempdir().expect("tools dir");
        let out = tempfile::tempdir().expect("out dir");
        let input = tools.path().join("book.ly");
        fs::write(&input, "\\relative { c' d e f }\n").expect("write input");

        let ws = Self { tools, out, input };
        ws.stub(
            "engine",
            &format!(
                r#"for arg in "$@"; do
  case "$arg" in
    --output=*) out="${{arg#--output=}}" ;;
  esac
done
echo "engine pdf" > "$out.pdf"
echo "engine ps" > "$out.ps"
{engine_tail}"#
            ),
        );
        ws.stub("qpdf", r#"{ cat "$2"; echo linearized; } > "$3""#);
        ws.stub("pdf2ps", r#"cp "$2" "$3""#);
        ws.stub("ps2pdf", r#"{ cat "$1"; echo reduced; } > "$2""#);
        ws
    }

    /// (Re)write an executable `/bin/sh` script among the tools.
    pub fn stub(&self, name: &str, body: &str) -> PathBuf {
        let path = self.tools.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write stub");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod stub");
        path
    }

    pub fn pdf(&self) -> PathBuf {
        self.out.path().join("book.pdf")
    }

    pub fn ps(&self) -> PathBuf {
        self.out.path().join("book.ps")
    }

    /// Run the binary with the required arguments, the stub toolchain, and
    /// `extra` appended.
    pub fn run(&self, extra: &[&str]) -> Output {
        let tool = |name: &str| self.tools.path().join(name);
        Command::new(env!("CARGO_BIN_EXE_setzer"))
            .arg("--ly")
            .arg(&self.input)
            .arg("--ps")
            .arg(self.ps())
            .arg("--pdf")
            .arg(self.pdf())
            .arg("--output")
            .arg(self.out.path().join("book"))
            .arg("--engine")
            .arg(tool("engine"))
            .arg("--qpdf")
            .arg(tool("qpdf"))
            .arg("--pdf2ps")
            .arg(tool("pdf2ps"))
            .arg("--ps2pdf")
            .arg(tool("ps2pdf"))
            .args(extra)
            .env_remove("RUST_LOG")
            .output()
            .expect("run setzer")
    }

    /// Sorted names in the output directory.
    pub fn outputs(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.out.path())
            .expect("read out dir")
            .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

pub fn mode(path: &Path) -> u32 {
    fs::metadata(path).expect("metadata").permissions().mode() & 0o777
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
