// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// setzer-pipeline — Runs the typesetting engine and the PDF post-processors
// behind an output gate, and owns the lifecycle of the produced artifacts.
//
// Every child process goes through `GatedRunner`; every stage failure lands in
// `BuildPipeline::run`, which removes the managed artifacts before handing the
// error back to the caller.

pub mod artifacts;
pub mod engine;
pub mod gate;
pub mod pipeline;
pub mod postprocess;

#[cfg(all(test, unix))]
mod test_support;

pub use artifacts::ManagedArtifacts;
pub use gate::GatedRunner;
pub use pipeline::BuildPipeline;
