// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::path::PathBuf;
use thiserror::Error;

/// Failures local to the shim. A delegate that runs and exits non-zero is
/// not an error; its exit code is passed through.
#[derive(Debug, Error)]
pub enum ShimError {
    #[error("no python interpreter found (tried {tried:?})")]
    InterpreterNotFound { tried: Vec<String> },
    #[error("failed to launch {}", script.display())]
    Spawn {
        script: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot determine shim location")]
    Location(#[source] std::io::Error),
}
