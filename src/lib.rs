// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.1
// Date Modified: 2026-10-19
// Author: Lukas Bower

//! Shim that runs the NativeClient toolchain download only when the
//! checkout has a `native_client` directory and `GYP_DEFINES` allows it.

/// Environment-derived settings and `GYP_DEFINES` flag checks.
pub mod config;

/// Downloader discovery and child-process invocation.
pub mod delegate;

pub mod error;

/// Skip/substitute/proceed decision and the top-level run.
pub mod trigger;

pub use config::{GypDefines, ShimConfig};
pub use delegate::{Delegate, ScriptDelegate};
pub use error::ShimError;
pub use trigger::{chromeos_args, decide, run, Decision, Outcome};
