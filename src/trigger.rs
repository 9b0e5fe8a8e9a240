// CLASSIFICATION: COMMUNITY
// Filename: trigger.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Decides whether to fetch the NativeClient toolchain and with which
//! arguments, then hands off to the downloader.

use std::path::{Path, PathBuf};

use crate::config::{GypDefines, ShimConfig};
use crate::delegate::{delegate_path, locate_delegate, Delegate};
use crate::error::ShimError;

const CHROMEOS_NEWLIB_HASH: &str = "1deb316302fde89a2200dff6550cf510ae90b89b";
const CHROMEOS_BASE_URL: &str =
    "https://commondatastorage.googleapis.com/nativeclient-archive2/special_chromeos";
const CHROMEOS_X86_VERSION: &str = "7258";

/// What to do with the caller's arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Skip,
    /// chromeos builds use a pinned newlib toolchain.
    Substitute(Vec<String>),
    Proceed(Vec<String>),
}

/// How an invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Disabled,
    DelegateMissing(PathBuf),
    Delegated(i32),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Disabled | Outcome::DelegateMissing(_) => 0,
            Outcome::Delegated(code) => *code,
        }
    }
}

/// Fixed download arguments for chromeos builds.
pub fn chromeos_args() -> Vec<String> {
    [
        "--nacl-newlib-only",
        "--file-hash",
        "linux_x86_newlib",
        CHROMEOS_NEWLIB_HASH,
        "--base-url",
        CHROMEOS_BASE_URL,
        "--x86-version",
        CHROMEOS_X86_VERSION,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Python `repr` of a string list: `['a', 'b']`.
pub fn python_list(args: &[String]) -> String {
    let quoted: Vec<String> = args.iter().map(|arg| format!("'{arg}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// `disable_nacl=1` wins over `chromeos=1`.
pub fn decide(defines: &GypDefines, args: Vec<String>) -> Decision {
    if defines.nacl_disabled() {
        Decision::Skip
    } else if defines.chromeos() {
        Decision::Substitute(chromeos_args())
    } else {
        Decision::Proceed(args)
    }
}

/// Run one shim invocation. `resolve` builds the delegate for the located
/// script and is only called when the script exists and the download is not
/// disabled.
pub fn run<D, F>(config: &ShimConfig, args: Vec<String>, resolve: F) -> Result<Outcome, ShimError>
where
    D: Delegate,
    F: FnOnce(&Path) -> Result<D, ShimError>,
{
    let decision = decide(&config.defines, args);
    log::debug!("GYP_DEFINES={:?} -> {:?}", config.defines.as_str(), decision);
    let args = match decision {
        Decision::Skip => {
            log::info!("disable_nacl=1 set, skipping toolchain download");
            return Ok(Outcome::Disabled);
        }
        Decision::Substitute(args) => {
            println!("NOTE: Special handling for chromeos");
            println!("Running with these argument instead:");
            println!("{}", python_list(&args));
            args
        }
        Decision::Proceed(args) => args,
    };

    let Some(script) = locate_delegate(&config.src_dir) else {
        let expected = delegate_path(&config.src_dir);
        println!("Can't find '{}'", expected.display());
        println!("Presumably you are intentionally building without NativeClient.");
        println!("Skipping NativeClient toolchain download.");
        return Ok(Outcome::DelegateMissing(expected));
    };

    let delegate = resolve(script.as_path())?;
    let code = delegate.invoke(&args)?;
    if code != 0 {
        log::warn!("{} exited with {}", script.display(), code);
    }
    Ok(Outcome::Delegated(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn disable_beats_chromeos() {
        let defines = GypDefines::new("chromeos=1 disable_nacl=1");
        assert_eq!(decide(&defines, strings(&["--keep"])), Decision::Skip);
    }

    #[test]
    fn chromeos_replaces_arguments() {
        let defines = GypDefines::new("chromeos=1");
        let decision = decide(&defines, strings(&["--x86-version", "1"]));
        assert_eq!(decision, Decision::Substitute(chromeos_args()));
    }

    #[test]
    fn plain_defines_pass_arguments_through() {
        let defines = GypDefines::new("component=shared_library");
        let args = strings(&["--optional-pnacl", "--keep"]);
        assert_eq!(decide(&defines, args.clone()), Decision::Proceed(args));
    }

    #[test]
    fn notice_lists_arguments_python_style() {
        assert_eq!(python_list(&strings(&["--x86-version", "7258"])), "['--x86-version', '7258']");
        assert_eq!(python_list(&[]), "[]");
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Outcome::Disabled.exit_code(), 0);
        assert_eq!(Outcome::DelegateMissing(PathBuf::from("x")).exit_code(), 0);
        assert_eq!(Outcome::Delegated(3).exit_code(), 3);
    }
}
