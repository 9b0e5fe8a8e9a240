// CLASSIFICATION: COMMUNITY
// Filename: delegate.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Locating and running the NativeClient toolchain downloader.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::error::ShimError;

const INTERPRETERS: &[&str] = &["python3", "python"];

/// Something that can run the toolchain download with a resolved argument
/// list and report its exit code.
pub trait Delegate {
    fn invoke(&self, args: &[String]) -> Result<i32, ShimError>;
}

/// `<src_dir>/native_client/build/download_toolchains.py`
pub fn delegate_path(src_dir: &Path) -> PathBuf {
    src_dir
        .join("native_client")
        .join("build")
        .join("download_toolchains.py")
}

/// The delegate script if it exists under `src_dir`.
pub fn locate_delegate(src_dir: &Path) -> Option<PathBuf> {
    let path = delegate_path(src_dir);
    if path.exists() {
        Some(path)
    } else {
        log::debug!("delegate missing at {}", path.display());
        None
    }
}

/// Runs the download script as a child process under a Python interpreter.
#[derive(Debug, Clone)]
pub struct ScriptDelegate {
    interpreter: PathBuf,
    script: PathBuf,
}

impl ScriptDelegate {
    pub fn new<I: Into<PathBuf>, S: Into<PathBuf>>(interpreter: I, script: S) -> Self {
        ScriptDelegate {
            interpreter: interpreter.into(),
            script: script.into(),
        }
    }

    /// Use `interpreter` when given, otherwise the first of `python3` or
    /// `python` found on `PATH`.
    pub fn resolve(script: &Path, interpreter: Option<&Path>) -> Result<Self, ShimError> {
        let interpreter = match interpreter {
            Some(path) => path.to_path_buf(),
            None => INTERPRETERS
                .iter()
                .find_map(|name| which::which(name).ok())
                .ok_or_else(|| ShimError::InterpreterNotFound {
                    tried: INTERPRETERS.iter().map(|s| s.to_string()).collect(),
                })?,
        };
        Ok(ScriptDelegate::new(interpreter, script))
    }

    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }
}

impl Delegate for ScriptDelegate {
    fn invoke(&self, args: &[String]) -> Result<i32, ShimError> {
        log::info!(
            "running {} {} {:?}",
            self.interpreter.display(),
            self.script.display(),
            args
        );
        let mut cmd = Command::new(&self.interpreter);
        cmd.arg(&self.script);
        cmd.args(args);
        let status = cmd.status().map_err(|source| ShimError::Spawn {
            script: self.script.clone(),
            source,
        })?;
        Ok(exit_code(status))
    }
}

/// Exit code of a finished child. Signal deaths map to `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_fixed_under_src() {
        let path = delegate_path(Path::new("/checkout/src"));
        assert_eq!(
            path,
            PathBuf::from("/checkout/src/native_client/build/download_toolchains.py")
        );
    }

    #[test]
    fn explicit_interpreter_skips_lookup() {
        let delegate = ScriptDelegate::resolve(
            Path::new("/checkout/src/native_client/build/download_toolchains.py"),
            Some(Path::new("/opt/python/bin/python2")),
        )
        .unwrap();
        assert_eq!(delegate.interpreter(), Path::new("/opt/python/bin/python2"));
    }
}
