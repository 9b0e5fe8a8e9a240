// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::path::{Path, PathBuf};

use crate::error::ShimError;

/// Environment variable carrying gyp build defines.
pub const GYP_DEFINES_VAR: &str = "GYP_DEFINES";
/// Environment override for the checkout `src` directory.
pub const SRC_DIR_VAR: &str = "NACL_SHIM_SRC_DIR";
/// Environment override for the interpreter that runs the delegate.
pub const PYTHON_VAR: &str = "PYTHON";

const DISABLE_NACL: &str = "disable_nacl=1";
const CHROMEOS: &str = "chromeos=1";

/// Raw `GYP_DEFINES` value. Flags are matched by substring, not parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GypDefines(String);

impl GypDefines {
    pub fn new<S: Into<String>>(raw: S) -> Self {
        GypDefines(raw.into())
    }

    /// Read `GYP_DEFINES`; unset or non-unicode reads as empty.
    pub fn from_env() -> Self {
        GypDefines(std::env::var(GYP_DEFINES_VAR).unwrap_or_default())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn nacl_disabled(&self) -> bool {
        self.contains(DISABLE_NACL)
    }

    pub fn chromeos(&self) -> bool {
        self.contains(CHROMEOS)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Inputs for one shim invocation, resolved at the entry point.
#[derive(Debug, Clone)]
pub struct ShimConfig {
    pub defines: GypDefines,
    /// Checkout `src` directory that holds `native_client/`.
    pub src_dir: PathBuf,
    pub python: Option<PathBuf>,
}

impl ShimConfig {
    pub fn new<P: Into<PathBuf>>(defines: GypDefines, src_dir: P) -> Self {
        ShimConfig {
            defines,
            src_dir: src_dir.into(),
            python: None,
        }
    }

    /// Build from the process environment. Without `NACL_SHIM_SRC_DIR` the
    /// source directory is the parent of the directory holding the running
    /// executable.
    pub fn from_env() -> Result<Self, ShimError> {
        let src_dir = match std::env::var_os(SRC_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => {
                let exe = std::env::current_exe().map_err(ShimError::Location)?;
                default_src_dir(&exe)
            }
        };
        Ok(ShimConfig {
            defines: GypDefines::from_env(),
            src_dir,
            python: std::env::var_os(PYTHON_VAR).map(PathBuf::from),
        })
    }
}

/// `<exe dir>/..`, falling back to the executable's own directory at the
/// filesystem root.
pub fn default_src_dir(exe: &Path) -> PathBuf {
    let exe = exe.canonicalize().unwrap_or_else(|_| exe.to_path_buf());
    let script_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    script_dir
        .parent()
        .unwrap_or(script_dir)
        .to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_match_as_substrings() {
        let defines = GypDefines::new("target_arch=ia32 disable_nacl=1 chromeos=1");
        assert!(defines.nacl_disabled());
        assert!(defines.chromeos());
        assert!(!GypDefines::new("disable_nacl=0").nacl_disabled());
        assert!(!GypDefines::default().chromeos());
    }

    #[test]
    fn src_dir_is_two_levels_up() {
        let src = default_src_dir(Path::new("/nonexistent/src/build/download-nacl-toolchains"));
        assert_eq!(src, PathBuf::from("/nonexistent/src"));
    }
}
