// CLASSIFICATION: COMMUNITY
// Filename: trigger.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use nacl_shim::delegate::delegate_path;
use nacl_shim::{chromeos_args, run, Delegate, GypDefines, Outcome, ShimConfig, ShimError};
use serial_test::serial;
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

#[derive(Default)]
struct SpyDelegate {
    calls: RefCell<Vec<Vec<String>>>,
    exit: i32,
}

impl Delegate for &SpyDelegate {
    fn invoke(&self, args: &[String]) -> Result<i32, ShimError> {
        self.calls.borrow_mut().push(args.to_vec());
        Ok(self.exit)
    }
}

fn checkout_with_delegate() -> TempDir {
    let dir = tempdir().unwrap();
    let script = delegate_path(dir.path());
    fs::create_dir_all(script.parent().unwrap()).unwrap();
    fs::write(&script, "exit 0\n").unwrap();
    dir
}

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[test]
fn disabled_never_delegates() {
    let dir = checkout_with_delegate();
    let spy = SpyDelegate::default();
    let resolved = Cell::new(false);
    for defines in ["disable_nacl=1", "chromeos=1 disable_nacl=1", "a=b disable_nacl=1 c=d"] {
        let config = ShimConfig::new(GypDefines::new(defines), dir.path());
        let outcome = run(&config, strings(&["--keep"]), |_| {
            resolved.set(true);
            Ok(&spy)
        })
        .unwrap();
        assert_eq!(outcome, Outcome::Disabled);
        assert_eq!(outcome.exit_code(), 0);
    }
    assert!(!resolved.get());
    assert!(spy.calls.borrow().is_empty());
}

#[test]
fn chromeos_forwards_fixed_arguments() {
    let dir = checkout_with_delegate();
    let spy = SpyDelegate::default();
    let config = ShimConfig::new(GypDefines::new("chromeos=1 target_arch=x64"), dir.path());
    let outcome = run(&config, strings(&["--optional-pnacl", "extra"]), |_| Ok(&spy)).unwrap();
    assert_eq!(outcome, Outcome::Delegated(0));
    assert_eq!(*spy.calls.borrow(), vec![chromeos_args()]);
}

#[test]
fn plain_run_forwards_arguments_in_order() {
    let dir = checkout_with_delegate();
    let spy = SpyDelegate::default();
    let config = ShimConfig::new(GypDefines::default(), dir.path());
    let args = strings(&["--x86-version", "6000", "--keep"]);
    run(&config, args.clone(), |script| {
        assert_eq!(script, delegate_path(dir.path()));
        Ok(&spy)
    })
    .unwrap();
    assert_eq!(*spy.calls.borrow(), vec![args]);
}

#[test]
fn delegate_exit_code_passes_through() {
    let dir = checkout_with_delegate();
    let spy = SpyDelegate {
        exit: 2,
        ..SpyDelegate::default()
    };
    let config = ShimConfig::new(GypDefines::default(), dir.path());
    let outcome = run(&config, Vec::new(), |_| Ok(&spy)).unwrap();
    assert_eq!(outcome.exit_code(), 2);
}

#[test]
fn missing_delegate_is_a_clean_skip() {
    let dir = tempdir().unwrap();
    let spy = SpyDelegate::default();
    let config = ShimConfig::new(GypDefines::new("chromeos=1"), dir.path());
    let outcome = run(&config, Vec::new(), |_| Ok(&spy)).unwrap();
    assert_eq!(outcome, Outcome::DelegateMissing(delegate_path(dir.path())));
    assert_eq!(outcome.exit_code(), 0);
    assert!(spy.calls.borrow().is_empty());
}

#[test]
fn resolver_errors_propagate() {
    let dir = checkout_with_delegate();
    let config = ShimConfig::new(GypDefines::default(), dir.path());
    let result = run(&config, Vec::new(), |_| {
        Err::<&SpyDelegate, _>(ShimError::InterpreterNotFound { tried: Vec::new() })
    });
    assert!(matches!(result, Err(ShimError::InterpreterNotFound { .. })));
}

#[cfg(unix)]
#[test]
fn script_delegate_reports_child_exit_code() {
    use nacl_shim::ScriptDelegate;

    let dir = tempdir().unwrap();
    let script = delegate_path(dir.path());
    fs::create_dir_all(script.parent().unwrap()).unwrap();
    fs::write(&script, "[ \"$1\" = \"--keep\" ] || exit 9\nexit 3\n").unwrap();
    let config = ShimConfig::new(GypDefines::default(), dir.path());
    let outcome = run(&config, strings(&["--keep"]), |script| {
        ScriptDelegate::resolve(script, Some(Path::new("/bin/sh")))
    })
    .unwrap();
    assert_eq!(outcome, Outcome::Delegated(3));
}

#[test]
#[serial]
fn config_reads_environment() {
    let dir = tempdir().unwrap();
    std::env::set_var("GYP_DEFINES", "disable_nacl=1");
    std::env::set_var("NACL_SHIM_SRC_DIR", dir.path());
    std::env::set_var("PYTHON", "/usr/bin/python2");
    let config = ShimConfig::from_env().unwrap();
    std::env::remove_var("GYP_DEFINES");
    std::env::remove_var("NACL_SHIM_SRC_DIR");
    std::env::remove_var("PYTHON");
    assert!(config.defines.nacl_disabled());
    assert_eq!(config.src_dir, dir.path());
    assert_eq!(config.python.as_deref(), Some(Path::new("/usr/bin/python2")));
}

#[test]
#[serial]
fn unset_defines_read_as_empty() {
    std::env::remove_var("GYP_DEFINES");
    let defines = GypDefines::from_env();
    assert_eq!(defines.as_str(), "");
    assert!(!defines.nacl_disabled());
}
