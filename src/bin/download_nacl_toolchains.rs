// CLASSIFICATION: COMMUNITY
// Filename: download_nacl_toolchains.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-19

use anyhow::{Context, Result};
use clap::Parser;
use nacl_shim::{run, ScriptDelegate, ShimConfig};

/// Every argument belongs to download_toolchains.py, so the shim defines no
/// options of its own. Settings come from NACL_SHIM_SRC_DIR and PYTHON.
#[derive(Parser)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    forward: Vec<String>,
}

fn main() {
    env_logger::init();
    match shim() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}

fn shim() -> Result<i32> {
    let args = Args::parse();
    let config = ShimConfig::from_env().context("resolve shim configuration")?;
    let python = config.python.clone();
    let outcome = run(&config, args.forward, |script| {
        ScriptDelegate::resolve(script, python.as_deref())
    })
    .context("NativeClient toolchain download")?;
    Ok(outcome.exit_code())
}
