//! Shared integration-test harness for running the `fhevm-examples` binary
//! inside a scratch directory.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Environment variables that would leak host configuration into a test.
const ISOLATED_ENV: &[&str] = &[
    "FHEVM_EXAMPLES_DIR",
    "FHEVM_EXAMPLES_CATALOG",
    "FHEVM_EXAMPLES_TEMPLATE_DIR",
    "FHEVM_EXAMPLES_COLOR",
    "FHEVM_EXAMPLES_LOG_LEVEL",
];

/// Runs the binary with `args` and `cwd` as working directory.
pub fn run_in(cwd: &Path, args: &[&str]) -> Output {
    run_with_env(cwd, args, &[])
}

/// Like [`run_in`], with extra environment variables set.
#[allow(clippy::missing_panics_doc)]
pub fn run_with_env(cwd: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fhevm-examples"));
    cmd.args(args).current_dir(cwd);
    for var in ISOLATED_ENV {
        cmd.env_remove(var);
    }
    cmd.envs(env.iter().copied());
    cmd.output().expect("failed to spawn fhevm-examples")
}

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Lossy stdout.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Lossy stderr.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Names of the immediate subdirectories of `path`, sorted.
#[allow(clippy::missing_panics_doc)]
pub fn subdirs(path: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(path)
        .expect("read_dir")
        .filter_map(Result::ok)
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Writes `contents` to `dir/relative`, creating parents.
#[allow(clippy::missing_panics_doc)]
pub fn write(dir: &Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent");
    }
    std::fs::write(path, contents).expect("write fixture");
}
