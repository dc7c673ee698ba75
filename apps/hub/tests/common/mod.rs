#![allow(dead_code)]

// tests/common/mod.rs
use std::ffi::OsStr;
use std::io::Read;
use std::process::{Child, Command, Output, Stdio};
use std::thread::sleep;
use std::time::{Duration, Instant};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    hub_test_support::logging::init();
}

/// Longest any single hub run may take before the test gives up.
pub const RUN_DEADLINE: Duration = Duration::from_secs(20);

/// The hub binary with pipes for stdout/stderr and stdin closed. Log
/// filters are cleared so stderr holds only what a default run prints.
pub fn hub_command<I, S>(args: I) -> Command
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hub"));
    cmd.args(args)
        .env_remove("HUB_LOG")
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

/// Run the hub to completion and collect its output.
pub fn run_hub<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let child = hub_command(args).spawn().expect("hub should start");
    wait_with_deadline(child)
}

/// Wait for `child`, killing it and failing the test past `RUN_DEADLINE`.
pub fn wait_with_deadline(mut child: Child) -> Output {
    let started = Instant::now();
    loop {
        match child.try_wait().expect("try_wait on hub") {
            Some(status) => {
                let mut stdout = Vec::new();
                let mut stderr = Vec::new();
                if let Some(mut out) = child.stdout.take() {
                    out.read_to_end(&mut stdout).unwrap();
                }
                if let Some(mut err) = child.stderr.take() {
                    err.read_to_end(&mut stderr).unwrap();
                }
                return Output {
                    status,
                    stdout,
                    stderr,
                };
            }
            None if started.elapsed() > RUN_DEADLINE => {
                let _ = child.kill();
                let _ = child.wait();
                panic!("hub did not exit within {RUN_DEADLINE:?}");
            }
            None => sleep(Duration::from_millis(20)),
        }
    }
}

/// Poll `cond` until it holds or the deadline passes.
pub fn wait_until(what: &str, mut cond: impl FnMut() -> bool) {
    let started = Instant::now();
    while !cond() {
        assert!(started.elapsed() < RUN_DEADLINE, "timed out waiting for {what}");
        sleep(Duration::from_millis(20));
    }
}

pub fn stdout_text(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

pub fn stderr_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stderr)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Assert the exit code of a failed run and that stderr is exactly its
/// one diagnostic line.
pub fn assert_failure(out: &Output, code: i32, message: &str) {
    assert_eq!(
        out.status.code(),
        Some(code),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(stderr_lines(out), [message]);
}

/// Assert a clean run: exit 0 and nothing on stderr.
pub fn assert_success(out: &Output) {
    assert_eq!(
        out.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(out.stderr.is_empty(), "unexpected stderr: {:?}", stderr_lines(out));
}
