use std::process::{Command, Output, Stdio};
use std::time::Duration;

use wait_timeout::ChildExt;

#[cfg(feature = "asan")]
use crashme::FaultKind;

fn crashme(args: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_crashme"))
        .args(args)
        .env_remove("CRASHME_LOG")
        .env_remove("CRASHME_LOG_FILE")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("could not run crashme");
    match child
        .wait_timeout(Duration::from_secs(60))
        .expect("failed to wait for crashme")
    {
        Some(_) => child.wait_with_output().expect("failed to collect output"),
        None => {
            child.kill().expect("failed to kill crashme");
            child.wait().expect("failed to wait for crashme");
            panic!("crashme {:?} timed out", args);
        }
    }
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn no_argument() {
    let output = crashme(&[]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Invalid param number!"));
}

#[test]
fn too_many_arguments() {
    let output = crashme(&["double-free", "heap-use-after-free"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Invalid param number!"));
}

#[test]
fn unknown_fault() {
    let output = crashme(&["not-a-real-fault"]);
    assert_eq!(output.status.code(), Some(0));
    let stderr = stderr(&output);
    assert!(stderr.contains("Invalid param!"));
    assert!(!stderr.contains("Invalid param number!"));
}

#[test]
fn wrong_case_is_unknown() {
    let output = crashme(&["Stack-Overflow"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Invalid param!"));
}

#[test]
fn division_by_zero_traps() {
    let output = crashme(&["division-by-zero"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("attempt to divide by zero"));
}

#[test]
fn signed_integer_overflow_traps() {
    let output = crashme(&["signed-integer-overflow"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("attempt to add with overflow"));
}

#[test]
fn shifts_trap() {
    let output = crashme(&["shifts"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("attempt to shift left with overflow"));
}

#[test]
fn stack_overflow_exhausts_the_stack() {
    let output = crashme(&["stack-overflow"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("has overflowed its stack"));
}

#[test]
fn null_deref_read_crashes() {
    let output = crashme(&["null-deref-read"]);
    assert!(!output.status.success());
}

#[test]
fn null_deref_write_crashes() {
    let output = crashme(&["null-deref-write"]);
    assert!(!output.status.success());
}

#[test]
fn null_pointer_dereference_crashes() {
    let output = crashme(&["null-pointer-dereference"]);
    assert!(!output.status.success());
}

#[test]
#[cfg(all(target_os = "linux", target_env = "gnu"))]
fn double_free_is_caught_by_the_allocator() {
    let output = crashme(&["double-free"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("double free"));
}

#[test]
fn container_overflow_passes_bounds_checks() {
    let output = crashme(&["container-overflow"]);
    assert_eq!(output.status.code(), Some(0));
    let stderr = stderr(&output);
    assert!(!stderr.contains("index out of bounds"));
    assert!(!stderr.contains("CRASHME"));
}

#[test]
fn memory_faults_are_dispatched() {
    for name in [
        "global-buffer-overflow",
        "heap-buffer-overflow",
        "stack-buffer-overflow",
        "heap-use-after-free",
        "stack-use-after-scope",
    ]
    .iter()
    {
        let output = crashme(&[*name]);
        assert!(!stderr(&output).contains("Invalid param"), "{} was not dispatched", name);
    }
}

#[test]
fn default_level_keeps_stderr_to_the_fault() {
    let output = crashme(&["division-by-zero"]);
    let stderr = stderr(&output);
    assert!(stderr.contains("attempt to divide by zero"));
    assert!(!stderr.contains("CRASHME"));
}

/// Needs `RUSTFLAGS=-Zsanitizer=address cargo +nightly test --features asan`.
#[test]
#[cfg(feature = "asan")]
fn asan_reports_each_memory_fault() {
    for kind in FaultKind::ALL.iter() {
        let bug_type = match kind.asan_bug_type() {
            Some(bug_type) => bug_type,
            None => continue,
        };
        let output = crashme(&[kind.name()]);
        let stderr = stderr(&output);
        assert!(!output.status.success(), "{} was not caught", kind);
        assert!(
            stderr.contains(&format!("ERROR: AddressSanitizer: {}", bug_type)),
            "{} reported as:\n{}",
            kind,
            stderr
        );
    }
}

#[test]
fn debug_log_shows_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_crashme"))
        .arg("Invalid")
        .env("CRASHME_LOG", "debug")
        .output()
        .expect("could not run crashme");
    assert_eq!(output.status.code(), Some(0));
    let stderr = stderr(&output);
    assert!(stderr.contains("Received args"));
    assert!(stderr.contains("Invalid param!"));
}
