//! External command execution.
//!
//! Commands are always spawned with structured argument lists, never through a
//! shell, so arguments cannot be re-split or interpolated. Output is captured
//! in full; callers decide whether a non-zero exit is fatal. Commands are not
//! retried and have no timeout.

use std::process::Command;

use crate::error::{ActionsKitError, Result};

/// Captured output of a finished external command.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutput {
    /// Exit code, if the process exited normally
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    /// Combined stdout and stderr, stdout first.
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Whether the command exited with code 0.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Run a command and capture its output.
///
/// Returns `Err` only when the process cannot be spawned (e.g. the binary is
/// not installed). A command that runs and exits non-zero still produces
/// `Ok`, with the failure visible in `status` and `stderr`.
///
/// # Arguments
/// * `program` - Binary to execute
/// * `args` - Argument list, passed through verbatim
pub fn run(program: &str, args: &[&str]) -> Result<ProcessOutput> {
    let output = Command::new(program).args(args).output().map_err(|e| {
        ActionsKitError::command(format!("Failed to execute {}: {}", program, e))
    })?;

    Ok(ProcessOutput {
        status: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Run a command and fail unless it exits with code 0.
///
/// On success returns stdout; on a non-zero exit returns a [crate::error::ActionsKitError::Command]
/// carrying the combined output.
pub fn run_ok(program: &str, args: &[&str]) -> Result<String> {
    let output = run(program, args)?;
    if !output.success() {
        return Err(ActionsKitError::command(format!(
            "{} {} exited with code {}: {}",
            program,
            args.join(" "),
            output.status.map_or_else(|| "?".to_string(), |c| c.to_string()),
            output.combined().trim()
        )));
    }
    Ok(output.stdout)
}

/// Render a command line for display in dry-run mode.
pub fn render_command(program: &str, args: &[&str]) -> String {
    let mut parts = vec![program.to_string()];
    for arg in args {
        if arg.contains(' ') {
            parts.push(format!("'{}'", arg));
        } else {
            parts.push(arg.to_string());
        }
    }
    parts.join(" ")
}
