//! Runtime command execution

use std::process::{Command, Output, Stdio};

use crate::domain::ports::ContainerError;

/// Captured result of one runtime invocation
#[derive(Debug)]
pub(super) struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Run `program args...` with captured output
///
/// A spawn failure means the runtime itself is unusable, which is distinct
/// from the command running and exiting non-zero.
pub(super) fn run(program: &str, args: &[&str]) -> Result<CommandOutput, ContainerError> {
    tracing::trace!(program, ?args, "running container command");
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map(CommandOutput::from)
        .map_err(|e| runtime_unavailable(program, &e))
}

pub(super) fn runtime_unavailable(program: &str, err: &std::io::Error) -> ContainerError {
    ContainerError::RuntimeUnavailable {
        runtime: program.to_string(),
        message: err.to_string(),
    }
}

/// First non-empty trimmed line of command output
pub(super) fn first_line(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
