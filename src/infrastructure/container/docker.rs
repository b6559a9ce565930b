//! Docker CLI runtime
//!
//! Implements the ContainerRuntime port with `docker` (or any CLI that
//! accepts the same arguments, such as `podman`).

use super::command::{first_line, run};
use crate::domain::ports::{ContainerError, ContainerRuntime};

/// Container runtime driven through its command-line client
#[derive(Debug, Clone)]
pub struct DockerCli {
    program: String,
}

impl DockerCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new(super::DEFAULT_RUNTIME)
    }
}

/// Arguments resolving a reference to a container id; images never match
fn inspect_id_args(reference: &str) -> [&str; 4] {
    ["inspect", "--type=container", "--format={{.Id}}", reference]
}

fn state_args(id: &str) -> [&str; 4] {
    ["inspect", "--type=container", "--format={{.State.Status}}", id]
}

impl ContainerRuntime for DockerCli {
    fn name(&self) -> &str {
        &self.program
    }

    fn inspect_id(&self, reference: &str) -> Result<Option<String>, ContainerError> {
        let output = run(&self.program, &inspect_id_args(reference))?;
        if !output.success {
            tracing::debug!(reference, stderr = %output.stderr.trim(), "inspect did not resolve reference");
            return Ok(None);
        }
        Ok(first_line(&output.stdout))
    }

    fn find_by_name(&self, name: &str) -> Result<Option<String>, ContainerError> {
        let filter = format!("name={}", name);
        let output = run(&self.program, &["ps", "-aq", "--filter", &filter])?;
        if !output.success {
            return Ok(None);
        }
        Ok(first_line(&output.stdout))
    }

    fn is_running(&self, id: &str) -> Result<bool, ContainerError> {
        let output = run(&self.program, &state_args(id))?;
        Ok(output.success && output.stdout.trim() == "running")
    }

    fn path_exists(&self, id: &str, path: &str) -> Result<bool, ContainerError> {
        let output = run(&self.program, &["exec", id, "test", "-e", path])?;
        Ok(output.success)
    }
}
