//! `docker cp` extraction strategy

use std::fs;
use std::path::Path;

use super::command::run;
use crate::domain::ports::{ContainerError, ExtractionStrategy};

/// Copies a directory with `<runtime> cp <id>:<path>/. <dest>`
///
/// The trailing `/.` copies the directory's contents rather than the
/// directory itself, so `path/a/b` lands at `dest/a/b`.
#[derive(Debug, Clone)]
pub struct DockerCopy {
    program: String,
}

impl DockerCopy {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

fn copy_source(container_id: &str, source: &str) -> String {
    format!("{}:{}/.", container_id, source.trim_end_matches('/'))
}

impl ExtractionStrategy for DockerCopy {
    fn name(&self) -> &'static str {
        "docker-cp"
    }

    fn extract(&self, container_id: &str, source: &str, dest: &Path) -> Result<(), ContainerError> {
        fs::create_dir_all(dest)?;

        let from = copy_source(container_id, source);
        let to = dest.to_string_lossy();
        let output = run(&self.program, &["cp", &from, &to])?;

        if !output.success {
            return Err(ContainerError::Strategy {
                strategy: self.name(),
                message: output.stderr.trim().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_source_appends_dot() {
        assert_eq!(
            copy_source("ca466ab891e4", "/uuwaf/waf/plugins/"),
            "ca466ab891e4:/uuwaf/waf/plugins/."
        );
        assert_eq!(
            copy_source("86e4e41a871c", "/etc/nginx/waf/rule"),
            "86e4e41a871c:/etc/nginx/waf/rule/."
        );
    }
}
