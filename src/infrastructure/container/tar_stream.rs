//! Tar stream extraction strategy
//!
//! Runs `<runtime> exec <id> tar czf - -C <path> .` and unpacks the gzip'd
//! archive from the child's stdout. The unpack runs on a worker thread so the
//! caller can enforce a deadline and kill a stuck child.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use flate2::read::GzDecoder;

use super::command::runtime_unavailable;
use crate::domain::ports::{ContainerError, ExtractionStrategy};

/// Streams a gzip'd tar of the directory out of the container
#[derive(Debug, Clone)]
pub struct TarStream {
    program: String,
    timeout: Duration,
}

impl TarStream {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    fn failure(&self, message: impl Into<String>) -> ContainerError {
        ContainerError::Strategy {
            strategy: self.name(),
            message: message.into(),
        }
    }
}

/// Unpack a gzip'd tar stream into `dest`
pub(crate) fn unpack_stream(reader: impl Read, dest: &Path) -> std::io::Result<()> {
    let mut archive = tar::Archive::new(GzDecoder::new(reader));
    archive.set_preserve_permissions(false);
    archive.unpack(dest)
}

fn stop(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

impl ExtractionStrategy for TarStream {
    fn name(&self) -> &'static str {
        "tar-stream"
    }

    fn extract(&self, container_id: &str, source: &str, dest: &Path) -> Result<(), ContainerError> {
        fs::create_dir_all(dest)?;

        let mut child = Command::new(&self.program)
            .args(["exec", container_id, "tar", "czf", "-", "-C", source, "."])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| runtime_unavailable(&self.program, &e))?;

        let Some(stdout) = child.stdout.take() else {
            stop(&mut child);
            return Err(self.failure("child stdout was not captured"));
        };
        let stderr_reader = child.stderr.take().map(|mut stderr| {
            thread::spawn(move || {
                let mut buf = String::new();
                let _ = stderr.read_to_string(&mut buf);
                buf
            })
        });

        let (tx, rx) = mpsc::channel();
        let unpack_dest = dest.to_path_buf();
        thread::spawn(move || {
            let _ = tx.send(unpack_stream(stdout, &unpack_dest));
        });

        let unpacked = rx.recv_timeout(self.timeout);
        let collect_stderr = || {
            stderr_reader
                .and_then(|handle| handle.join().ok())
                .unwrap_or_default()
        };

        match unpacked {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                stop(&mut child);
                let stderr = collect_stderr();
                tracing::debug!(stderr = %stderr.trim(), "tar stream stderr");
                return Err(self.failure(format!("unpack error: {}", e)));
            }
            Err(RecvTimeoutError::Timeout) => {
                stop(&mut child);
                return Err(ContainerError::Timeout {
                    strategy: self.name(),
                    secs: self.timeout.as_secs(),
                });
            }
            Err(RecvTimeoutError::Disconnected) => {
                stop(&mut child);
                return Err(self.failure("unpack worker exited unexpectedly"));
            }
        }

        let status = child.wait()?;
        let stderr = collect_stderr();
        if !status.success() {
            return Err(self.failure(stderr.trim().to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempfile::tempdir;

    fn archive_of(files: &[(&str, &[u8])]) -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (path, data) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append_data(&mut header, path, *data).unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap()
    }

    #[test]
    fn unpack_places_entries_relative_to_dest() {
        let dir = tempdir().unwrap();
        let bytes = archive_of(&[
            ("./sqli.json", b"{}"),
            ("./nested/xss.json", b"{\"id\":1}"),
        ]);

        unpack_stream(&bytes[..], dir.path()).unwrap();

        assert_eq!(std::fs::read(dir.path().join("sqli.json")).unwrap(), b"{}");
        assert!(dir.path().join("nested/xss.json").is_file());
    }

    #[test]
    fn garbage_stream_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(unpack_stream(&b"definitely not gzip"[..], dir.path()).is_err());
    }

    /// Write an executable shell script standing in for the runtime CLI
    #[cfg(unix)]
    fn fake_runtime(dir: &Path, body: &str) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("fake-runtime");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn stuck_child_times_out() {
        let bin = tempdir().unwrap();
        let dest = tempdir().unwrap();
        let runtime = fake_runtime(bin.path(), "exec sleep 10");
        let strategy = TarStream::new(runtime.to_string_lossy(), Duration::from_secs(1));

        let started = std::time::Instant::now();
        let err = strategy
            .extract("86e4e41a871c", "/etc/nginx/waf/rule", dest.path())
            .unwrap_err();

        assert!(matches!(
            err,
            ContainerError::Timeout {
                strategy: "tar-stream",
                secs: 1
            }
        ));
        assert!(started.elapsed() < Duration::from_secs(8));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_fails_after_unpack() {
        let bin = tempdir().unwrap();
        let dest = tempdir().unwrap();
        let archive = bin.path().join("empty.tar.gz");
        std::fs::write(&archive, archive_of(&[])).unwrap();
        let runtime = fake_runtime(
            bin.path(),
            &format!(
                "cat '{}'\necho 'tar: /etc/nginx/waf/rule: Cannot open' >&2\nexit 2",
                archive.display()
            ),
        );
        let strategy = TarStream::new(runtime.to_string_lossy(), Duration::from_secs(10));

        let err = strategy
            .extract("86e4e41a871c", "/etc/nginx/waf/rule", dest.path())
            .unwrap_err();

        match err {
            ContainerError::Strategy { strategy, message } => {
                assert_eq!(strategy, "tar-stream");
                assert!(message.contains("Cannot open"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn streamed_archive_is_unpacked() {
        let bin = tempdir().unwrap();
        let dest = tempdir().unwrap();
        let archive = bin.path().join("rules.tar.gz");
        std::fs::write(&archive, archive_of(&[("./sqli.json", b"{}")])).unwrap();
        let runtime = fake_runtime(bin.path(), &format!("cat '{}'", archive.display()));
        let strategy = TarStream::new(runtime.to_string_lossy(), Duration::from_secs(10));

        strategy
            .extract("86e4e41a871c", "/etc/nginx/waf/rule", dest.path())
            .unwrap();

        assert_eq!(std::fs::read(dest.path().join("sqli.json")).unwrap(), b"{}");
    }

    #[test]
    fn missing_runtime_is_reported() {
        let dir = tempdir().unwrap();
        let strategy = TarStream::new("rulesnap-no-such-runtime", Duration::from_secs(1));
        let err = strategy
            .extract("86e4e41a871c", "/etc/nginx/waf/rule", dir.path())
            .unwrap_err();
        assert!(matches!(err, ContainerError::RuntimeUnavailable { .. }));
    }
}
