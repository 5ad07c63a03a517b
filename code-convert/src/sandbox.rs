use std::path::PathBuf;
use std::process::Stdio;
use tokio::{
    fs,
    process::Command,
    time::{self, Duration},
};
use tracing::{debug, error};
use uuid::Uuid;

use crate::error::Error;

/// Captured output of one child process.
#[derive(Debug)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was killed by a signal or timed out
    pub exit_code: Option<i32>,
    pub timed_out: bool,
}

/// Scratch directory for one execution request.
///
/// Created fresh per request; the directory and everything written into it
/// (source files, compiled binaries) are removed on drop, so cleanup holds on
/// every exit path including timeouts and early returns.
pub struct Sandbox {
    pub root_dir: PathBuf,
}

impl Sandbox {
    pub async fn create() -> Result<Self, Error> {
        let id = Uuid::new_v4();
        let root_dir = std::env::temp_dir().join(format!("code-convert-{}", id));

        fs::create_dir_all(&root_dir)
            .await
            .map_err(|e| Error::Sandbox(format!("Failed to create sandbox directory: {}", e)))?;

        Ok(Self { root_dir })
    }

    /// Write source code into the sandbox and return its path.
    pub async fn write_source(&self, file_name: &str, code: &str) -> Result<PathBuf, Error> {
        let path = self.root_dir.join(file_name);
        fs::write(&path, code).await.map_err(Error::Io)?;
        Ok(path)
    }

    /// Run a command inside the sandbox with a bounded deadline.
    ///
    /// A non-zero exit code is reported in the output, not as an error; `Err`
    /// means the sandbox itself failed (missing command, spawn failure).
    pub async fn run(
        &self,
        cmd: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<RunOutput, Error> {
        debug!("Sandbox run - command: {} {:?}", cmd, args);

        // Commands produced by a compile step live inside the sandbox
        let cmd_path = if let Some(local) = cmd.strip_prefix("./") {
            self.root_dir.join(local)
        } else {
            which::which(cmd).map_err(|_| Error::Sandbox(format!("Command not found: {}", cmd)))?
        };

        let mut command = Command::new(&cmd_path);
        command
            .args(args)
            .current_dir(&self.root_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let child = command
            .spawn()
            .map_err(|e| Error::Sandbox(format!("Failed to spawn process: {}", e)))?;
        let child_id = child.id();

        match time::timeout(timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => Ok(RunOutput {
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                exit_code: output.status.code(),
                timed_out: false,
            }),
            Ok(Err(e)) => Err(Error::Sandbox(format!("Process error: {}", e))),
            Err(_) => {
                if let Some(id) = child_id {
                    // SIGTERM first, then force kill after a short grace period
                    let _ = Command::new("kill").arg(id.to_string()).status().await;
                    time::sleep(Duration::from_millis(10)).await;
                    let _ = Command::new("kill")
                        .arg("-9")
                        .arg(id.to_string())
                        .status()
                        .await;
                }

                Ok(RunOutput {
                    stdout: String::new(),
                    stderr: String::new(),
                    exit_code: None,
                    timed_out: true,
                })
            }
        }
    }
}

impl Drop for Sandbox {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_dir_all(&self.root_dir) {
            error!("Failed to clean up sandbox directory: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn run_captures_output() -> Result<(), Error> {
        let sandbox = Sandbox::create().await?;
        let output = sandbox
            .run("echo", &["hello".to_string()], Duration::from_secs(5))
            .await?;
        assert_eq!(output.stdout.trim(), "hello");
        assert!(output.stderr.is_empty());
        assert_eq!(output.exit_code, Some(0));
        assert!(!output.timed_out);
        Ok(())
    }

    #[tokio::test]
    async fn run_reports_timeout() -> Result<(), Error> {
        let sandbox = Sandbox::create().await?;
        let output = sandbox
            .run("sleep", &["10".to_string()], Duration::from_secs(1))
            .await?;
        assert!(output.timed_out);
        assert_eq!(output.exit_code, None);
        Ok(())
    }

    #[tokio::test]
    async fn missing_command_is_a_sandbox_error() -> Result<(), Error> {
        let sandbox = Sandbox::create().await?;
        let result = sandbox
            .run("definitely-not-a-command", &[], Duration::from_secs(1))
            .await;
        assert!(matches!(result, Err(Error::Sandbox(_))));
        Ok(())
    }

    #[tokio::test]
    async fn drop_removes_the_directory() -> Result<(), Error> {
        let sandbox = Sandbox::create().await?;
        let path = sandbox.root_dir.clone();
        sandbox.write_source("source.py", "print('x')").await?;
        assert!(path.exists());

        drop(sandbox);
        assert!(!path.exists());
        Ok(())
    }
}
