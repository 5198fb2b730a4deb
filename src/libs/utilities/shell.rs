// Process execution for probing and installing tools.
// Everything that touches `std::process` goes through the `CommandRunner` trait so the
// selector and the installers can be exercised without a real shell or `sudo`.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use colored::Colorize;

use crate::log_debug;

/// Result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
    /// Captured stdout. Empty for commands run with inherited stdio.
    pub stdout: String,
}

impl CommandOutcome {
    /// Human-readable exit status, for error messages.
    pub fn describe_status(&self) -> String {
        match self.code {
            Some(code) => format!("status {code}"),
            None => "a signal".to_string(),
        }
    }
}

impl From<Output> for CommandOutcome {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        }
    }
}

pub trait CommandRunner {
    /// Runs `sh -c <command>` and captures stdout. Stderr is discarded.
    fn capture(&self, command: &str) -> io::Result<CommandOutcome>;

    /// Runs `sh -c <command>` attached to the terminal (pipelines, install scripts).
    fn run_shell(&self, command: &str) -> io::Result<CommandOutcome>;

    /// Spawns `program` with `args` attached to the terminal (sudo, installer, brew).
    fn spawn(&self, program: &str, args: &[&str]) -> io::Result<CommandOutcome>;
}

/// `CommandRunner` backed by `std::process`, rooted at a working directory.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    work_dir: PathBuf,
}

impl SystemRunner {
    pub fn new(work_dir: &Path) -> Self {
        Self {
            work_dir: work_dir.to_path_buf(),
        }
    }

    fn shell(&self, command: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command).current_dir(&self.work_dir);
        cmd
    }
}

impl CommandRunner for SystemRunner {
    fn capture(&self, command: &str) -> io::Result<CommandOutcome> {
        log_debug!("[Shell] Capturing: {}", command.cyan());
        let output = self
            .shell(command)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;
        Ok(output.into())
    }

    fn run_shell(&self, command: &str) -> io::Result<CommandOutcome> {
        log_debug!("[Shell] Running: {}", command.cyan());
        let status = self.shell(command).status()?;
        Ok(CommandOutcome {
            success: status.success(),
            code: status.code(),
            stdout: String::new(),
        })
    }

    fn spawn(&self, program: &str, args: &[&str]) -> io::Result<CommandOutcome> {
        log_debug!("[Shell] Spawning: {} {}", program.cyan(), args.join(" "));
        let status = Command::new(program)
            .args(args)
            .current_dir(&self.work_dir)
            .status()?;
        Ok(CommandOutcome {
            success: status.success(),
            code: status.code(),
            stdout: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_collects_stdout_and_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let runner = SystemRunner::new(dir.path());

        let ok = runner.capture("echo hello").unwrap();
        assert!(ok.success);
        assert_eq!(ok.stdout, "hello\n");

        let failed = runner.capture("exit 3").unwrap();
        assert!(!failed.success);
        assert_eq!(failed.code, Some(3));
        assert_eq!(failed.describe_status(), "status 3");
    }

    #[test]
    fn commands_run_inside_the_work_dir() {
        let dir = tempfile::tempdir().unwrap();
        let runner = SystemRunner::new(dir.path());

        let outcome = runner.spawn("touch", &["marker"]).unwrap();
        assert!(outcome.success);
        assert!(dir.path().join("marker").exists());
    }
}
