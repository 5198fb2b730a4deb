// Installation strategies, one per tool family, plus the registry the dispatcher
// consults by tool name.
//
// A strategy receives the chosen version token and the `InstallerContext`, and
// branches on the detected OS. Adding a tool means writing a `ToolInstaller` and
// registering it in `default_registry`; the dispatcher itself never changes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::error::{InstallError, InstallResult};
use crate::libs::utilities::assets::{Fetcher, HttpFetcher};
use crate::libs::utilities::platform::{detect_architecture, detect_os};
use crate::libs::utilities::shell::{CommandOutcome, CommandRunner, SystemRunner};
use crate::log_debug;

/// AWS CLI v2: bundled ZIP + install script on Linux, `.pkg` on macOS.
pub(crate) mod aws_cli;

/// Azure CLI: vendor install script on Linux, Homebrew on macOS.
pub(crate) mod azure_cli;

/// HashiCorp release ZIPs (terraform, packer, vault, consul).
pub(crate) mod hashicorp;

/// Everything a strategy needs to know about the machine it runs on.
pub struct InstallerContext {
    /// Normalized OS identifier ("linux", "macos", ...), fixed for the run.
    pub os: String,
    /// Normalized CPU architecture ("x86_64", "arm64", ...).
    pub arch: String,
    /// Directory where archives are downloaded and extracted.
    pub work_dir: PathBuf,
    pub runner: Box<dyn CommandRunner>,
    pub fetcher: Box<dyn Fetcher>,
}

impl InstallerContext {
    /// Context for the running machine, downloading into `work_dir`.
    pub fn detect(work_dir: &Path) -> Self {
        Self {
            os: detect_os(),
            arch: detect_architecture(),
            work_dir: work_dir.to_path_buf(),
            runner: Box::new(SystemRunner::new(work_dir)),
            fetcher: Box::new(HttpFetcher),
        }
    }

    /// Absolute location of a downloaded file inside the work dir.
    pub fn download_path(&self, file_name: &str) -> PathBuf {
        self.work_dir.join(file_name)
    }

    pub fn unsupported_os(&self, tool: &str) -> InstallError {
        InstallError::UnsupportedOs {
            tool: tool.to_string(),
            os: self.os.clone(),
        }
    }

    /// Spawns `program args...` and turns a spawn failure or non-zero exit into an error.
    pub fn spawn_checked(&self, program: &str, args: &[&str]) -> InstallResult<()> {
        let command = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        check_outcome(command, self.runner.spawn(program, args))
    }

    /// Runs a shell expression attached to the terminal and checks its exit status.
    pub fn shell_checked(&self, command: &str) -> InstallResult<()> {
        check_outcome(command.to_string(), self.runner.run_shell(command))
    }
}

fn check_outcome(command: String, result: std::io::Result<CommandOutcome>) -> InstallResult<()> {
    match result {
        Ok(outcome) if outcome.success => {
            log_debug!("[Installer] `{}` succeeded", command.green());
            Ok(())
        }
        Ok(outcome) => Err(InstallError::CommandFailed {
            status: outcome.describe_status(),
            command,
        }),
        Err(source) => Err(InstallError::CommandSpawn { command, source }),
    }
}

/// The OS-specific procedure that installs one tool.
pub trait ToolInstaller {
    fn install(&self, version: &str, ctx: &InstallerContext) -> InstallResult<()>;
}

/// Tool name -> installation strategy, populated at startup.
#[derive(Default)]
pub struct InstallerRegistry {
    installers: HashMap<String, Box<dyn ToolInstaller>>,
}

impl InstallerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the strategy for `tool`.
    pub fn register(&mut self, tool: &str, installer: Box<dyn ToolInstaller>) {
        self.installers.insert(tool.to_string(), installer);
    }

    pub fn get(&self, tool: &str) -> Option<&dyn ToolInstaller> {
        self.installers.get(tool).map(|installer| installer.as_ref())
    }
}

/// Strategies shipped with opsdev. Catalog tools missing here (go, python) are skipped.
pub fn default_registry() -> InstallerRegistry {
    let mut registry = InstallerRegistry::new();
    registry.register("aws-cli", Box::new(aws_cli::AwsCliInstaller));
    registry.register("azure-cli", Box::new(azure_cli::AzureCliInstaller));
    for product in hashicorp::PRODUCTS {
        registry.register(product, Box::new(hashicorp::HashiCorpInstaller::new(product)));
    }
    registry
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::io;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    use super::InstallerContext;
    use crate::libs::utilities::assets::Fetcher;
    use crate::libs::utilities::shell::{CommandOutcome, CommandRunner};

    /// Records every command and answers with a fixed outcome.
    #[derive(Clone, Default)]
    pub struct RecordingRunner {
        pub calls: Rc<RefCell<Vec<String>>>,
        pub fail: bool,
    }

    impl RecordingRunner {
        fn record(&self, line: String) -> io::Result<CommandOutcome> {
            self.calls.borrow_mut().push(line);
            Ok(CommandOutcome {
                success: !self.fail,
                code: Some(if self.fail { 1 } else { 0 }),
                stdout: String::new(),
            })
        }
    }

    impl CommandRunner for RecordingRunner {
        fn capture(&self, command: &str) -> io::Result<CommandOutcome> {
            self.record(format!("capture: {command}"))
        }

        fn run_shell(&self, command: &str) -> io::Result<CommandOutcome> {
            self.record(format!("shell: {command}"))
        }

        fn spawn(&self, program: &str, args: &[&str]) -> io::Result<CommandOutcome> {
            self.record(format!("spawn: {program} {}", args.join(" ")))
        }
    }

    /// Records requested URLs and serves a local file (or an empty body).
    #[derive(Clone, Default)]
    pub struct RecordingFetcher {
        pub urls: Rc<RefCell<Vec<(String, PathBuf)>>>,
        pub payload: Option<PathBuf>,
    }

    impl Fetcher for RecordingFetcher {
        fn fetch(&self, url: &str, dest: &Path) -> io::Result<()> {
            self.urls
                .borrow_mut()
                .push((url.to_string(), dest.to_path_buf()));
            match &self.payload {
                Some(src) => std::fs::copy(src, dest).map(|_| ()),
                None => std::fs::write(dest, b""),
            }
        }
    }

    pub fn context(
        os: &str,
        arch: &str,
        work_dir: &Path,
        runner: &RecordingRunner,
        fetcher: &RecordingFetcher,
    ) -> InstallerContext {
        InstallerContext {
            os: os.to_string(),
            arch: arch.to_string(),
            work_dir: work_dir.to_path_buf(),
            runner: Box::new(runner.clone()),
            fetcher: Box::new(fetcher.clone()),
        }
    }

    /// Writes a ZIP containing a single executable entry.
    pub fn zip_with_entry(path: &Path, name: &str) {
        use std::io::Write;
        use zip::ZipWriter;
        use zip::write::FileOptions;

        let mut writer = ZipWriter::new(std::fs::File::create(path).unwrap());
        writer
            .start_file(name, FileOptions::default().unix_permissions(0o755))
            .unwrap();
        writer.write_all(b"#!/bin/sh\n").unwrap();
        writer.finish().unwrap();
    }
}
