//! # AWS CLI Installer
//!
//! Installs AWS CLI v2 from the official distribution endpoints.
//!
//! - **Linux**: downloads the architecture-specific ZIP bundle, extracts it into the
//!   work dir and runs `sudo ./aws/install --update`. `--update` makes the same
//!   command work for a fresh install and for replacing an existing one.
//! - **macOS**: downloads `AWSCLIV2.pkg` and hands it to the native `installer`.
//!
//! AWS only publishes "latest" builds, so the version token is not used.

use colored::Colorize;

use crate::error::{InstallError, InstallResult};
use crate::installers::{InstallerContext, ToolInstaller};
use crate::libs::utilities::assets::{fetch, fetch_and_extract};
use crate::log_info;

const TOOL: &str = "aws-cli";
const LINUX_BUNDLE: &str = "awscliv2.zip";
const MACOS_PKG: &str = "AWSCLIV2.pkg";
const MACOS_PKG_URL: &str = "https://awscli.amazonaws.com/AWSCLIV2.pkg";

pub struct AwsCliInstaller;

impl AwsCliInstaller {
    /// Linux bundle URL; AWS names the ARM build `aarch64`.
    fn linux_bundle_url(arch: &str) -> Option<String> {
        let arch = match arch {
            "x86_64" => "x86_64",
            "arm64" => "aarch64",
            _ => return None,
        };
        Some(format!("https://awscli.amazonaws.com/awscli-exe-linux-{arch}.zip"))
    }

    fn install_linux(&self, ctx: &InstallerContext) -> InstallResult<()> {
        let url = Self::linux_bundle_url(&ctx.arch).ok_or_else(|| InstallError::UnsupportedArch {
            tool: TOOL.to_string(),
            arch: ctx.arch.clone(),
        })?;

        let run_installer = || ctx.spawn_checked("sudo", &["./aws/install", "--update"]);
        fetch_and_extract(
            ctx.fetcher.as_ref(),
            &url,
            &ctx.download_path(LINUX_BUNDLE),
            &ctx.work_dir,
            Some(&run_installer),
        )
    }

    fn install_macos(&self, ctx: &InstallerContext) -> InstallResult<()> {
        fetch(ctx.fetcher.as_ref(), MACOS_PKG_URL, &ctx.download_path(MACOS_PKG))?;
        log_info!("Running the macOS installer for {}", MACOS_PKG.cyan());
        ctx.spawn_checked("sudo", &["installer", "-pkg", MACOS_PKG, "-target", "/"])
    }
}

impl ToolInstaller for AwsCliInstaller {
    fn install(&self, _version: &str, ctx: &InstallerContext) -> InstallResult<()> {
        match ctx.os.as_str() {
            "linux" => self.install_linux(ctx),
            "macos" => self.install_macos(ctx),
            _ => Err(ctx.unsupported_os(TOOL)),
        }
    }
}
