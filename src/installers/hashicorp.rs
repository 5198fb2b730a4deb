//! # HashiCorp Release Installer
//!
//! Terraform, Packer, Vault and Consul ship as a single binary inside a ZIP on
//! `releases.hashicorp.com`, all following the same layout:
//!
//! ```text
//! https://releases.hashicorp.com/<product>/<version>/<product>_<version>_<os>_<arch>.zip
//! ```
//!
//! The archive is saved as `<product>.zip`, extracted into the work dir, and the
//! binary is moved into `/usr/local/bin` with `sudo`.

use colored::Colorize;

use crate::error::{InstallError, InstallResult};
use crate::installers::{InstallerContext, ToolInstaller};
use crate::libs::utilities::assets::fetch_and_extract;
use crate::libs::utilities::platform::{go_arch_name, go_os_name};
use crate::log_info;

/// Products installed through this strategy.
pub const PRODUCTS: [&str; 4] = ["terraform", "packer", "vault", "consul"];

const INSTALL_DIR: &str = "/usr/local/bin/";

pub struct HashiCorpInstaller {
    product: &'static str,
}

impl HashiCorpInstaller {
    pub fn new(product: &'static str) -> Self {
        Self { product }
    }

    /// Release URL for `version`; the version token is used verbatim.
    fn release_url(&self, version: &str, os: &str, arch: &str) -> String {
        let product = self.product;
        format!(
            "https://releases.hashicorp.com/{product}/{version}/{product}_{version}_{os}_{arch}.zip"
        )
    }
}

impl ToolInstaller for HashiCorpInstaller {
    fn install(&self, version: &str, ctx: &InstallerContext) -> InstallResult<()> {
        let os = go_os_name(&ctx.os).ok_or_else(|| ctx.unsupported_os(self.product))?;
        let arch = go_arch_name(&ctx.arch).ok_or_else(|| InstallError::UnsupportedArch {
            tool: self.product.to_string(),
            arch: ctx.arch.clone(),
        })?;

        let url = self.release_url(version, os, arch);
        let archive = ctx.download_path(&format!("{}.zip", self.product));

        let move_binary = || {
            log_info!(
                "Moving {} into {}",
                self.product.bold(),
                INSTALL_DIR.cyan()
            );
            ctx.spawn_checked("sudo", &["mv", self.product, INSTALL_DIR])
        };
        fetch_and_extract(
            ctx.fetcher.as_ref(),
            &url,
            &archive,
            &ctx.work_dir,
            Some(&move_binary),
        )
    }
}
