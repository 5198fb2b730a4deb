// Azure CLI installer.
// No download step of its own: Linux pipes Microsoft's Debian install script into
// an elevated bash, macOS delegates to Homebrew.

use crate::error::InstallResult;
use crate::installers::{InstallerContext, ToolInstaller};

const TOOL: &str = "azure-cli";
const LINUX_SCRIPT: &str = "curl -sL https://aka.ms/InstallAzureCLIDeb | sudo bash";

pub struct AzureCliInstaller;

impl ToolInstaller for AzureCliInstaller {
    fn install(&self, _version: &str, ctx: &InstallerContext) -> InstallResult<()> {
        match ctx.os.as_str() {
            // The pipeline needs a shell; spawning curl directly would pass `|` as an argument.
            "linux" => ctx.shell_checked(LINUX_SCRIPT),
            "macos" => ctx.spawn_checked("brew", &["install", "azure-cli"]),
            _ => Err(ctx.unsupported_os(TOOL)),
        }
    }
}
