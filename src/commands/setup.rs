// This file contains the logic for the interactive setup session.
// It wires the catalog, the installer registry and the detected machine context
// into a `SetupOrchestrator` that talks to the user over stdin/stdout.

use std::io;

use anyhow::Context;
use colored::Colorize;

use crate::installers::{InstallerContext, default_registry};
use crate::libs::orchestrator::SetupOrchestrator;
use crate::schemas::tools::default_catalog;
use crate::{log_debug, log_info};

/// Main entry point for the setup session.
///
/// Downloads land in the current working directory.
pub fn run() -> anyhow::Result<()> {
    log_debug!("Entered setup::run() function.");

    let work_dir = std::env::current_dir().context("could not determine the working directory")?;
    let context = InstallerContext::detect(&work_dir);
    log_debug!(
        "Detected OS '{}' on '{}', working in {}",
        context.os,
        context.arch,
        work_dir.display()
    );

    let catalog = default_catalog().context("invalid tool catalog")?;
    let stdin = io::stdin();
    let mut orchestrator = SetupOrchestrator::new(
        context,
        catalog,
        default_registry(),
        stdin.lock(),
        io::stdout(),
    );
    orchestrator.start_setup()?;

    log_info!("{}", "Setup completed!".green());
    Ok(())
}
