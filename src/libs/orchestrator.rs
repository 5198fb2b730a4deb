// The setup workflow as a single object: OS check, interactive selection, then
// sequential installation. Input and output are generic so the whole run can be
// driven from a test.

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::error::SetupError;
use crate::installers::{InstallerContext, InstallerRegistry};
use crate::libs::tool_installer::install_selected_tools;
use crate::libs::tool_selector::ToolSelector;
use crate::libs::utilities::platform::is_supported_os;
use crate::log_info;
use crate::schemas::tools::ToolCatalog;

pub struct SetupOrchestrator<R, W> {
    context: InstallerContext,
    catalog: ToolCatalog,
    registry: InstallerRegistry,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> SetupOrchestrator<R, W> {
    pub fn new(
        context: InstallerContext,
        catalog: ToolCatalog,
        registry: InstallerRegistry,
        input: R,
        output: W,
    ) -> Self {
        Self {
            context,
            catalog,
            registry,
            input,
            output,
        }
    }

    /// Runs the whole setup. Nothing is printed or read on an unsupported OS.
    pub fn start_setup(&mut self) -> Result<(), SetupError> {
        if !is_supported_os(&self.context.os) {
            return Err(SetupError::UnsupportedOs(self.context.os.clone()));
        }

        writeln!(self.output, "{}", "DevOps Environment Setup".green())
            .and_then(|_| {
                writeln!(
                    self.output,
                    "{}\n",
                    format!("Detected OS: {}", self.context.os).yellow()
                )
            })
            .map_err(SetupError::Output)?;

        let selection = ToolSelector::new(
            &mut self.input,
            &mut self.output,
            self.context.runner.as_ref(),
        )
        .select_tools(&self.catalog)?;

        if selection.is_empty() {
            log_info!("Nothing selected, no changes made.");
            return Ok(());
        }

        install_selected_tools(&selection, &self.registry, &self.context, &mut self.output)
    }
}
