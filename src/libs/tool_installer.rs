// This module dispatches the user's selection to the installation strategies.
// It walks the selection in order, looks each tool up in the `InstallerRegistry`,
// skips tools without a strategy and stops at the first failing install.
// Progress lines go to the session output next to the prompts.

use std::io::Write;

use colored::Colorize;

use crate::error::SetupError;
use crate::installers::{InstallerContext, InstallerRegistry};
use crate::schemas::selection::Selection;
use crate::{log_debug, log_error};

/// Installs every selected tool, one at a time.
///
/// # Returns
/// * `Ok(())` when every tool with a strategy installed (tools without one are skipped).
/// * `Err(SetupError::Install)` naming the first tool whose strategy failed;
///   tools after it are not attempted.
pub fn install_selected_tools<W: Write>(
    selection: &Selection,
    registry: &InstallerRegistry,
    ctx: &InstallerContext,
    output: &mut W,
) -> Result<(), SetupError> {
    log_debug!("Entering install_selected_tools() with {} tool(s).", selection.len());

    for (tool, version) in selection.iter() {
        writeln!(
            output,
            "\n{}",
            format!("Installing {tool} version {version} for {}...", ctx.os).blue()
        )
        .map_err(SetupError::Output)?;

        let Some(installer) = registry.get(tool) else {
            writeln!(
                output,
                "{}",
                format!("Skipping {tool}: installation not implemented").yellow()
            )
            .map_err(SetupError::Output)?;
            continue;
        };

        if let Err(source) = installer.install(version, ctx) {
            log_error!("Failed to install {}: {}", tool.red().bold(), source);
            return Err(SetupError::Install {
                tool: tool.to_string(),
                source,
            });
        }
        writeln!(output, "{}", format!("Successfully installed {tool}").green())
            .map_err(SetupError::Output)?;
    }

    log_debug!("Exiting install_selected_tools() function.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InstallError, InstallResult};
    use crate::installers::ToolInstaller;
    use crate::installers::test_support::{RecordingFetcher, RecordingRunner, context};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records `name@version` on every call and optionally fails.
    struct FakeInstaller {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl ToolInstaller for FakeInstaller {
        fn install(&self, version: &str, _ctx: &InstallerContext) -> InstallResult<()> {
            self.log.borrow_mut().push(format!("{}@{}", self.name, version));
            if self.fail {
                Err(InstallError::CommandFailed {
                    command: format!("install {}", self.name),
                    status: "status 1".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn registry(log: &Rc<RefCell<Vec<String>>>, failing: &[&'static str]) -> InstallerRegistry {
        let mut registry = InstallerRegistry::new();
        for name in ["first", "second", "third"] {
            registry.register(
                name,
                Box::new(FakeInstaller {
                    name,
                    log: Rc::clone(log),
                    fail: failing.contains(&name),
                }),
            );
        }
        registry
    }

    /// Dispatches on a fake linux context and returns the result with the session output.
    fn dispatch(
        selection: &Selection,
        registry: &InstallerRegistry,
    ) -> (Result<(), SetupError>, String) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(
            "linux",
            "x86_64",
            dir.path(),
            &RecordingRunner::default(),
            &RecordingFetcher::default(),
        );
        let mut output = Vec::new();
        let result = install_selected_tools(selection, registry, &ctx, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn installs_in_selection_order_with_versions() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = registry(&log, &[]);
        let mut selection = Selection::new();
        selection.insert("second", "1.4.6");
        selection.insert("first", "latest");

        let (result, output) = dispatch(&selection, &registry);
        result.unwrap();

        assert_eq!(*log.borrow(), vec!["second@1.4.6", "first@latest"]);
        assert!(output.contains("Installing second version 1.4.6 for linux..."));
        assert!(output.contains("Successfully installed first"));
    }

    #[test]
    fn unknown_tool_is_skipped_and_dispatch_continues() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = registry(&log, &[]);
        let mut selection = Selection::new();
        selection.insert("python", "3.11.4");
        selection.insert("second", "latest");

        let (result, output) = dispatch(&selection, &registry);
        result.unwrap();

        assert_eq!(*log.borrow(), vec!["second@latest"]);
        assert!(output.contains("Installing python version 3.11.4 for linux..."));
        assert!(output.contains("Skipping python: installation not implemented"));
    }

    #[test]
    fn first_failure_stops_dispatch_and_names_the_tool() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = registry(&log, &["first"]);
        let mut selection = Selection::new();
        selection.insert("first", "latest");
        selection.insert("second", "latest");

        let (result, output) = dispatch(&selection, &registry);
        let err = result.unwrap_err();

        match err {
            SetupError::Install { tool, .. } => assert_eq!(tool, "first"),
            other => panic!("expected Install error, got {other:?}"),
        }
        assert_eq!(*log.borrow(), vec!["first@latest"]);
        assert!(!output.contains("second"));
    }

    #[test]
    fn empty_selection_is_a_no_op() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = registry(&log, &[]);

        let (result, output) = dispatch(&Selection::new(), &registry);
        result.unwrap();
        assert!(log.borrow().is_empty());
        assert!(output.is_empty());
    }
}
