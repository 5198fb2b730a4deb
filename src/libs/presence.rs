// Presence probing: is a tool installed, and which version?
// Absence is an expected outcome, so probing never fails.

use colored::Colorize;

use crate::libs::utilities::shell::CommandRunner;
use crate::log_debug;
use crate::schemas::tools::Tool;

/// Version text reported when the tool runs but its version command fails.
pub const VERSION_UNKNOWN: &str = "version unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPresence {
    pub installed: bool,
    /// Trimmed output of the tool's info command; empty when not installed.
    pub version: String,
}

/// Runs the tool's check command and, if it succeeds, its info command.
pub fn probe(tool: &Tool, runner: &dyn CommandRunner) -> ToolPresence {
    let installed = match runner.capture(&tool.check_command) {
        Ok(outcome) => outcome.success,
        Err(e) => {
            log_debug!(
                "[Probe] Could not run check for {}: {}",
                tool.name.yellow(),
                e
            );
            false
        }
    };

    if !installed {
        log_debug!("[Probe] {} not found", tool.name.yellow());
        return ToolPresence {
            installed: false,
            version: String::new(),
        };
    }

    let version = match runner.capture(&tool.info_command) {
        Ok(outcome) if outcome.success => outcome.stdout.trim().to_string(),
        _ => VERSION_UNKNOWN.to_string(),
    };
    log_debug!("[Probe] {} found: {}", tool.name.green(), version);

    ToolPresence {
        installed: true,
        version,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::utilities::shell::SystemRunner;

    fn runner() -> (tempfile::TempDir, SystemRunner) {
        let dir = tempfile::tempdir().unwrap();
        let runner = SystemRunner::new(dir.path());
        (dir, runner)
    }

    #[test]
    fn failing_check_means_absent_whatever_the_info_command() {
        let (_dir, runner) = runner();
        let tool = Tool::new("ghost", "exit 1", "echo 9.9.9");

        let presence = probe(&tool, &runner);
        assert!(!presence.installed);
        assert_eq!(presence.version, "");
    }

    #[test]
    fn missing_binary_means_absent() {
        let (_dir, runner) = runner();
        let tool = Tool::new("ghost", "definitely-not-a-real-binary-xyz --version", "true");

        assert!(!probe(&tool, &runner).installed);
    }

    #[test]
    fn installed_tool_reports_trimmed_version() {
        let (_dir, runner) = runner();
        let tool = Tool::new("fake", "true", "printf '  Terraform v1.5.0\\n\\n'");

        let presence = probe(&tool, &runner);
        assert!(presence.installed);
        assert_eq!(presence.version, "Terraform v1.5.0");
    }

    #[test]
    fn failing_info_command_gives_version_unknown() {
        let (_dir, runner) = runner();
        let tool = Tool::new("fake", "true", "echo partial; exit 2");

        let presence = probe(&tool, &runner);
        assert!(presence.installed);
        assert_eq!(presence.version, VERSION_UNKNOWN);
    }
}
