// Interactive tool selection.
// Walks the catalog in declaration order, shows whether each tool is present,
// asks whether to (re)install it and, for tools with several versions, which one.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::error::SetupError;
use crate::libs::presence::probe;
use crate::libs::utilities::shell::CommandRunner;
use crate::log_debug;
use crate::schemas::selection::{LATEST, Selection};
use crate::schemas::tools::{Tool, ToolCatalog};

/// Prompts over any line-based input and writable output.
pub struct ToolSelector<'a, R, W> {
    input: R,
    output: W,
    runner: &'a dyn CommandRunner,
}

impl<'a, R: BufRead, W: Write> ToolSelector<'a, R, W> {
    pub fn new(input: R, output: W, runner: &'a dyn CommandRunner) -> Self {
        Self {
            input,
            output,
            runner,
        }
    }

    /// Asks about every tool in `catalog` and returns the accepted ones.
    ///
    /// Fails only when input cannot be read (including end of input) or
    /// output cannot be written.
    pub fn select_tools(&mut self, catalog: &ToolCatalog) -> Result<Selection, SetupError> {
        let mut selection = Selection::new();
        self.say(&format!("{}\n", "Checking installed tools...".blue()))?;

        for tool in catalog.tools() {
            let presence = probe(tool, self.runner);
            let question = if presence.installed {
                self.say(&format!("{}", format!("✓ {} is already installed", tool.name).green()))?;
                self.say(&format!("  Current version: {}", presence.version))?;
                format!("Would you like to reinstall/update {}? (y/n): ", tool.name)
            } else {
                self.say(&format!("{}", format!("✗ {} is not installed", tool.name).yellow()))?;
                format!("Would you like to install {}? (y/n): ", tool.name)
            };
            self.ask(&question)?;

            let answer = self.read_line()?.trim().to_lowercase();
            if answer == "y" {
                let version = if tool.offers_versions() {
                    self.select_version(tool)?
                } else {
                    LATEST.to_string()
                };
                log_debug!("[Select] {} -> {}", tool.name, version);
                selection.insert(&tool.name, &version);
            }
            self.say("")?;
        }

        Ok(selection)
    }

    /// Lists the tool's versions and keeps asking until a valid 1-based index is given.
    ///
    /// There is deliberately no retry limit; only a closed input ends the loop early.
    pub fn select_version(&mut self, tool: &Tool) -> Result<String, SetupError> {
        self.say(&format!(
            "{}",
            format!("Available versions for {}:", tool.name).yellow()
        ))?;
        for (i, version) in tool.versions.iter().enumerate() {
            self.say(&format!("{}) {}", i + 1, version))?;
        }

        let count = tool.versions.len();
        loop {
            self.ask(&format!("Select {} version (1-{}): ", tool.name, count))?;
            let index = parse_index(&self.read_line()?);
            if (1..=count).contains(&index) {
                return Ok(tool.versions[index - 1].clone());
            }
        }
    }

    fn read_line(&mut self) -> Result<String, SetupError> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(SetupError::Input)?;
        if read == 0 {
            return Err(SetupError::Input(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            )));
        }
        Ok(line)
    }

    fn say(&mut self, line: &str) -> Result<(), SetupError> {
        writeln!(self.output, "{line}").map_err(SetupError::Output)
    }

    fn ask(&mut self, prompt: &str) -> Result<(), SetupError> {
        write!(self.output, "{prompt}")
            .and_then(|_| self.output.flush())
            .map_err(SetupError::Output)
    }
}

/// Reads the leading integer of a menu answer, so `2)` or `2 1.4.6` pick entry 2.
/// No leading digits, a negative number or an overflow counts as 0 (invalid).
fn parse_index(input: &str) -> usize {
    let answer = input.trim();
    if answer.starts_with('-') {
        return 0;
    }
    let answer = answer.strip_prefix('+').unwrap_or(answer);
    let digits: String = answer.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}
