//! # Tool Catalog Schema
//!
//! Defines the installable tools and the catalog that holds them. A catalog is
//! built once at startup and only read afterwards.
//!
//! ## Core Concepts
//!
//! - **Tool**: one installable program, with the shell commands used to detect it
//! - **ToolCatalog**: the ordered list of tools offered to the user
//!
//! The declaration order of the catalog is the order in which the user is prompted.

use std::collections::HashSet;

use crate::error::SetupError;

// ============================================================================
// TOOL
// ============================================================================

/// A named external program that opsdev can detect and install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    /// Stable key used to find the installation strategy.
    pub name: String,

    /// Offerable versions, most recent first.
    ///
    /// An empty list means the tool has no version choice and is always
    /// installed as `latest`.
    pub versions: Vec<String>,

    /// Shell expression whose exit status tells whether the tool is installed.
    pub check_command: String,

    /// Shell expression whose stdout is the human-readable version text.
    pub info_command: String,
}

impl Tool {
    pub fn new(name: &str, check_command: &str, info_command: &str) -> Self {
        Self {
            name: name.to_string(),
            versions: Vec::new(),
            check_command: check_command.to_string(),
            info_command: info_command.to_string(),
        }
    }

    /// Adds the list of versions the user may choose from.
    pub fn with_versions(mut self, versions: &[&str]) -> Self {
        self.versions = versions.iter().map(|v| v.to_string()).collect();
        self
    }

    /// `true` when the user gets to pick a version for this tool.
    pub fn offers_versions(&self) -> bool {
        !self.versions.is_empty()
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Ordered, immutable list of tools. Names are unique.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
}

impl ToolCatalog {
    /// Builds a catalog, rejecting duplicate tool names since dispatch is by name.
    pub fn new(tools: Vec<Tool>) -> Result<Self, SetupError> {
        let mut seen = HashSet::new();
        for tool in &tools {
            if !seen.insert(tool.name.as_str()) {
                return Err(SetupError::DuplicateTool(tool.name.clone()));
            }
        }
        Ok(Self { tools })
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }
}

/// The toolbox offered by `opsdev`: cloud CLIs, HashiCorp binaries and language runtimes.
pub fn default_catalog() -> Result<ToolCatalog, SetupError> {
    ToolCatalog::new(vec![
        Tool::new("aws-cli", "aws --version", "aws --version"),
        Tool::new("azure-cli", "az --version", "az --version"),
        Tool::new("terraform", "terraform --version", "terraform version")
            .with_versions(&["1.5.0", "1.4.6", "1.3.9"]),
        Tool::new("packer", "packer --version", "packer --version")
            .with_versions(&["1.9.1", "1.8.7"]),
        Tool::new("vault", "vault --version", "vault version")
            .with_versions(&["1.13.3", "1.12.7"]),
        Tool::new("consul", "consul --version", "consul version")
            .with_versions(&["1.15.2", "1.14.7"]),
        Tool::new("go", "go version", "go version").with_versions(&["1.20.5", "1.19.10"]),
        Tool::new("python", "python3 --version", "python3 --version")
            .with_versions(&["3.11.4", "3.10.11"]),
    ])
}
