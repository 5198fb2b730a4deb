use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that end the whole setup run.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("unsupported operating system: {0}")]
    UnsupportedOs(String),

    #[error("duplicate tool '{0}' in catalog")]
    DuplicateTool(String),

    #[error("error reading input")]
    Input(#[source] io::Error),

    #[error("error writing to terminal")]
    Output(#[source] io::Error),

    #[error("error installing {tool}")]
    Install {
        tool: String,
        #[source]
        source: InstallError,
    },
}

/// Errors raised by a single tool's installation strategy.
#[derive(Error, Debug)]
pub enum InstallError {
    #[error("unsupported OS for {tool} installation: {os}")]
    UnsupportedOs { tool: String, os: String },

    #[error("unsupported architecture for {tool} installation: {arch}")]
    UnsupportedArch { tool: String, arch: String },

    #[error("error downloading {url}")]
    Download {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("error extracting {}", .path.display())]
    Extract {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to run `{command}`")]
    CommandSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {status}")]
    CommandFailed { command: String, status: String },
}

pub type InstallResult<T> = Result<T, InstallError>;
