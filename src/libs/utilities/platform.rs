// Our custom logging macros.
use crate::{log_debug, log_warn};
// The 'colored' crate helps us make our console output look pretty and readable.
use colored::Colorize;

/// Operating systems the installer knows how to drive, in normalized form.
pub const SUPPORTED_OS: [&str; 2] = ["linux", "macos"];

/// Detects the current operating system as a normalized string ("linux", "macos", ...).
///
/// `std::env::consts::OS` is fixed at compile time for the running binary, so
/// this never fails; unknown values are passed through lower-cased.
pub fn detect_os() -> String {
    normalize_os(std::env::consts::OS)
}

/// Detects the current CPU architecture as a normalized string ("x86_64", "arm64", ...).
pub fn detect_architecture() -> String {
    normalize_arch(std::env::consts::ARCH)
}

/// `true` when opsdev has install paths for the given (normalized) OS.
pub fn is_supported_os(os: &str) -> bool {
    SUPPORTED_OS.contains(&os)
}

/// Normalizes the many spellings of an OS name into one lowercase form.
///
/// # Returns
/// * `String`: "macos", "linux", "windows", or the lowercase input when unknown.
pub fn normalize_os(os: &str) -> String {
    match os.to_lowercase().as_str() {
        "macos" | "darwin" | "apple-darwin" => "macos".to_string(),
        "linux" => "linux".to_string(),
        "windows" | "win32" | "win64" => "windows".to_string(),
        other => {
            log_warn!("[Platform] Unknown OS variant '{}', using as-is.", other.purple());
            other.to_string()
        }
    }
}

/// Normalizes CPU architecture names ("aarch64" -> "arm64", "amd64" -> "x86_64").
pub fn normalize_arch(arch: &str) -> String {
    match arch.to_lowercase().as_str() {
        "aarch64" | "arm64" => "arm64".to_string(),
        "amd64" | "x86_64" => "x86_64".to_string(),
        other => {
            log_warn!("[Platform] Unknown ARCH variant '{}', using as-is.", other.purple());
            other.to_string()
        }
    }
}

/// OS segment used by vendor release URLs that follow Go's naming (HashiCorp).
pub fn go_os_name(os: &str) -> Option<&'static str> {
    let name = match os {
        "linux" => Some("linux"),
        "macos" => Some("darwin"),
        _ => None,
    };
    log_debug!("[Platform] Release OS name for '{}': {:?}", os, name);
    name
}

/// Architecture segment used by vendor release URLs that follow Go's naming.
pub fn go_arch_name(arch: &str) -> Option<&'static str> {
    match arch {
        "x86_64" => Some("amd64"),
        "arm64" => Some("arm64"),
        _ => None,
    }
}
