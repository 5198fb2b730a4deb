// Thin wrappers around the system: downloads, archives, platform detection and processes.

pub mod assets;
pub mod compression;
pub mod platform;
pub mod shell;
