// ZIP extraction for downloaded tool bundles.
// Entries are unpacked one by one so each file keeps the Unix mode recorded in the
// archive (the AWS CLI bundle and HashiCorp binaries ship with their executable bits set).

use std::fs::{self, File, OpenOptions};
use std::io;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::Path;

use colored::Colorize;
use zip::ZipArchive;

use crate::log_debug;

/// Mode used for entries whose archive carries no Unix permissions.
const DEFAULT_FILE_MODE: u32 = 0o644;

/// Extracts every entry of the ZIP archive at `src` into `dest`, preserving the
/// directory structure and each file's recorded mode.
///
/// # Returns
/// * `io::Result<usize>`: the number of entries written, or an error if `src` is not a
///   valid archive, an entry name escapes `dest`, or any write fails.
pub fn extract_zip(src: &Path, dest: &Path) -> io::Result<usize> {
    log_debug!(
        "[Extract] Unpacking {} into {}",
        src.display().to_string().blue(),
        dest.display().to_string().cyan()
    );

    let file = File::open(src)?;
    let mut archive = ZipArchive::new(file)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let relative = entry.enclosed_name().map(Path::to_path_buf).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("archive entry '{}' escapes the destination", entry.name()),
            )
        })?;
        let out_path = dest.join(&relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            log_debug!("[Extract] dir  {}", relative.display());
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mode = entry.unix_mode().map_or(DEFAULT_FILE_MODE, |m| m & 0o7777);
        let mut out_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(mode)
            .open(&out_path)?;
        io::copy(&mut entry, &mut out_file)?;
        // The process umask applies on create; pin the recorded mode explicitly.
        out_file.set_permissions(fs::Permissions::from_mode(mode))?;
        drop(out_file);
        drop(entry);

        log_debug!("[Extract] file {} ({:o})", relative.display(), mode);
    }

    Ok(archive.len())
}
