// Download helpers used by the installation strategies.
// `fetch` saves a URL to disk; `fetch_and_extract` also unpacks the ZIP and runs
// the strategy's post-step (usually an elevated move or install script).

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::error::{InstallError, InstallResult};
use crate::libs::utilities::compression::extract_zip;
use crate::{log_debug, log_error, log_info};

/// Something that can save the body of a URL to a local file.
pub trait Fetcher {
    fn fetch(&self, url: &str, dest: &Path) -> io::Result<()>;
}

/// `Fetcher` backed by a blocking `ureq` GET.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> io::Result<()> {
        download_file(url, dest)
    }
}

/// Downloads `url` and streams the body into a newly created file at `dest`.
///
/// Transport failures and non-2xx statuses are errors (`ureq` reports statuses
/// >= 400 as `Error::Status`). A body that ends before its `Content-Length` fails
/// the copy with `UnexpectedEof`. A partially written file is left in place.
pub fn download_file(url: &str, dest: &Path) -> io::Result<()> {
    log_debug!("[Download] Starting download from URL: {}", url.blue());

    let response = match ureq::get(url).call() {
        Ok(res) => res,
        Err(e) => {
            log_error!("[Download] HTTP request failed for {}: {}", url.red(), e);
            return Err(io::Error::other(format!("HTTP error: {e}")));
        }
    };

    let mut file = File::create(dest)?;
    let mut reader = response.into_reader();
    let written = io::copy(&mut reader, &mut file)?;
    file.flush()?;

    log_debug!(
        "[Download] {} bytes saved to {}",
        written,
        dest.display().to_string().green()
    );
    Ok(())
}

/// Fetches `url` into `dest`, wrapping any failure with the URL.
pub fn fetch(fetcher: &dyn Fetcher, url: &str, dest: &Path) -> InstallResult<()> {
    log_info!("Downloading {}", url.cyan());
    fetcher.fetch(url, dest).map_err(|source| InstallError::Download {
        url: url.to_string(),
        source,
    })
}

/// Fetches a ZIP archive, unpacks it into `target_dir`, then runs `post_step` once.
///
/// # Returns
/// * The post-step's result, or `Ok(())` when there is none.
pub fn fetch_and_extract(
    fetcher: &dyn Fetcher,
    url: &str,
    dest: &Path,
    target_dir: &Path,
    post_step: Option<&dyn Fn() -> InstallResult<()>>,
) -> InstallResult<()> {
    fetch(fetcher, url, dest)?;
    extract_then(dest, target_dir, post_step)
}

/// Unpacks an already downloaded archive and runs the post-step.
fn extract_then(
    archive: &Path,
    target_dir: &Path,
    post_step: Option<&dyn Fn() -> InstallResult<()>>,
) -> InstallResult<()> {
    let entries = extract_zip(archive, target_dir).map_err(|source| InstallError::Extract {
        path: archive.to_path_buf(),
        source,
    })?;
    log_info!(
        "Extracted {} entries from {}",
        entries,
        archive.display().to_string().cyan()
    );

    match post_step {
        Some(step) => step(),
        None => Ok(()),
    }
}
