//! Timestamped descriptor backups. An existing backup is never overwritten.

use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use uplift_core::errors::DescriptorError;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Copy `path` to `<path>.backup-<YYYYmmdd_HHMMSS>` and return the copy's path.
pub fn create_backup(path: &Path) -> Result<PathBuf, DescriptorError> {
    let stamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    create_backup_with_stamp(path, &stamp)
}

/// Like [`create_backup`] with an explicit timestamp. Appends `-1`, `-2`, ...
/// when the name is taken.
pub fn create_backup_with_stamp(path: &Path, stamp: &str) -> Result<PathBuf, DescriptorError> {
    let backup_err = |source: io::Error| DescriptorError::Backup {
        path: path.display().to_string(),
        source,
    };

    let mut source = File::open(path).map_err(backup_err)?;
    let mut attempt = 0u32;
    loop {
        let candidate = backup_path(path, stamp, attempt);
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(mut target) => {
                io::copy(&mut source, &mut target).map_err(backup_err)?;
                tracing::info!(backup = %candidate.display(), "created descriptor backup");
                return Ok(candidate);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(backup_err(e)),
        }
    }
}

fn backup_path(path: &Path, stamp: &str, attempt: u32) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".backup-{stamp}"));
    if attempt > 0 {
        name.push(format!("-{attempt}"));
    }
    PathBuf::from(name)
}
