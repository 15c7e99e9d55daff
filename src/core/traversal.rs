//! Recursive file enumeration and destination naming for the two passes.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::info;
use walkdir::WalkDir;

use crate::core::params::CONVERTED_SUFFIX;
use crate::error::{Error, Result};

/// All files under `root`, in the order the filesystem yields them.
/// Symlinks to files are listed; symlinked directories are not descended.
/// Directories are announced as they are entered.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        let file_type = entry.file_type();
        if file_type.is_dir() {
            info!("Found directory: {}", entry.path().display());
        } else if file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// `output_dir/<file name>.txt`; the input's subdirectory is not mirrored
pub fn converted_path(input: &Path, output_dir: &Path) -> Option<PathBuf> {
    let mut name: OsString = input.file_name()?.to_os_string();
    name.push(CONVERTED_SUFFIX);
    Some(output_dir.join(name))
}
