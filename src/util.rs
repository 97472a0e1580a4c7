#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    path::{Path, PathBuf},
    time::SystemTime,
};

use anyhow::{Context, Result};
use glob::glob;

/// A glob utility function to find paths to files with certain extension
///
/// * `extension`: the file extension to find paths for
/// * `search_depth`: how many folders deep to search for
/// * `root_dir`: the root directory where search starts
pub fn find_files(extension: &str, search_depth: i8, root_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut pattern = root_dir.to_path_buf();

    for _ in 0..search_depth {
        pattern.push("**");
    }

    pattern.push(format!("*.{extension}"));
    let pattern = pattern
        .to_str()
        .context("Could not convert root_dir to string")?
        .to_string();

    Ok(glob(&pattern)
        .context("Could not create glob")?
        .filter_map(Result::ok)
        .collect())
}

/// Returns the most recently modified subdirectory of `directory`, or `None`
/// if it contains no subdirectories.
pub fn latest_subdir(directory: &Path) -> Result<Option<PathBuf>> {
    let entries = std::fs::read_dir(directory)
        .with_context(|| format!("Could not read directory: {}", directory.display()))?;

    let mut latest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry.context("Could not read directory entry")?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let modified = entry
            .metadata()
            .and_then(|meta| meta.modified())
            .with_context(|| format!("Could not read modification time: {}", path.display()))?;

        if latest.as_ref().is_none_or(|(stamp, _)| modified > *stamp) {
            latest = Some((modified, path));
        }
    }

    Ok(latest.map(|(_, path)| path))
}
