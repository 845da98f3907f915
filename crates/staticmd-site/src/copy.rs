//! Static file copying.

use log::debug;
use staticmd_core::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory entries of `dir`, sorted by path.
pub(crate) fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();
    Ok(paths)
}

/// Recreate the tree under `src` inside `dst`.
///
/// Directories are created as needed and files are copied byte for byte.
/// Returns the number of files copied.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize> {
    fs::create_dir_all(dst)?;

    let mut copied = 0;
    for path in sorted_entries(src)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dst.join(name);
        if path.is_dir() {
            copied += copy_dir_recursive(&path, &target)?;
        } else {
            debug!("Copying {} to {}", path.display(), target.display());
            fs::copy(&path, &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
