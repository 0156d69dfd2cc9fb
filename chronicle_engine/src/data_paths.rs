//! Locating the runtime data directory.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Cached path to the directory holding content, config and help files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the data directory.
///
/// Tries the workspace layout first, then a flattened `data/`, then the same two
/// next to (and one level above) the executable.
fn detect_data_root() -> PathBuf {
    let mut candidates = vec![PathBuf::from("chronicle_engine/data"), PathBuf::from("data")];

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("chronicle_engine/data"));
        candidates.push(dir.join("data"));
        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("chronicle_engine/data"));
            candidates.push(parent.join("data"));
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("chronicle_engine/data"))
}
