use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::HAARCASCADES_SUBDIR;

#[derive(Error, Debug)]
pub enum CascadeResolveError {
    #[error("cascade file {name} not found; install the OpenCV data files or pass --cascade-dir")]
    NotFound { name: String },
}

/// Conventional install locations checked after OpenCV's own search.
const WELL_KNOWN_DIRS: &[&str] = &[
    "/usr/share/opencv4/haarcascades",
    "/usr/local/share/opencv4/haarcascades",
    "/opt/homebrew/share/opencv4/haarcascades",
];

/// Resolve a bundled Haar-cascade file by name.
///
/// Resolution order:
/// 1. Explicit directory override (CLI `--cascade-dir`)
/// 2. OpenCV's own data search (`OPENCV_DATA_PATH`, build-time dirs)
/// 3. Conventional install locations
pub fn resolve(name: &str, override_dir: Option<&Path>) -> Result<PathBuf, CascadeResolveError> {
    if let Some(dir) = override_dir {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    if let Ok(found) = opencv::core::find_file(&format!("{HAARCASCADES_SUBDIR}/{name}"), false, true)
    {
        if !found.is_empty() {
            return Ok(PathBuf::from(found));
        }
    }

    for dir in WELL_KNOWN_DIRS {
        let candidate = Path::new(dir).join(name);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(CascadeResolveError::NotFound {
        name: name.to_string(),
    })
}
