use crate::path;

use anyhow::{anyhow, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Overrides the directory test resources are looked up in.
pub const RESOURCE_DIR_VAR: &str = "ASSERTIMG_RESOURCE_DIR";

const DEFAULT_RESOURCE_DIR: &str = "tests/testdata";

/// Directory holding test resources. Cargo sets `CARGO_MANIFEST_DIR` for test
/// binaries, so the default resolves against the crate under test.
pub fn resource_root() -> PathBuf {
    if let Ok(dir) = env::var(RESOURCE_DIR_VAR) {
        return PathBuf::from(dir);
    }

    match env::var("CARGO_MANIFEST_DIR") {
        Ok(manifest_dir) => Path::new(&manifest_dir).join(DEFAULT_RESOURCE_DIR),
        Err(_) => PathBuf::from(DEFAULT_RESOURCE_DIR),
    }
}

/// Resolves `resource` under [`resource_root`]. Returns `None` if it isn't a
/// regular file.
pub fn resource_file(resource: &str) -> Option<PathBuf> {
    let file_path = resource_root().join(resource);
    if path::file_exists(&file_path) {
        Some(file_path)
    } else {
        None
    }
}

pub fn require_resource_file(resource: &str) -> Result<PathBuf> {
    resource_file(resource).ok_or_else(|| {
        anyhow!(
            "Resource not found: {} (looked in {})",
            resource,
            resource_root().display()
        )
    })
}
