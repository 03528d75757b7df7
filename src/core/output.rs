//! Output module - Whole-file writes for generated files

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Replace `path` with `contents`, creating parent directories first.
///
/// Writes to a temporary sibling and renames it over the target, so readers
/// see either the old file or the new one.
pub fn write_file(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = path.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()));

    let result = (|| {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_parents_and_replaces() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("include/deep/out.h");

        write_file(&target, "first version, much longer\n").unwrap();
        write_file(&target, "second\n").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "second\n");
        let leftovers: Vec<_> = fs::read_dir(target.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
