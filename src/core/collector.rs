//! Directory-tree key collection.
//!
//! Walks a source root, scans every file with the configured extension and
//! folds the extracted literals into one deduplicated key set. Traversal
//! order never affects the result: the keys live in a sorted set, so output
//! order is imposed by the set, not by discovery order. That also makes the
//! per-file scanning safe to run in parallel, which it does via rayon.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::core::scanner::Literals;

/// Aggregate result of one scan pass over the source tree.
#[derive(Debug, Default)]
pub struct CollectedKeys {
    /// Every distinct literal key found, in canonical sorted order.
    pub keys: BTreeSet<String>,
    /// Number of source files scanned, for the summary line.
    pub files_scanned: usize,
}

/// Scan every `.{extension}` file under `root` for calls to `call_name` and
/// collect the union of their literal keys.
///
/// Any file that cannot be read aborts the whole run: a collector operating
/// over a misconfigured project is exceptional enough that incomplete
/// results would be worse than failing.
pub fn collect_keys(
    root: &Path,
    extension: &str,
    call_name: char,
    ignores: &[Pattern],
) -> Result<CollectedKeys> {
    if !root.is_dir() {
        bail!(
            "Source root \"{}\" doesn't exist. Make sure you're running holepunch \
             in your project root, or set \"sourceRoot\" in the config.",
            root.display()
        );
    }

    let files = matching_files(root, extension, ignores)?;

    let keys = files
        .par_iter()
        .map(|path| scan_file(path, call_name))
        .try_reduce(BTreeSet::new, |mut merged, keys| {
            merged.extend(keys);
            Ok(merged)
        })?;

    Ok(CollectedKeys {
        keys,
        files_scanned: files.len(),
    })
}

fn matching_files(root: &Path, extension: &str, ignores: &[Pattern]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry
            .with_context(|| format!("Failed to walk source tree under \"{}\"", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }
        if is_ignored(root, path, ignores) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    Ok(files)
}

/// Match ignore patterns against the path relative to the scan root, so
/// patterns like `vendor/**` work regardless of where the root itself lives.
fn is_ignored(root: &Path, path: &Path, ignores: &[Pattern]) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let relative = relative.to_string_lossy();
    ignores.iter().any(|pattern| pattern.matches(&relative))
}

fn scan_file(path: &Path, call_name: char) -> Result<BTreeSet<String>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    Ok(Literals::new(&source, call_name).collect())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    fn keys(collected: &CollectedKeys) -> Vec<&str> {
        collected.keys.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_collects_across_tree() {
        let dir = tempdir().unwrap();
        write(dir.path(), "main.lua", r#"t("Open") t("Close")"#);
        write(dir.path(), "menu/items.lua", r#"label = t("Open")"#);
        write(dir.path(), "menu/deep/more.lua", r#"t("Quit")"#);

        let collected = collect_keys(dir.path(), "lua", 't', &[]).unwrap();
        // Duplicates across files collapse; iteration is sorted.
        assert_eq!(keys(&collected), vec!["Close", "Open", "Quit"]);
        assert_eq!(collected.files_scanned, 3);
    }

    #[test]
    fn test_extension_filter() {
        let dir = tempdir().unwrap();
        write(dir.path(), "code.lua", r#"t("kept")"#);
        write(dir.path(), "notes.txt", r#"t("skipped")"#);
        write(dir.path(), "script.lua.bak", r#"t("also skipped")"#);

        let collected = collect_keys(dir.path(), "lua", 't', &[]).unwrap();
        assert_eq!(keys(&collected), vec!["kept"]);
        assert_eq!(collected.files_scanned, 1);
    }

    #[test]
    fn test_ignore_patterns() {
        let dir = tempdir().unwrap();
        write(dir.path(), "main.lua", r#"t("kept")"#);
        write(dir.path(), "vendor/lib.lua", r#"t("vendored")"#);

        let ignores = vec![Pattern::new("vendor/**").unwrap()];
        let collected = collect_keys(dir.path(), "lua", 't', &ignores).unwrap();
        assert_eq!(keys(&collected), vec!["kept"]);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");

        let err = collect_keys(&missing, "lua", 't', &[]).unwrap_err();
        assert!(err.to_string().contains("doesn't exist"));
    }

    #[test]
    fn test_empty_tree_yields_empty_set() {
        let dir = tempdir().unwrap();

        let collected = collect_keys(dir.path(), "lua", 't', &[]).unwrap();
        assert!(collected.keys.is_empty());
        assert_eq!(collected.files_scanned, 0);
    }
}
