//! Locale file persistence.
//!
//! One JSON file per language code, a flat object mapping each literal key
//! to its translation or to an explicit `null` for a hole a translator still
//! has to fill. Keys are kept in a `BTreeMap`, so serialization is always in
//! sorted key order and re-running an unchanged reconciliation writes a
//! byte-identical file. serde_json leaves `&`, `<` and `>` unescaped, which
//! keeps the files diff-friendly and hand-editable.

use std::{collections::BTreeMap, fs, io, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// The persisted key → translation mapping for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleDocument {
    pub entries: BTreeMap<String, Option<String>>,
}

impl LocaleDocument {
    /// Load a locale file.
    ///
    /// Returns `Ok(None)` when the file doesn't exist — that's the normal
    /// "creating a new locale" path, not an error. A file that exists but
    /// isn't a flat object of strings and nulls is an error carrying the
    /// parse detail; it is never silently treated as new.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read locale file: {}", path.display()));
            }
        };

        let json: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse locale file: {}", path.display()))?;
        let Value::Object(object) = json else {
            bail!("Root of locale file must be an object: {}", path.display());
        };

        let mut entries = BTreeMap::new();
        for (key, value) in object {
            let translation = match value {
                Value::String(text) => Some(text),
                Value::Null => None,
                other => bail!(
                    "Translation for key \"{}\" in {} must be a string or null, got: {}",
                    key,
                    path.display(),
                    other
                ),
            };
            entries.insert(key, translation);
        }

        Ok(Some(Self { entries }))
    }

    /// Write the document with pretty formatting and a trailing newline,
    /// creating the locale directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content =
            serde_json::to_string_pretty(&self.entries).context("Failed to serialize locale")?;

        fs::write(path, format!("{}\n", content))
            .with_context(|| format!("Failed to write locale file: {}", path.display()))?;

        Ok(())
    }
}

/// List the language codes that already have a `.json` file in `dir`,
/// sorted. Used by the `all` locale selector.
pub fn list_locales(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read locales directory: {}", dir.display()))?;

    let mut locales = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read locales directory: {}", dir.display()))?;
        if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(true) {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(code) = name.strip_suffix(".json") {
            locales.push(code.to_string());
        }
    }

    locales.sort();
    Ok(locales)
}
