use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".holepunchrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Root directory scanned for source files.
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Directory holding one `<code>.json` file per locale.
    #[serde(default = "default_locales_root")]
    pub locales_root: String,
    /// Source file extension to scan, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Translation function identifier, exactly one character.
    #[serde(default = "default_call_name")]
    pub call_name: String,
    /// Glob patterns of paths (relative to the source root) to skip.
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_source_root() -> String {
    ".".to_string()
}

fn default_locales_root() -> String {
    "./intl".to_string()
}

fn default_extension() -> String {
    "lua".to_string()
}

fn default_call_name() -> String {
    "t".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            locales_root: default_locales_root(),
            extension: default_extension(),
            call_name: default_call_name(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Errors name the offending field and value.
    pub fn validate(&self) -> Result<()> {
        self.call_char()?;

        if self.extension.trim_start_matches('.').is_empty() {
            bail!("'extension' must not be empty");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }

    /// The translation call identifier as a single character.
    pub fn call_char(&self) -> Result<char> {
        let mut chars = self.call_name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => bail!(
                "'callName' must be exactly one character, got \"{}\"",
                self.call_name
            ),
        }
    }

    /// The source extension without a leading dot.
    pub fn source_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    /// Compiled ignore patterns. Call after `validate`; still errors rather
    /// than panics on a bad pattern.
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })
            })
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::config::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source_root, ".");
        assert_eq!(config.locales_root, "./intl");
        assert_eq!(config.extension, "lua");
        assert_eq!(config.call_name, "t");
        assert!(config.ignores.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "sourceRoot": "src",
              "localesRoot": "src/intl",
              "extension": "lua",
              "callName": "_",
              "ignores": ["vendor/**"]
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.source_root, "src");
        assert_eq!(config.locales_root, "src/intl");
        assert_eq!(config.call_name, "_");
        assert_eq!(config.ignores, vec!["vendor/**"]);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{ "sourceRoot": "scripts" }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.source_root, "scripts");
        assert_eq!(config.locales_root, default_locales_root());
        assert_eq!(config.call_name, "t");
    }

    #[test]
    fn test_call_char() {
        let config = Config::default();
        assert_eq!(config.call_char().unwrap(), 't');
    }

    #[test]
    fn test_validate_multi_char_call_name() {
        let config = Config {
            call_name: "tr".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("callName"));
    }

    #[test]
    fn test_validate_empty_call_name() {
        let config = Config {
            call_name: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_extension() {
        let config = Config {
            extension: ".".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("extension"));
    }

    #[test]
    fn test_source_extension_strips_leading_dot() {
        let config = Config {
            extension: ".lua".to_string(),
            ..Default::default()
        };
        assert_eq!(config.source_extension(), "lua");
    }

    #[test]
    fn test_validate_invalid_ignore_pattern() {
        let config = Config {
            ignores: vec!["[invalid".to_string()], // unclosed bracket
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("ignores"));
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("src").join("menu");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_stops_at_git_root() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        assert!(find_config_file(dir.path()).is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_path, r#"{ "callName": "_" }"#).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert_eq!(result.config.call_name, "_");
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(!result.from_file);
        assert_eq!(result.config.extension, "lua");
    }

    #[test]
    fn test_load_config_with_invalid_value_fails() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_path, r#"{ "callName": "tr" }"#).unwrap();

        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn test_default_config_json_round_trips() {
        let json = default_config_json().unwrap();
        let config: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config.call_name, "t");
        assert!(json.contains("sourceRoot"));
    }
}
