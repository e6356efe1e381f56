//! The `init` command: write a default configuration file.

use std::{fs, path::Path};

use anyhow::Result;

use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<()> {
    init_in(Path::new("."))
}

pub fn init_in(dir: &Path) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
