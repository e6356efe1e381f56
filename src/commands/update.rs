//! The `update` command: scan the codebase and reconcile locale files.
//!
//! This module returns data; printing lives in `cli::report`.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use crate::{
    cli::CommonArgs,
    config::{Config, load_config},
    core::{LocaleDocument, ReconciliationReport, collect_keys, list_locales, reconcile},
};

/// What happened to one locale file.
#[derive(Debug)]
pub struct LocaleOutcome {
    pub locale: String,
    pub path: PathBuf,
    pub report: ReconciliationReport,
}

/// Result of one full update run.
#[derive(Debug)]
pub struct UpdateSummary {
    pub files_scanned: usize,
    pub keys_found: usize,
    pub locales: Vec<LocaleOutcome>,
}

pub fn update(locales: &str, common: &CommonArgs) -> Result<UpdateSummary> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;
    execute(locales, common, &loaded.config)
}

/// Run the scan-and-reconcile pipeline with an already-loaded config.
///
/// Separate from [`update`] so tests can point the roots into a temp tree
/// without touching the process working directory.
pub fn execute(locales: &str, common: &CommonArgs, config: &Config) -> Result<UpdateSummary> {
    let source_root = common
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.source_root));
    let locales_root = common
        .locales_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.locales_root));

    let locales = resolve_locales(locales, &locales_root)?;
    if locales.is_empty() {
        bail!("No locales to update. Pass a comma-separated list of language codes, or 'all'.");
    }

    let collected = collect_keys(
        &source_root,
        config.source_extension(),
        config.call_char()?,
        &config.ignore_patterns()?,
    )?;

    let mut outcomes = Vec::with_capacity(locales.len());
    for locale in locales {
        let path = locales_root.join(format!("{}.json", locale));
        let prior = LocaleDocument::load(&path)?;
        let reconciliation = reconcile(prior.as_ref(), &collected.keys);
        // Persist only after the merge for this locale fully completed.
        reconciliation.document.save(&path)?;
        outcomes.push(LocaleOutcome {
            locale,
            path,
            report: reconciliation.report,
        });
    }

    Ok(UpdateSummary {
        files_scanned: collected.files_scanned,
        keys_found: collected.keys.len(),
        locales: outcomes,
    })
}

/// Expand the locales argument: `all` means every locale file that already
/// exists; anything else is a comma-separated list of language codes.
fn resolve_locales(arg: &str, locales_root: &Path) -> Result<Vec<String>> {
    if arg == "all" {
        return list_locales(locales_root).with_context(|| {
            format!(
                "Cannot update 'all' locales: no locale files found under \"{}\"",
                locales_root.display()
            )
        });
    }

    Ok(arg
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(String::from)
        .collect())
}
