//! Holepunch - localization key extraction and locale reconciliation
//!
//! Holepunch scans a codebase for calls to a translation function, collects
//! every string literal used as a translation key, and reconciles that key
//! set against per-language JSON locale files: existing translations are
//! kept, new keys are "hole-punched" with null, and keys no longer in use
//! are removed and reported.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, report printing)
//! - `commands`: Command implementations returning printable summaries
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanner, key collector, locale store and reconciler

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
