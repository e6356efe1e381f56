//! Core engine: literal scanning, key collection, locale persistence and
//! reconciliation. This layer performs no console output.

pub mod collector;
pub mod reconcile;
pub mod scanner;
pub mod store;

pub use collector::{CollectedKeys, collect_keys};
pub use reconcile::{Classification, Reconciliation, ReconciliationReport, reconcile};
pub use scanner::Literals;
pub use store::{LocaleDocument, list_locales};
