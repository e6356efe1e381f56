//! Merge of a freshly scanned key set against a prior locale document.
//!
//! The reconciled document contains exactly the scanned keys: translations
//! for keys still in use are carried over verbatim, new keys are punched as
//! `null` holes, and keys no longer scanned are dropped and reported.

use std::collections::BTreeSet;

use crate::core::store::LocaleDocument;

/// Overall classification of one reconciliation run, for the human-facing
/// summary only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No prior locale file existed.
    New,
    /// Nothing was removed and nothing is untranslated.
    Unchanged,
    /// Anything else.
    Updated,
}

/// Summary of what a reconciliation changed. Produced fresh each run and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationReport {
    pub classification: Classification,
    /// Keys present in the prior document but no longer scanned, sorted.
    pub removed: Vec<String>,
    /// Keys whose translation is null in the result, sorted. Includes both
    /// newly discovered keys and holes carried over from the prior document.
    pub untranslated: Vec<String>,
}

/// A reconciled document plus its report.
#[derive(Debug)]
pub struct Reconciliation {
    pub document: LocaleDocument,
    pub report: ReconciliationReport,
}

/// Merge `keys` against `prior`.
///
/// Translations are never generated or altered here; a key keeps exactly
/// the value it had, or gets `null`.
pub fn reconcile(prior: Option<&LocaleDocument>, keys: &BTreeSet<String>) -> Reconciliation {
    let removed: Vec<String> = prior
        .map(|doc| {
            doc.entries
                .keys()
                .filter(|key| !keys.contains(*key))
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    let mut document = LocaleDocument::default();
    let mut untranslated = Vec::new();

    for key in keys {
        let translation = prior
            .and_then(|doc| doc.entries.get(key))
            .cloned()
            .flatten();
        if translation.is_none() {
            untranslated.push(key.clone());
        }
        document.entries.insert(key.clone(), translation);
    }

    let classification = if prior.is_none() {
        Classification::New
    } else if removed.is_empty() && untranslated.is_empty() {
        Classification::Unchanged
    } else {
        Classification::Updated
    };

    Reconciliation {
        document,
        report: ReconciliationReport {
            classification,
            removed,
            untranslated,
        },
    }
}
