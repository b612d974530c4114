use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use crate::models::ecosystem::Ecosystem;

/// One ecosystem's view of a package inside a translation record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    /// Package name in this ecosystem
    pub name: String,
    /// Repository the package lives in (e.g. "main", "core", "extra")
    pub repo: String,
    /// Auxiliary repository membership; only meaningful for ecosystems that have one
    #[serde(rename = "AUR", default, skip_serializing_if = "Option::is_none")]
    pub aur: Option<bool>,
}

impl TranslationEntry {
    pub fn new(name: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repo: repo.into(),
            aur: None,
        }
    }

    pub fn with_aur(mut self, aur: bool) -> Self {
        self.aur = Some(aur);
        self
    }
}

/// All known names of one abstract package, keyed by ecosystem
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, TranslationEntry>")]
pub struct TranslationRecord {
    entries: BTreeMap<Ecosystem, TranslationEntry>,
}

impl TranslationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, ecosystem: Ecosystem, entry: TranslationEntry) -> Self {
        self.entries.insert(ecosystem, entry);
        self
    }

    pub fn get(&self, ecosystem: Ecosystem) -> Option<&TranslationEntry> {
        self.entries.get(&ecosystem)
    }

    /// Iterate over entries in ecosystem order
    pub fn iter(&self) -> impl Iterator<Item = (Ecosystem, &TranslationEntry)> {
        self.entries.iter().map(|(ecosystem, entry)| (*ecosystem, entry))
    }
}

impl From<BTreeMap<String, TranslationEntry>> for TranslationRecord {
    fn from(raw: BTreeMap<String, TranslationEntry>) -> Self {
        let mut entries = BTreeMap::new();
        for (key, entry) in raw {
            match Ecosystem::from_table_key(&key) {
                Some(ecosystem) => {
                    entries.insert(ecosystem, entry);
                }
                None => {
                    tracing::debug!("Ignoring unsupported ecosystem '{}' for package '{}'", key, entry.name);
                }
            }
        }
        Self { entries }
    }
}

/// A package translated into a target ecosystem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslatedPackage {
    pub name: String,
    pub repo: String,
    /// Must be installed from the auxiliary repository
    pub aur: bool,
}

impl TranslatedPackage {
    /// Build the descriptor for `target`. The auxiliary flag is dropped for
    /// ecosystems without an auxiliary repository.
    pub fn from_entry(target: Ecosystem, entry: &TranslationEntry) -> Self {
        let aur = target.supports_auxiliary_repo() && entry.aur.unwrap_or(false);
        Self {
            name: entry.name.clone(),
            repo: entry.repo.clone(),
            aur,
        }
    }
}

/// Keep the first occurrence of every package name, preserving order.
///
/// Later duplicates are dropped even if their repo or auxiliary flag differ.
pub fn remove_duplicates(packages: &[TranslatedPackage]) -> Vec<TranslatedPackage> {
    let mut seen = HashSet::with_capacity(packages.len());
    let mut unique = Vec::with_capacity(packages.len());
    for package in packages {
        if seen.insert(package.name.as_str()) {
            unique.push(package.clone());
        }
    }
    unique
}
