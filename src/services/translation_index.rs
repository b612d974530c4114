use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use crate::models::{
    ecosystem::Ecosystem,
    translation::TranslationRecord,
};
use crate::utils::error::{PkgtransError, Result};

/// The static translation table, one record per abstract package
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    records: Vec<TranslationRecord>,
}

impl TranslationTable {
    pub fn new(records: Vec<TranslationRecord>) -> Self {
        Self { records }
    }

    /// Read and parse a translation table from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading translation table from {}", path.display());

        let file = File::open(path).map_err(|source| PkgtransError::TableRead {
            path: path.to_path_buf(),
            source,
        })?;

        let records: Vec<TranslationRecord> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| {
                if source.is_io() {
                    tracing::error!("Could not read \"{}\"", path.display());
                } else {
                    tracing::error!("Invalid JSON in \"{}\"", path.display());
                }
                PkgtransError::TableLoad {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        tracing::debug!("Loaded {} translation records", records.len());
        Ok(Self { records })
    }

    /// Parse a translation table from an in-memory JSON document
    pub fn from_json(content: &str) -> Result<Self> {
        let records = serde_json::from_str(content).map_err(|source| PkgtransError::TableLoad {
            path: "<inline>".into(),
            source,
        })?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[TranslationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Translation records keyed by their package name in the source ecosystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationIndex {
    source: Ecosystem,
    records: HashMap<String, TranslationRecord>,
}

impl TranslationIndex {
    /// Re-key `table` by the `source` ecosystem's package names.
    ///
    /// Records without a `source` entry are skipped. When two records share a
    /// source name, the later one wins.
    pub fn build(source: Ecosystem, table: &TranslationTable) -> Self {
        tracing::debug!("Building translation index for {}...", source);

        let mut records = HashMap::with_capacity(table.len());
        for (position, record) in table.records().iter().enumerate() {
            let Some(entry) = record.get(source) else {
                tracing::warn!(
                    "Translation record #{} has no '{}' entry. Skipping.",
                    position,
                    source
                );
                continue;
            };

            if records.insert(entry.name.clone(), record.clone()).is_some() {
                tracing::warn!(
                    "Duplicate translation for {} package '{}' (record #{} replaces an earlier one)",
                    source,
                    entry.name,
                    position
                );
            }
        }

        tracing::debug!("Translation index built ({} packages).", records.len());
        Self { source, records }
    }

    pub fn source(&self) -> Ecosystem {
        self.source
    }

    pub fn get(&self, package: &str) -> Option<&TranslationRecord> {
        self.records.get(package)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
