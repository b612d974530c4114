use std::collections::BTreeMap;
use serde::Serialize;
use crate::models::{
    ecosystem::Ecosystem,
    translation::{remove_duplicates, TranslatedPackage},
};
use crate::services::translation_index::TranslationIndex;

/// Result of translating one package list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// Translated packages per target ecosystem, in first-seen order
    pub packages: BTreeMap<Ecosystem, Vec<TranslatedPackage>>,
    /// Source packages with no known translation, in input order
    pub unresolved: Vec<String>,
}

impl Translation {
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn packages_for(&self, ecosystem: Ecosystem) -> &[TranslatedPackage] {
        self.packages.get(&ecosystem).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Translate a whitespace separated package list using `index`.
///
/// Unknown packages are logged and recorded in [`Translation::unresolved`].
/// The source ecosystem itself never appears among the targets.
pub fn translate_package_list(package_list: &str, index: &TranslationIndex) -> Translation {
    let source = index.source();
    let mut translation = Translation::default();

    for package in package_list.split_whitespace() {
        tracing::debug!("Translating {}", package);

        let Some(record) = index.get(package) else {
            tracing::warn!("No known translation for package '{}'. Skipping.", package);
            translation.unresolved.push(package.to_string());
            continue;
        };

        for (target, entry) in record.iter().filter(|(target, _)| *target != source) {
            translation
                .packages
                .entry(target)
                .or_default()
                .push(TranslatedPackage::from_entry(target, entry));
        }
    }

    for packages in translation.packages.values_mut() {
        *packages = remove_duplicates(packages);
    }

    translation
}
