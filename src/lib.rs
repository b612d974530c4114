// pkgtrans - package list translator
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::ecosystem::Ecosystem;
pub use models::translation::{remove_duplicates, TranslatedPackage, TranslationEntry, TranslationRecord};
pub use services::list_translator::{translate_package_list, Translation};
pub use services::translation_index::{TranslationIndex, TranslationTable};
