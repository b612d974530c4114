// Translate command implementation
// Loads the table, translates the package list and prints install commands

use std::io::{self, Write};
use std::path::PathBuf;
use serde::Serialize;
use crate::models::ecosystem::Ecosystem;
use crate::services::command_renderer::{plan_installation, render_text, InstallPlan};
use crate::services::list_translator::translate_package_list;
use crate::services::translation_index::{TranslationIndex, TranslationTable};
use crate::utils::config::{resolve_table_path, Config};
use crate::utils::error::{PkgtransError, Result};

#[derive(Debug, Clone)]
pub struct TranslateCommand {
    pub source: String,
    pub packages: String,
    pub table: Option<PathBuf>,
    pub json: bool,
    pub color: bool,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub source: Ecosystem,
    pub plans: Vec<InstallPlan>,
    pub unresolved: Vec<String>,
}

impl TranslateCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let output = self.execute(config)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Produce the full command output without printing it
    pub fn execute(&self, config: &Config) -> Result<String> {
        let source = self.parse_source()?;

        let table_path = resolve_table_path(self.table.as_deref(), config);
        let table = TranslationTable::load(&table_path)?;
        let index = TranslationIndex::build(source, &table);

        let translation = translate_package_list(&self.packages, &index);
        let plans = plan_installation(&translation);

        if self.json {
            let response = TranslateResponse {
                source,
                plans,
                unresolved: translation.unresolved,
            };
            let mut json = serde_json::to_string_pretty(&response)?;
            json.push('\n');
            Ok(json)
        } else {
            Ok(render_text(&plans, self.color))
        }
    }

    fn parse_source(&self) -> Result<Ecosystem> {
        self.source
            .parse()
            .map_err(|_| PkgtransError::UnknownEcosystem(self.source.clone()))
    }
}
