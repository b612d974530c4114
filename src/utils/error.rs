// Common error types for pkgtrans

use std::path::PathBuf;
use thiserror::Error;
use crate::models::ecosystem::Ecosystem;

#[derive(Debug, Error)]
pub enum PkgtransError {
    #[error("Failed to read translation table {}: {source}", .path.display())]
    TableRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in translation table {}: {source}", .path.display())]
    TableLoad {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported source ecosystem '{0}'")]
    UnknownEcosystem(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PkgtransError>;

/// Process exit codes (sysexits.h values)
pub mod exit_codes {
    pub const UNKNOWN_ECOSYSTEM: i32 = 64;
    pub const TABLE_ERROR: i32 = 65;
    pub const INTERNAL_ERROR: i32 = 70;
    pub const IO_ERROR: i32 = 74;
    pub const CONFIG_ERROR: i32 = 78;
}

/// User-facing rendition of a [`PkgtransError`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub suggestion: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_pkgtrans_error(err: &PkgtransError) -> Self {
        match err {
            PkgtransError::TableRead { path, .. } => Self {
                message: err.to_string(),
                suggestion: Some(format!(
                    "Install translations.json next to the pkgtrans executable ({}), or point --table / PKGTRANS_TABLE at a translation table",
                    path.display()
                )),
                exit_code: exit_codes::TABLE_ERROR,
            },
            PkgtransError::TableLoad { .. } => Self {
                message: err.to_string(),
                suggestion: Some("The table must be a JSON array of translation records".to_string()),
                exit_code: exit_codes::TABLE_ERROR,
            },
            PkgtransError::UnknownEcosystem(_) => {
                let supported: Vec<&str> = Ecosystem::all().iter().map(Ecosystem::as_str).collect();
                Self {
                    message: err.to_string(),
                    suggestion: Some(format!("Supported ecosystems: {}", supported.join(", "))),
                    exit_code: exit_codes::UNKNOWN_ECOSYSTEM,
                }
            }
            PkgtransError::ConfigError(_) => Self {
                message: err.to_string(),
                suggestion: None,
                exit_code: exit_codes::CONFIG_ERROR,
            },
            PkgtransError::IoError(_) => Self {
                message: err.to_string(),
                suggestion: None,
                exit_code: exit_codes::IO_ERROR,
            },
            PkgtransError::SerializationError(_) => Self {
                message: err.to_string(),
                suggestion: None,
                exit_code: exit_codes::INTERNAL_ERROR,
            },
        }
    }

    /// Print to stderr
    pub fn print(&self) {
        eprintln!("[x] {}", self.message);
        if let Some(suggestion) = &self.suggestion {
            eprintln!("    {suggestion}");
        }
    }
}
