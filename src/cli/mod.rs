// CLI module for command-line interface

pub mod translate;

use std::path::PathBuf;
use clap::Parser;

use self::translate::TranslateCommand;

/// Main CLI structure
#[derive(Debug, Parser)]
#[command(name = "pkgtrans")]
#[command(about = "Translate package names between Linux distribution ecosystems")]
#[command(long_about = r#"Translate a list of package names from one packaging ecosystem into the
equivalent names of the other supported ecosystems, and print ready-to-run
installation commands for each of them.

Supported ecosystems: ubuntu, archlinux, nix

Examples:
  pkgtrans ubuntu "build-essential libyaml-dev"   Translate an apt package list
  pkgtrans archlinux "base-devel" --json          Machine-readable output
  pkgtrans nix "gnumake curl" -v                  Show translation diagnostics"#)]
#[command(version)]
pub struct Cli {
    /// Ecosystem the package list comes from
    #[arg(value_name = "ubuntu|archlinux|nix")]
    pub source: String,

    /// Space separated list of packages, e.g. "make build-essential libyaml-dev"
    #[arg(value_name = "package-list")]
    pub packages: String,

    /// Enable verbose messages
    #[arg(short, long)]
    pub verbose: bool,

    /// Translation table to use instead of the bundled one
    #[arg(long, env = "PKGTRANS_TABLE", value_name = "PATH")]
    pub table: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn into_command(self) -> TranslateCommand {
        TranslateCommand {
            source: self.source,
            packages: self.packages,
            table: self.table,
            json: self.json,
            color: !self.no_color,
        }
    }
}
