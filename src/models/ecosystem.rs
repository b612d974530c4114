use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration of supported packaging ecosystems
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    /// Ubuntu / Debian (apt)
    Ubuntu,
    /// Arch Linux (pacman, with the AUR as auxiliary repository)
    ArchLinux,
    /// Nix package manager
    Nix,
}

impl Ecosystem {
    /// Returns the install command prefix for this ecosystem
    pub fn install_command(&self) -> &'static str {
        match self {
            Ecosystem::Ubuntu => "apt install",
            Ecosystem::ArchLinux => "pacman -S",
            Ecosystem::Nix => "nix-env -i",
        }
    }

    /// Returns the install command prefix for the auxiliary repository, if
    /// this ecosystem has one
    pub fn auxiliary_install_command(&self) -> Option<&'static str> {
        match self {
            Ecosystem::ArchLinux => Some("yay -S"),
            Ecosystem::Ubuntu | Ecosystem::Nix => None,
        }
    }

    pub fn supports_auxiliary_repo(&self) -> bool {
        self.auxiliary_install_command().is_some()
    }

    /// Canonical identifier used on the command line and in the table
    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Ubuntu => "ubuntu",
            Ecosystem::ArchLinux => "archlinux",
            Ecosystem::Nix => "nix",
        }
    }

    /// Exact match on the canonical identifier, as used for translation table keys
    pub fn from_table_key(key: &str) -> Option<Ecosystem> {
        Self::all().iter().copied().find(|ecosystem| ecosystem.as_str() == key)
    }

    /// Returns all supported ecosystems
    pub fn all() -> &'static [Ecosystem] {
        &[Ecosystem::Ubuntu, Ecosystem::ArchLinux, Ecosystem::Nix]
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Ecosystem {
    type Err = EcosystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ubuntu" => Ok(Ecosystem::Ubuntu),
            "archlinux" | "arch" => Ok(Ecosystem::ArchLinux),
            "nix" | "nixos" => Ok(Ecosystem::Nix),
            _ => Err(EcosystemError::Unknown(s.to_string())),
        }
    }
}

/// Errors that can occur when working with ecosystems
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EcosystemError {
    #[error("Unknown ecosystem: {0}")]
    Unknown(String),
}
