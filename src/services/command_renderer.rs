use std::fmt::Write as _;
use nu_ansi_term::Color;
use serde::Serialize;
use crate::models::{
    ecosystem::Ecosystem,
    translation::TranslatedPackage,
};
use crate::services::list_translator::Translation;

/// Shell commands that install the translated packages for one ecosystem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallPlan {
    pub ecosystem: Ecosystem,
    /// Command for packages from the official repositories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Command for packages from the auxiliary repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary_command: Option<String>,
}

impl InstallPlan {
    pub fn new(ecosystem: Ecosystem, packages: &[TranslatedPackage]) -> Self {
        let (auxiliary, official): (Vec<&TranslatedPackage>, Vec<&TranslatedPackage>) =
            packages.iter().partition(|package| package.aur);

        let command = (!official.is_empty())
            .then(|| build_command(ecosystem.install_command(), &official));
        let auxiliary_command = ecosystem
            .auxiliary_install_command()
            .filter(|_| !auxiliary.is_empty())
            .map(|prefix| build_command(prefix, &auxiliary));

        Self {
            ecosystem,
            command,
            auxiliary_command,
        }
    }

    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.command.iter().chain(self.auxiliary_command.iter()).map(String::as_str)
    }
}

fn build_command(prefix: &str, packages: &[&TranslatedPackage]) -> String {
    let mut command = prefix.to_string();
    for package in packages {
        command.push(' ');
        command.push_str(&package.name);
    }
    command
}

/// One plan per target ecosystem that received at least one package
pub fn plan_installation(translation: &Translation) -> Vec<InstallPlan> {
    translation
        .packages
        .iter()
        .filter(|(_, packages)| !packages.is_empty())
        .map(|(ecosystem, packages)| InstallPlan::new(*ecosystem, packages))
        .collect()
}

/// Render plans as the human readable command listing
pub fn render_text(plans: &[InstallPlan], color: bool) -> String {
    let mut output = String::new();
    for plan in plans {
        let _ = writeln!(
            output,
            "====== Command for {} ======\n",
            plan.ecosystem.as_str().to_uppercase()
        );
        for command in plan.commands() {
            let line = format!(" # {command}");
            if color {
                let _ = writeln!(output, "{}", Color::Blue.paint(line));
            } else {
                let _ = writeln!(output, "{line}");
            }
        }
        output.push('\n');
    }
    output
}
