use crate::formula::{current_version, extract_checksum};
use crate::platform::{PLATFORMS, Platform};
use crate::release::ReleaseSource;
use crate::style;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumChange {
    pub platform: Platform,
    pub old: Option<String>,
    pub new: Option<String>,
}

/// Before/after view of a rewrite. Observational only.
#[derive(Debug, Clone)]
pub struct ChangeReport {
    pub file: PathBuf,
    pub old_version: Option<String>,
    pub new_version: String,
    pub checksums: Vec<ChecksumChange>,
}

impl ChangeReport {
    /// Old values come from `original` through the any-version URL, new values
    /// from `updated` through the URL of `version`.
    pub fn build(
        file: PathBuf,
        source: &ReleaseSource,
        version: &str,
        original: &str,
        updated: &str,
    ) -> Result<Self> {
        let mut checksums = Vec::with_capacity(PLATFORMS.len());
        for platform in PLATFORMS {
            checksums.push(ChecksumChange {
                platform,
                old: extract_checksum(original, &source.url_pattern(&platform))?,
                new: extract_checksum(updated, &source.exact_url_pattern(version, &platform))?,
            });
        }

        Ok(Self {
            file,
            old_version: current_version(original).map(str::to_string),
            new_version: version.to_string(),
            checksums,
        })
    }

    pub fn print(&self) {
        println!("Changes to {}:", style::location(&self.file.display().to_string()));
        println!(
            "Version: {}",
            style::transition(self.old_version.as_deref(), &self.new_version)
        );

        for change in &self.checksums {
            let new = change.new.as_deref().unwrap_or("");
            println!(
                "Checksum ({}): {}",
                change.platform,
                style::transition(change.old.as_deref(), new)
            );
            if new.is_empty() {
                println!(
                    "  {} {}",
                    style::ALERT,
                    style::notice("no url/sha256 block found for this platform")
                );
            }
        }
    }
}
