//! Pattern-based rewriting of a Homebrew formula.
//!
//! Only two constructs are touched: the `version "..."` declaration and the
//! per-platform `url ..., :using => :nounzip` / `sha256 "..."` pairs. Every
//! other byte of the file passes through unchanged. A construct that cannot be
//! found leaves the text as it is.

use crate::platform::Platform;
use crate::release::ReleaseSource;
use anyhow::Result;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, warn};

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"version\s+"(v\d+\.\d+\.\d+)""#).expect("version pattern is valid")
});

const NOUNZIP: &str = r",\s*:using\s*=>\s*:nounzip";

fn url_entry_regex(url_pattern: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(r#"url "{url_pattern}"{NOUNZIP}"#))?)
}

// Group 1 is everything up to the opening quote of the digest, group 2 the digest.
fn checksum_regex(url_pattern: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(
        r#"(url "{url_pattern}"{NOUNZIP}\n\s*sha256 ")([0-9a-f]{{64}})""#
    ))?)
}

/// Version declared by the formula, if any.
pub fn current_version(text: &str) -> Option<&str> {
    VERSION_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Checksum recorded right after the URL entry matching `url_pattern`.
pub fn extract_checksum(text: &str, url_pattern: &str) -> Result<Option<String>> {
    let re = checksum_regex(url_pattern)?;
    Ok(re
        .captures(text)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().to_string()))
}

/// A formula held in memory while it is being rewritten.
#[derive(Debug, Clone)]
pub struct Formula {
    original: String,
    text: String,
}

impl Formula {
    pub fn new(content: String) -> Self {
        Self {
            original: content.clone(),
            text: content,
        }
    }

    /// Content as it was read, before any rewrite.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Replace the first version declaration. Returns false when there is none.
    pub fn set_version(&mut self, version: &str) -> bool {
        let Some(range) = VERSION_RE.find(&self.text).map(|m| m.range()) else {
            warn!("no version declaration found; version left unchanged");
            return false;
        };

        self.text
            .replace_range(range, &format!(r#"version "{version}""#));
        debug!(version, "rewrote version declaration");
        true
    }

    /// Point one platform's URL entry at `version` and record its new checksum.
    ///
    /// The checksum is located through the already rewritten URL, so the URL
    /// must be replaced first.
    pub fn set_release(
        &mut self,
        source: &ReleaseSource,
        version: &str,
        platform: &Platform,
        checksum: &str,
    ) -> Result<()> {
        let new_url = source.download_url(version, platform);

        let url_re = url_entry_regex(&source.url_pattern(platform))?;
        let url_found = url_re.is_match(&self.text);
        self.text = url_re
            .replace_all(&self.text, |_: &Captures| {
                format!(r#"url "{new_url}", :using => :nounzip"#)
            })
            .into_owned();

        // Runs even without an old-style entry: a rerun with a tag outside
        // `v<N>.<N>.<N>` only finds the entry through its current URL.
        let sum_re = checksum_regex(&source.exact_url_pattern(version, platform))?;
        if !sum_re.is_match(&self.text) {
            if url_found {
                warn!(binary = %source.binary_name(platform), "no sha256 after url entry; left unchanged");
            } else {
                warn!(binary = %source.binary_name(platform), "no url entry found; left unchanged");
            }
            return Ok(());
        }
        self.text = sum_re
            .replace_all(&self.text, |caps: &Captures| {
                format!("{}{}\"", &caps[1], checksum)
            })
            .into_owned();

        debug!(%platform, url = %new_url, checksum, "rewrote release entry");
        Ok(())
    }
}
