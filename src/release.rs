use crate::platform::Platform;

/// Matches any `v<major>.<minor>.<patch>` tag inside a release URL.
pub const VERSION_TAG: &str = r"v\d+\.\d+\.\d+";

/// Where the release binaries of one repository are published.
#[derive(Debug, Clone)]
pub struct ReleaseSource {
    pub download_base: String,
    pub org: String,
    pub repo: String,
}

impl ReleaseSource {
    pub fn new(download_base: &str, org: &str, repo: &str) -> Self {
        Self {
            download_base: download_base.trim_end_matches('/').to_string(),
            org: org.to_string(),
            repo: repo.to_string(),
        }
    }

    pub fn binary_name(&self, platform: &Platform) -> String {
        platform.binary_name(&self.repo)
    }

    pub fn download_url(&self, version: &str, platform: &Platform) -> String {
        format!(
            "{}/{}/{}/releases/download/{}/{}",
            self.download_base,
            self.org,
            self.repo,
            version,
            self.binary_name(platform)
        )
    }

    /// Regex source matching this platform's download URL at any release version.
    pub fn url_pattern(&self, platform: &Platform) -> String {
        format!(
            "{}/{}/{}/releases/download/{}/{}",
            regex::escape(&self.download_base),
            regex::escape(&self.org),
            regex::escape(&self.repo),
            VERSION_TAG,
            regex::escape(&self.binary_name(platform))
        )
    }

    /// Regex source matching exactly the download URL of `version`.
    pub fn exact_url_pattern(&self, version: &str, platform: &Platform) -> String {
        regex::escape(&self.download_url(version, platform))
    }
}
