use std::fmt;

/// One binary variant published with every release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: &'static str,
    pub arch: &'static str,
}

/// Every variant a formula carries, in the order they are processed and reported.
pub const PLATFORMS: [Platform; 4] = [
    Platform { os: "darwin", arch: "arm64" },
    Platform { os: "darwin", arch: "amd64" },
    Platform { os: "linux", arch: "arm64" },
    Platform { os: "linux", arch: "amd64" },
];

impl Platform {
    pub fn binary_name(&self, repo: &str) -> String {
        format!("{}-{}-{}", repo, self.os, self.arch)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
