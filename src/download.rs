use crate::error::UpdateError;
use anyhow::Result;
use futures::StreamExt;
use sha2::{Digest, Sha256};
use tracing::debug;

/// Lowercase hex SHA-256 of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// Trait for fetching a release binary's checksum - allows mocking in tests
#[allow(async_fn_in_trait)]
pub trait Downloader {
    async fn sha256(&self, url: &str) -> Result<String>;
}

/// Real downloader that fetches binaries over HTTP
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: reqwest::Client,
}

impl HttpDownloader {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("brewup/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Downloader for HttpDownloader {
    async fn sha256(&self, url: &str) -> Result<String> {
        debug!(url, "downloading");
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(UpdateError::DownloadStatus {
                url: url.to_string(),
                status: response.status(),
            }
            .into());
        }

        let mut hasher = Sha256::new();
        let mut stream = response.bytes_stream();
        let mut size: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            size += chunk.len() as u64;
            hasher.update(&chunk);
        }

        let checksum = format!("{:x}", hasher.finalize());
        debug!(url, size, %checksum, "download hashed");
        Ok(checksum)
    }
}

/// Mock downloader for testing
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    pub struct MockDownloader {
        bodies: Mutex<HashMap<String, Vec<u8>>>,
        requests: Mutex<Vec<String>>,
    }

    impl MockDownloader {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn serve(&self, url: &str, body: &[u8]) {
            let mut bodies = self.bodies.lock().unwrap();
            bodies.insert(url.to_string(), body.to_vec());
        }

        /// Every URL requested so far, in request order.
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Downloader for MockDownloader {
        async fn sha256(&self, url: &str) -> Result<String> {
            self.requests.lock().unwrap().push(url.to_string());

            let bodies = self.bodies.lock().unwrap();
            let body = bodies
                .get(url)
                .ok_or_else(|| anyhow::anyhow!("Unexpected download: {}", url))?;

            Ok(sha256_hex(body))
        }
    }
}
