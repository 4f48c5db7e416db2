use anyhow::Result;
use brewup::download::{Downloader, HttpDownloader, sha256_hex};
use brewup::error::UpdateError;
use mockito::Server;

#[tokio::test]
async fn test_checksum_matches_served_bytes() -> Result<()> {
    let mut server = Server::new_async().await;
    let body: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();

    let _m = server
        .mock("GET", "/interlynk-io/sbomasm/releases/download/v1.0.4/sbomasm-linux-amd64")
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(&body)
        .create_async()
        .await;

    let downloader = HttpDownloader::new()?;
    let url = format!(
        "{}/interlynk-io/sbomasm/releases/download/v1.0.4/sbomasm-linux-amd64",
        server.url()
    );
    let checksum = downloader.sha256(&url).await?;

    assert_eq!(checksum, sha256_hex(&body));
    assert_eq!(checksum.len(), 64);
    assert!(checksum.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));

    Ok(())
}

#[tokio::test]
async fn test_redirect_is_followed() -> Result<()> {
    let mut server = Server::new_async().await;
    let asset = format!("{}/objects/sbomasm-darwin-arm64", server.url());

    let _redirect = server
        .mock("GET", "/interlynk-io/sbomasm/releases/download/v1.0.4/sbomasm-darwin-arm64")
        .with_status(302)
        .with_header("location", &asset)
        .create_async()
        .await;
    let _asset = server
        .mock("GET", "/objects/sbomasm-darwin-arm64")
        .with_status(200)
        .with_body("darwin arm64 build")
        .create_async()
        .await;

    let downloader = HttpDownloader::new()?;
    let url = format!(
        "{}/interlynk-io/sbomasm/releases/download/v1.0.4/sbomasm-darwin-arm64",
        server.url()
    );

    assert_eq!(downloader.sha256(&url).await?, sha256_hex(b"darwin arm64 build"));
    Ok(())
}

#[tokio::test]
async fn test_not_found_is_a_download_error() -> Result<()> {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/interlynk-io/sbomasm/releases/download/v9.9.9/sbomasm-linux-arm64")
        .with_status(404)
        .create_async()
        .await;

    let downloader = HttpDownloader::new()?;
    let url = format!(
        "{}/interlynk-io/sbomasm/releases/download/v9.9.9/sbomasm-linux-arm64",
        server.url()
    );
    let err = downloader
        .sha256(&url)
        .await
        .expect_err("404 must not produce a checksum");

    match err.downcast_ref::<UpdateError>() {
        Some(UpdateError::DownloadStatus { url: failed, status }) => {
            assert_eq!(failed, &url);
            assert_eq!(status.as_u16(), 404);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    Ok(())
}
