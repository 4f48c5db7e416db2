use crate::{
    config::Config,
    download::Downloader,
    formula::Formula,
    platform::{PLATFORMS, Platform},
    release::ReleaseSource,
    report::ChangeReport,
    style,
};
use anyhow::{Context, Result};
use futures::future::try_join_all;
use tracing::info;

pub struct UpdateOutcome {
    pub report: ChangeReport,
    pub updated: String,
    pub written: bool,
}

/// Rewrite the formula named by `config` for a new release.
///
/// The file is only touched as the very last step, after every download has
/// succeeded; with `dry_run` it is never touched.
pub async fn update_formula(config: Config, downloader: &impl Downloader) -> Result<UpdateOutcome> {
    config.validate()?;

    let content = tokio::fs::read_to_string(&config.file)
        .await
        .context("failed to read formula file")?;
    let mut formula = Formula::new(content);

    let source = config.release();
    let checksums = fetch_checksums(&source, &config.version, downloader).await?;

    formula.set_version(&config.version);
    for (platform, checksum) in &checksums {
        formula.set_release(&source, &config.version, platform, checksum)?;
    }

    let report = ChangeReport::build(
        config.file.clone(),
        &source,
        &config.version,
        formula.original(),
        formula.text(),
    )?;
    report.print();

    let updated = formula.into_text();

    if config.dry_run {
        println!("{}", style::notice("Dry-run mode: No changes written to file"));
        println!("Updated content preview:");
        println!("{}", updated);
        return Ok(UpdateOutcome {
            report,
            updated,
            written: false,
        });
    }

    tokio::fs::write(&config.file, &updated)
        .await
        .context("failed to write updated formula file")?;

    println!(
        "{} Successfully updated {}",
        style::DONE,
        style::location(&config.file.display().to_string())
    );

    Ok(UpdateOutcome {
        report,
        updated,
        written: true,
    })
}

/// Download every platform binary concurrently, keeping results in platform order.
async fn fetch_checksums(
    source: &ReleaseSource,
    version: &str,
    downloader: &impl Downloader,
) -> Result<Vec<(Platform, String)>> {
    let fetches = PLATFORMS.iter().map(|platform| async move {
        let url = source.download_url(version, platform);
        println!("{} Fetching {}", style::FETCH, style::location(&url));

        let checksum = downloader
            .sha256(&url)
            .await
            .with_context(|| {
                format!(
                    "failed to calculate checksum for {}",
                    source.binary_name(platform)
                )
            })?;

        info!(%platform, %checksum, "checksum computed");
        Ok::<_, anyhow::Error>((*platform, checksum))
    });

    try_join_all(fetches).await
}
