//! Asset-catalog download: one `contents.js` manifest plus the images it
//! lists.

use std::path::Path;

use serde::Deserialize;

use xcforge_util::errors::XcforgeError;
use xcforge_util::progress::status_err;

use crate::fetch::{FetchOutcome, ResourceFetcher};

#[derive(Debug, Deserialize)]
struct CatalogManifest {
    #[serde(default)]
    images: Vec<CatalogImage>,
}

#[derive(Debug, Deserialize)]
struct CatalogImage {
    filename: String,
}

/// Aggregated result of one catalog fetch.
#[derive(Debug, Default)]
pub struct CatalogReport {
    /// File names written into the destination directory, `Contents.json`
    /// included.
    pub written: Vec<String>,
    /// One reason per resource that could not be fetched.
    pub failures: Vec<String>,
}

impl CatalogReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fetch `{base_url}/{asset_name}/contents.js` and every image it lists
/// into `dest_dir`.
///
/// The manifest body is persisted as `Contents.json`. Each image is fetched
/// from `{base_url}/{asset_name}/{filename-without-extension}` and written
/// under its manifest `filename`; a failed image is recorded and skipped,
/// leaving a partial catalog. When the manifest itself cannot be fetched no
/// image files are created — the absence of `Contents.json` marks the
/// catalog incomplete.
pub async fn fetch_catalog<F: ResourceFetcher>(
    fetcher: &F,
    dest_dir: &Path,
    base_url: &str,
    asset_name: &str,
    quiet: bool,
) -> miette::Result<CatalogReport> {
    let mut report = CatalogReport::default();

    let contents_url = format!("{base_url}/{asset_name}/contents.js");
    let body = match fetcher.fetch(&contents_url).await {
        FetchOutcome::Success(bytes) => bytes,
        FetchOutcome::Failure(reason) => {
            report
                .failures
                .push(format!("{asset_name}/Contents.json: {reason}"));
            if !quiet {
                status_err(
                    "Failed",
                    &format!("downloading Contents.json for {asset_name}"),
                );
            }
            return Ok(report);
        }
    };

    std::fs::write(dest_dir.join("Contents.json"), &body).map_err(XcforgeError::Io)?;
    report.written.push("Contents.json".to_string());

    let manifest: CatalogManifest =
        serde_json::from_slice(&body).map_err(|e| XcforgeError::Manifest {
            message: format!("{contents_url}: {e}"),
        })?;

    for image in &manifest.images {
        let image_url = format!("{base_url}/{asset_name}/{}", stem(&image.filename));
        match fetcher.fetch(&image_url).await {
            FetchOutcome::Success(bytes) => {
                std::fs::write(dest_dir.join(&image.filename), bytes)
                    .map_err(XcforgeError::Io)?;
                report.written.push(image.filename.clone());
            }
            FetchOutcome::Failure(reason) => {
                report
                    .failures
                    .push(format!("{}: {reason}", image.filename));
                if !quiet {
                    status_err("Failed", &format!("downloading image {}", image.filename));
                }
            }
        }
    }

    Ok(report)
}

/// Strip the last extension: `icon@2x.png` -> `icon@2x`.
fn stem(filename: &str) -> &str {
    filename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(filename)
}
