use anyhow::{Context, Result};

use crate::config::TOFU;
use crate::data::fetch::{FetchDocument, fetch_json};
use crate::domain::{CalendarDocument, ManifestDocument};
use crate::utils::app_time::now;

/// Where the two mascot documents live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLocations {
    pub calendar: String,
    pub manifest: String,
}

impl Default for DocumentLocations {
    fn default() -> Self {
        Self {
            calendar: TOFU.data.calendar.to_string(),
            manifest: TOFU.data.manifest.to_string(),
        }
    }
}

/// Both documents, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct TofuDocuments {
    pub calendar: CalendarDocument,
    pub manifest: ManifestDocument,
}

/// Request the calendar and the manifest concurrently. Either failing fails the load.
pub async fn load_tofu_documents<F>(fetcher: &F, locations: &DocumentLocations) -> Result<TofuDocuments>
where
    F: FetchDocument + ?Sized,
{
    let started = now();

    let (calendar, manifest) = futures::try_join!(
        async {
            fetch_json::<CalendarDocument, F>(fetcher, &locations.calendar)
                .await
                .context("Failed to load event calendar")
        },
        async {
            fetch_json::<ManifestDocument, F>(fetcher, &locations.manifest)
                .await
                .context("Failed to load asset manifest")
        },
    )?;

    if manifest.gifs.is_empty() {
        log::warn!("Asset manifest at {} lists no assets", locations.manifest);
    }

    log::debug!(
        "Loaded tofu documents via {} in {:?}",
        fetcher.signature(),
        started.elapsed()
    );

    Ok(TofuDocuments { calendar, manifest })
}
