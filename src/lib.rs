#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// The widgets
pub mod engine;
pub mod page;
pub mod track;

// Re-export commonly used types
pub use data::{DocumentLocations, FetchDocument, TofuDocuments, load_tofu_documents};
pub use domain::{CalendarDocument, CurrentSnapshot, ManifestDocument, Trade};
pub use engine::{SharedTofu, TofuWidget, init_tofu};
pub use track::TrackWidget;
pub use utils::app_time;

use config::{TOFU, TRACK};
use ui::{PanelDisplay, TofuDisplay};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Event calendar document (path or URL)
    #[arg(long, default_value = TOFU.data.calendar)]
    pub calendar: String,

    /// Asset manifest document (path or URL)
    #[arg(long, default_value = TOFU.data.manifest)]
    pub manifest: String,

    /// Base URL of the trade-data API
    #[arg(long, default_value = TRACK.api.base_url)]
    pub api_base: String,

    /// Do not run the mascot widget
    #[arg(long, default_value_t = false)]
    pub no_tofu: bool,

    /// Do not run the streak widget
    #[arg(long, default_value_t = false)]
    pub no_track: bool,
}

impl Cli {
    pub fn document_locations(&self) -> DocumentLocations {
        DocumentLocations {
            calendar: self.calendar.clone(),
            manifest: self.manifest.clone(),
        }
    }
}

/// Start whichever widgets are enabled on the current local executor.
///
/// The mascot is initialised in the background; its timers keep running after this returns.
/// Returns the handle of the mascot widget once it is up (None if disabled or it fell back).
pub async fn start_widgets<F, D, P>(
    args: &Cli,
    fetcher: F,
    display: D,
    panel: P,
) -> Option<SharedTofu<D>>
where
    F: FetchDocument + Clone + 'static,
    D: TofuDisplay + 'static,
    P: PanelDisplay + 'static,
{
    if args.no_track {
        log::info!("Track widget disabled");
    } else {
        let track = TrackWidget::new(fetcher.clone(), panel, args.api_base.clone());
        app_time::spawn_local(track.run());
    }

    if args.no_tofu {
        log::info!("Tofu widget disabled");
        return None;
    }
    init_tofu(&fetcher, &args.document_locations(), display).await
}

/// Browser entry: page chrome plus both widgets with their default data locations.
#[cfg(target_arch = "wasm32")]
pub fn start_browser() {
    page::dom::install();

    let args = Cli {
        calendar: TOFU.data.calendar.to_string(),
        manifest: TOFU.data.manifest.to_string(),
        api_base: TRACK.api.base_url.to_string(),
        no_tofu: false,
        no_track: false,
    };

    wasm_bindgen_futures::spawn_local(async move {
        let _ = start_widgets(
            &args,
            data::BrowserFetcher,
            ui::DomDisplay::new(),
            ui::DomPanel,
        )
        .await;
    });
}
