//! Polling loop for the streak panel.

#[cfg(debug_assertions)]
use crate::config::PRINT_TRACK_RENDERS;
use crate::config::TRACK;
use crate::data::{FetchDocument, fetch_json};
use crate::domain::{CurrentSnapshot, Trade, TradesResponse};
use crate::ui::PanelDisplay;
use crate::utils::app_time::sleep_ms;

use super::render::render;
#[cfg(debug_assertions)]
use super::streak::calculate_streak;

pub struct TrackWidget<F, P> {
    fetcher: F,
    panel: P,
    api_base: String,
}

impl<F: FetchDocument, P: PanelDisplay> TrackWidget<F, P> {
    pub fn new(fetcher: F, panel: P, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self {
            fetcher,
            panel,
            api_base,
        }
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Trade history. Any failure yields an empty history.
    pub async fn fetch_trades(&self) -> Vec<Trade> {
        let url = self.endpoint(TRACK.api.trades_path);
        match fetch_json::<TradesResponse, _>(&self.fetcher, &url).await {
            Ok(response) => response.trades,
            Err(e) => {
                log::error!("Track widget: failed to fetch trades: {:#}", e);
                Vec::new()
            }
        }
    }

    /// The live snapshot. Any failure (or a `null` body) yields `None`.
    pub async fn fetch_current(&self) -> Option<CurrentSnapshot> {
        let url = self.endpoint(TRACK.api.current_path);
        match fetch_json::<Option<CurrentSnapshot>, _>(&self.fetcher, &url).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::error!("Track widget: failed to fetch current: {:#}", e);
                None
            }
        }
    }

    /// One poll: both endpoints concurrently, then a full repaint.
    pub async fn fetch_and_render(&mut self) {
        let (trades, current) = futures::join!(self.fetch_trades(), self.fetch_current());
        let html = render(&trades, current.as_ref());
        self.panel.set_html(&html);

        #[cfg(debug_assertions)]
        if PRINT_TRACK_RENDERS {
            log::info!(
                "Track widget: rendered (streak {}, trades {})",
                calculate_streak(&trades).len(),
                trades.len()
            );
        }
    }

    /// Poll now, then every `update_interval_ms`, forever.
    pub async fn run(mut self) {
        log::info!("Track widget: polling {} every {} ms", self.api_base, TRACK.update_interval_ms);
        loop {
            self.fetch_and_render().await;
            sleep_ms(TRACK.update_interval_ms).await;
        }
    }
}
