use chrono::{Local, NaiveDateTime};
use itertools::Itertools;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;

#[cfg(debug_assertions)]
use crate::config::{PRINT_POOL_BUILDS, PRINT_ROTATION_TICKS};
use crate::config::TOFU;
use crate::data::{DocumentLocations, FetchDocument, TofuDocuments, load_tofu_documents};
use crate::ui::TofuDisplay;

use super::context::Context;
use super::pool::{match_assets, select_pool};
use super::scheduler::{self, ScheduleTimings};
use super::state::RotationState;

/// The mascot widget handle shared by its timers. Single-threaded by design.
pub type SharedTofu<D> = Rc<RefCell<TofuWidget<D>>>;

/// One mascot widget: its documents, its rotation state and where it paints.
pub struct TofuWidget<D: TofuDisplay> {
    /// Loaded once, read-only afterwards
    documents: TofuDocuments,
    rotation: RotationState,
    /// Context of the last pool build
    context: Option<Context>,
    display: D,
    rng: StdRng,
}

impl<D: TofuDisplay> TofuWidget<D> {
    pub fn new(documents: TofuDocuments, display: D) -> Self {
        Self::with_rng(documents, display, StdRng::from_os_rng())
    }

    pub fn with_rng(documents: TofuDocuments, display: D, rng: StdRng) -> Self {
        Self {
            documents,
            rotation: RotationState::new(),
            context: None,
            display,
            rng,
        }
    }

    /// Rebuild the pool for the current local time.
    pub fn build_pool(&mut self) -> &Context {
        self.build_pool_at(Local::now().naive_local())
    }

    /// Resolve the context at `now`, pick a fresh pool and refresh the status text.
    pub fn build_pool_at(&mut self, now: NaiveDateTime) -> &Context {
        let context = Context::resolve(&self.documents.calendar, &now);
        let manifest = &self.documents.manifest;

        let candidates = match_assets(manifest, &context);
        let pool = select_pool(
            candidates,
            manifest.config.effective_pool_size(),
            &self.rotation.shown,
            &mut self.rng,
        );
        self.rotation.install_pool(pool, manifest.gifs.len());

        let line = context.status_line(&self.documents.calendar);
        self.display.show_status(&line);

        #[cfg(debug_assertions)]
        if PRINT_POOL_BUILDS {
            log::info!(
                "Pool built: [{}] Context: {} / {} / {}",
                self.rotation.current_pool.iter().map(|a| a.file.as_str()).join(", "),
                context.time,
                context.mood,
                context.event.as_ref().map(|e| e.name.as_str()).unwrap_or("no event"),
            );
        }

        self.context.insert(context)
    }

    /// Show the next asset of the pool. A no-op while the pool is empty.
    pub fn rotate(&mut self) {
        let Some(asset) = self.rotation.advance() else {
            return;
        };
        let src = self.documents.manifest.config.asset_path(asset);

        #[cfg(debug_assertions)]
        if PRINT_ROTATION_TICKS {
            log::info!("Rotate -> {} (next index {})", src, self.rotation.pool_index);
        }

        self.display.show_image(&src, TOFU.fallback.image);
    }

    pub fn documents(&self) -> &TofuDocuments {
        &self.documents
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}

/// Load the documents and start the widget.
///
/// On success the first pool is built, the first asset shown and all timers started.
/// On failure the static fallback is shown once and nothing is scheduled.
pub async fn init_tofu<F, D>(
    fetcher: &F,
    locations: &DocumentLocations,
    mut display: D,
) -> Option<SharedTofu<D>>
where
    F: FetchDocument + ?Sized,
    D: TofuDisplay + 'static,
{
    let documents = match load_tofu_documents(fetcher, locations).await {
        Ok(documents) => documents,
        Err(e) => {
            log::error!("Tofu widget: failed to load data: {:#}", e);
            display.show_fallback(TOFU.fallback.image, TOFU.fallback.status);
            return None;
        }
    };

    log::info!(
        "Tofu widget initialized: {} gifs, {} events",
        documents.manifest.gifs.len(),
        documents.calendar.events.len()
    );

    let timings = ScheduleTimings::for_manifest(&documents.manifest.config, &Local::now());

    let mut widget = TofuWidget::new(documents, display);
    widget.build_pool();
    widget.rotate();

    let shared = Rc::new(RefCell::new(widget));
    scheduler::start(&shared, timings);
    Some(shared)
}
