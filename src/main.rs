#[cfg(not(target_arch = "wasm32"))]
use bearhedge_widgets::Cli;

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Even though we use 'start', the compiler still wants a main() function
// because this file is compiled as a binary.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    // A. Init Logging
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("🐻 Bear Hedge widgets starting in WASM mode...");

    // B. Chrome + widgets
    bearhedge_widgets::start_browser();
    Ok(())
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use bearhedge_widgets::{data::NativeFetcher, start_widgets, ui::LogDisplay, ui::LogPanel};
    use clap::Parser;
    use tokio::task::LocalSet;

    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Single-threaded runtime: the widgets share state through Rc/RefCell
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;
    let fetcher = NativeFetcher::new()?;

    let local = LocalSet::new();
    local.block_on(&rt, async move {
        let tofu = start_widgets(&args, fetcher, LogDisplay::new(), LogPanel::new()).await;
        if !args.no_tofu && tofu.is_none() {
            log::warn!("Tofu widget is showing its fallback; timers not started");
        }

        // D. Run until interrupted
        tokio::signal::ctrl_c()
            .await
            .context("Failed to listen for Ctrl-C")?;
        log::info!("Shutting down");
        drop(tofu);
        Ok::<(), anyhow::Error>(())
    })
}
