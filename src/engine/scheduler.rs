//! The three mascot timers: display ticks, pool refreshes and the midnight refresh.
//!
//! Each timer is its own local task. They only meet through the shared widget,
//! which is borrowed for the synchronous body of a tick and never across an await.

use chrono::{DateTime, TimeZone};
use std::rc::Rc;

use crate::config::TOFU;
use crate::domain::ManifestConfig;
use crate::ui::TofuDisplay;
use crate::utils::app_time::{sleep_ms, spawn_local};
use crate::utils::time_utils::ms_until_next_midnight;

use super::core::SharedTofu;

/// How often each timer fires (milliseconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleTimings {
    pub rotation_ms: u64,
    pub pool_refresh_ms: u64,
    /// Delay until the first midnight refresh
    pub first_midnight_ms: u64,
    pub midnight_repeat_ms: u64,
}

impl ScheduleTimings {
    pub fn for_manifest<Tz: TimeZone>(config: &ManifestConfig, now: &DateTime<Tz>) -> Self {
        Self {
            rotation_ms: config.effective_rotation_interval_ms(),
            pool_refresh_ms: TOFU.rotation.pool_refresh_interval_ms,
            first_midnight_ms: ms_until_next_midnight(now),
            midnight_repeat_ms: TOFU.rotation.midnight_repeat_ms,
        }
    }
}

/// Start all three timers. They run for as long as the executor does.
pub fn start<D: TofuDisplay + 'static>(widget: &SharedTofu<D>, timings: ScheduleTimings) {
    log::debug!("Starting tofu timers: {:?}", timings);

    spawn_local(display_ticks(Rc::clone(widget), timings.rotation_ms));
    spawn_local(pool_refresh_ticks(Rc::clone(widget), timings.pool_refresh_ms));
    spawn_local(midnight_ticks(
        Rc::clone(widget),
        timings.first_midnight_ms,
        timings.midnight_repeat_ms,
    ));
}

async fn display_ticks<D: TofuDisplay>(widget: SharedTofu<D>, period_ms: u64) {
    loop {
        sleep_ms(period_ms).await;
        widget.borrow_mut().rotate();
    }
}

async fn pool_refresh_ticks<D: TofuDisplay>(widget: SharedTofu<D>, period_ms: u64) {
    loop {
        sleep_ms(period_ms).await;
        widget.borrow_mut().build_pool();
    }
}

async fn midnight_ticks<D: TofuDisplay>(widget: SharedTofu<D>, first_ms: u64, repeat_ms: u64) {
    sleep_ms(first_ms).await;
    loop {
        log::info!("Midnight: re-evaluating today's event");
        widget.borrow_mut().build_pool();
        sleep_ms(repeat_ms).await;
    }
}
