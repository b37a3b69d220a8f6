pub mod context;
pub mod core;
pub mod pool;
pub mod scheduler;
pub mod state;

// Re-export key components
pub use context::{Context, event_key, resolve_market_mood, resolve_time_period, resolve_today_event};
pub use self::core::{SharedTofu, TofuWidget, init_tofu};
pub use pool::{match_assets, select_pool};
pub use scheduler::ScheduleTimings;
pub use state::RotationState;
