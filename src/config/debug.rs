//! Debugging feature flags.
//!
//! Toggle individual diagnostics here. All of them are further gated by
//! `cfg(debug_assertions)`, so release builds stay quiet regardless.

/// Emit the chosen pool and resolved context every time the pool is rebuilt.
pub const PRINT_POOL_BUILDS: bool = true;

/// Emit every display tick (which asset was shown, where the index moved to).
pub const PRINT_ROTATION_TICKS: bool = false;

/// Emit streak summaries after each track render.
pub const PRINT_TRACK_RENDERS: bool = true;

/// Emit every document / API request made by the fetchers.
pub const PRINT_DOCUMENT_FETCHES: bool = false;
