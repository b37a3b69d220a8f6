//! Configuration module for the site widgets.

mod debug; // Private: files use crate::config::PRINT_* via the re-exports below
pub use debug::{
    PRINT_DOCUMENT_FETCHES, PRINT_POOL_BUILDS, PRINT_ROTATION_TICKS, PRINT_TRACK_RENDERS,
};

pub mod page;
pub mod tofu;
pub mod track;

// Re-export commonly used items
pub use page::{PAGE, PageConfig};
pub use tofu::{TOFU, TofuConfig};
pub use track::{TRACK, TrackConfig};
