// Document fetching and loading
pub mod fetch;
pub mod loader;

// Re-export commonly used types
#[cfg(target_arch = "wasm32")]
pub use fetch::BrowserFetcher;
#[cfg(not(target_arch = "wasm32"))]
pub use fetch::NativeFetcher;
pub use fetch::{FetchDocument, fetch_json};
pub use loader::{DocumentLocations, TofuDocuments, load_tofu_documents};
