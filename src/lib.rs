pub mod catalog;
pub mod channels;
pub mod error;
pub mod fetch;
pub mod render;
pub mod settings;

use catalog::Catalog;
use fetch::PlaylistFetcher;
use tracing::info;

pub use channels::{parse_lines, parse_m3u, Channel};
pub use error::PlaylistError;

/// Fetches and parses `source`, returning a catalog over its channels.
pub async fn load_catalog(fetcher: &PlaylistFetcher, source: &str) -> error::Result<Catalog> {
    info!("Loading playlist from {}", source);
    let channels = fetcher.load(source).await?;
    info!("Loaded {} channels from {}", channels.len(), source);
    Ok(Catalog::new(channels))
}
