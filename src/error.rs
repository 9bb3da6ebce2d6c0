use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaylistError {
    #[error("Playlist file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to fetch playlist from {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read playlist {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Channel '{name}' not found")]
    ChannelNotFound { name: String },
}

pub type Result<T, E = PlaylistError> = std::result::Result<T, E>;
