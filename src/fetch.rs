use crate::channels::{self, Channel};
use crate::error::{PlaylistError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistSource {
    Remote(String),
    Local(PathBuf),
}

impl PlaylistSource {
    pub fn parse(source: &str) -> Self {
        if channels::is_stream_url(source) {
            PlaylistSource::Remote(source.to_string())
        } else {
            PlaylistSource::Local(PathBuf::from(source))
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

pub struct PlaylistFetcher {
    client: reqwest::Client,
}

impl PlaylistFetcher {
    pub fn new(config: &FetchConfig) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Obtains the raw playlist text without parsing it.
    pub async fn fetch_text(&self, source: &PlaylistSource) -> Result<String> {
        match source {
            PlaylistSource::Remote(url) => self.fetch_remote(url).await,
            PlaylistSource::Local(path) => read_local(path).await,
        }
    }

    pub async fn load(&self, source: &str) -> Result<Vec<Channel>> {
        let source = PlaylistSource::parse(source);
        debug!("Resolved playlist source: {:?}", source);
        let text = self.fetch_text(&source).await?;
        Ok(channels::parse_m3u(&text))
    }

    async fn fetch_remote(&self, url: &str) -> Result<String> {
        let wrap = |source: reqwest::Error| PlaylistError::Fetch {
            url: url.to_string(),
            source,
        };

        let resp = self.client.get(url).send().await.map_err(wrap)?;
        info!("GET {} -> {}", url, resp.status());
        let resp = resp.error_for_status().map_err(wrap)?;
        let text = resp.text().await.map_err(wrap)?;
        debug!("Fetched {} bytes from {}", text.len(), url);
        Ok(text)
    }
}

async fn read_local(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PlaylistError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PlaylistError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
