use crate::channels::Channel;
use crate::error::{PlaylistError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub group: String,
    pub count: usize,
}

/// The channels of one loaded playlist, in playlist order.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    channels: Vec<Channel>,
}

impl Catalog {
    pub fn new(channels: Vec<Channel>) -> Self {
        Self { channels }
    }

    /// Swaps in the channels of a newly loaded playlist.
    pub fn replace(&mut self, channels: Vec<Channel>) {
        self.channels = channels;
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Channels in stored order, restricted to an exact (case-sensitive) group when given.
    pub fn list(&self, group: Option<&str>) -> Vec<&Channel> {
        self.channels
            .iter()
            .filter(|c| group.is_none_or(|g| c.group.as_deref() == Some(g)))
            .collect()
    }

    /// Distinct groups sorted by name, each with the number of channels carrying it.
    pub fn list_groups(&self) -> Vec<GroupCount> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for group in self.channels.iter().filter_map(|c| c.group.as_deref()) {
            *counts.entry(group).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(group, count)| GroupCount {
                group: group.to_string(),
                count,
            })
            .collect()
    }

    pub fn find_by_name(&self, name: &str) -> Result<&Channel> {
        let needle = name.to_lowercase();
        let found = self
            .channels
            .iter()
            .find(|c| c.name.to_lowercase() == needle);
        debug!("Lookup '{}': {}", name, if found.is_some() { "hit" } else { "miss" });
        found.ok_or_else(|| PlaylistError::ChannelNotFound {
            name: name.to_string(),
        })
    }

    /// Resolves the channel whose stream URL gets handed to an external player.
    pub fn play(&self, name: &str) -> Result<&Channel> {
        let channel = self.find_by_name(name)?;
        debug!("Resolved '{}' to {}", channel.name, channel.url);
        Ok(channel)
    }
}
