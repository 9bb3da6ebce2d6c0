//! Terminal formatting for catalog queries.

use crate::catalog::GroupCount;
use crate::channels::Channel;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;
const NO_CHANNELS: &str = "No channels loaded.\n";

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

pub fn channel_list(channels: &[&Channel], catalog_empty: bool) -> String {
    if catalog_empty {
        return NO_CHANNELS.to_string();
    }
    let mut out = format!("Available channels ({}):\n{}\n", channels.len(), rule());
    for (idx, channel) in channels.iter().enumerate() {
        let group = channel.group.as_deref().unwrap_or("N/A");
        let _ = writeln!(out, "{}. {} (Group: {})", idx + 1, channel.name, group);
    }
    out
}

pub fn group_list(groups: &[GroupCount], catalog_empty: bool) -> String {
    if catalog_empty {
        return NO_CHANNELS.to_string();
    }
    let mut out = format!("Available groups ({}):\n{}\n", groups.len(), rule());
    for g in groups {
        let _ = writeln!(out, "- {} ({} channels)", g.group, g.count);
    }
    out
}

pub fn playback(channel: &Channel) -> String {
    format!(
        "Channel: {}\nGroup: {}\nStream URL: {}\n\n\
         Note: Video playback requires VLC or a compatible media player.\n\
         You can copy the stream URL above and play it in your media player.\n",
        channel.name,
        channel.group.as_deref().unwrap_or("N/A"),
        channel.url,
    )
}

pub fn channel_info(channel: &Channel) -> String {
    let mut out = format!("Channel Information:\n{}\n", rule());
    let fields = [
        ("Name", Some(channel.name.as_str())),
        ("Logo", channel.logo.as_deref()),
        ("Id", channel.id.as_deref()),
        ("Group", channel.group.as_deref()),
        ("Url", Some(channel.url.as_str())),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            let _ = writeln!(out, "{key}: {value}");
        }
    }
    out
}

pub fn json<T: serde::Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
