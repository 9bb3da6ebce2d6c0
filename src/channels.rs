use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

const HEADER: &str = "#EXTM3U";
const EXTINF: &str = "#EXTINF:";

lazy_static! {
    static ref TVG_LOGO: Regex = Regex::new(r#"tvg-logo="([^"]*)""#).unwrap();
    static ref TVG_ID: Regex = Regex::new(r#"tvg-id="([^"]*)""#).unwrap();
    static ref GROUP_TITLE: Regex = Regex::new(r#"group-title="([^"]*)""#).unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Returns true for the literal `http://` / `https://` prefixes that mark a stream line.
pub fn is_stream_url(line: &str) -> bool {
    line.starts_with("http://") || line.starts_with("https://")
}

/// Fields collected from `#EXTINF` lines until a stream URL closes the record.
///
/// Optional attributes are only overwritten when a later `#EXTINF` line carries them,
/// so values survive across consecutive `#EXTINF` lines until the next emission.
#[derive(Debug, Default)]
struct Pending {
    name: Option<String>,
    id: Option<String>,
    logo: Option<String>,
    group: Option<String>,
}

impl Pending {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.id.is_none() && self.logo.is_none() && self.group.is_none()
    }

    fn apply_extinf(&mut self, info: &str) {
        // No comma means no display name: the whole line is ignored.
        let Some((attributes, display_name)) = info.split_once(',') else {
            return;
        };

        self.name = Some(display_name.trim().to_string());
        if let Some(logo) = attribute(&TVG_LOGO, attributes) {
            self.logo = Some(logo);
        }
        if let Some(id) = attribute(&TVG_ID, attributes) {
            self.id = Some(id);
        }
        if let Some(group) = attribute(&GROUP_TITLE, attributes) {
            self.group = Some(group);
        }
    }

    fn finish(&mut self, url: &str) -> Option<Channel> {
        if self.is_empty() {
            return None;
        }
        let pending = std::mem::take(self);
        // A name is always set whenever any attribute is.
        let name = pending.name?;
        Some(Channel {
            name,
            url: url.to_string(),
            id: pending.id,
            logo: pending.logo,
            group: pending.group,
        })
    }
}

fn attribute(re: &Regex, attributes: &str) -> Option<String> {
    re.captures(attributes)
        .map(|caps| caps[1].to_string())
        .filter(|value| !value.is_empty())
}

/// Extracts channels from playlist lines.
///
/// Never fails: lines that do not form an `#EXTINF` + stream URL pair are dropped.
pub fn parse_lines<I, S>(lines: I) -> Vec<Channel>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut channels = Vec::new();
    let mut pending = Pending::default();

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() || line.starts_with(HEADER) {
            continue;
        }

        if line.starts_with(EXTINF) {
            pending.apply_extinf(line);
        } else if is_stream_url(line) {
            if let Some(channel) = pending.finish(line) {
                channels.push(channel);
            }
        }
    }

    debug!("Parsed {} channels", channels.len());
    channels
}

/// Splits on `\n`, `\r\n` and lone `\r` line endings before parsing.
pub fn parse_m3u(content: &str) -> Vec<Channel> {
    parse_lines(content.split(['\n', '\r']))
}
