//! Video link classification for the detail panel
//!
//! Best effort only: a link is either recognised as a YouTube video (and
//! played through the privacy-enhanced embed host) or left to the native
//! `<video>` element.

use url::Url;

const EMBED_HOST: &str = "https://www.youtube-nocookie.com/embed/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    RecognizedEmbed(String),
    Unrecognized,
}

impl VideoSource {
    /// Embed player URL for a recognised video
    pub fn embed_url(&self) -> Option<String> {
        match self {
            VideoSource::RecognizedEmbed(id) => Some(format!("{}{}", EMBED_HOST, id)),
            VideoSource::Unrecognized => None,
        }
    }
}

/// Recognised shapes:
/// - `youtube.com/watch?v=<id>`
/// - `youtube.com/embed/<id>` (also on `youtu.be`)
/// - `youtu.be/<id>`
pub fn classify_video_url(raw: &str) -> VideoSource {
    let url = match Url::parse(raw.trim()) {
        Ok(url) => url,
        Err(_) => return VideoSource::Unrecognized,
    };
    let host = match url.host_str() {
        Some(host) => host,
        None => return VideoSource::Unrecognized,
    };
    if !host.contains("youtube.com") && !host.contains("youtu.be") {
        return VideoSource::Unrecognized;
    }

    let path = url.path();
    let id = if path == "/watch" {
        url.query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
    } else if let Some(rest) = path.strip_prefix("/embed/") {
        Some(rest.to_string())
    } else if host == "youtu.be" {
        Some(path.trim_start_matches('/').to_string())
    } else {
        None
    };

    match id {
        Some(id) if !id.is_empty() => VideoSource::RecognizedEmbed(id),
        _ => VideoSource::Unrecognized,
    }
}
