use crate::domain::a001_catalog::error::VideoPlaybackError;
use crate::shared::video_link::classify_video_url;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

pub const VIDEO_FAILURE_NOTICE: &str = "Impossible de charger la vidéo.";

const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// State of the detail panel's video region.
///
/// The region takes up aspect-ratio space only once a playable video is
/// confirmed: immediately for a recognised embed, after `loadeddata` for a
/// direct file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VideoPanel {
    #[default]
    Hidden,
    Embed { src: String },
    Direct { src: String, loaded: bool },
    Failed { src: String },
}

/// What element the region renders; ignores the `loaded` flag so that
/// flipping it does not recreate the `<video>` element
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VideoPlayer {
    None,
    Embed(String),
    Direct(String),
    Notice,
}

impl VideoPanel {
    pub fn for_product(product: &Product) -> Self {
        let Some(url) = product.video_url() else {
            return VideoPanel::Hidden;
        };
        match classify_video_url(url).embed_url() {
            Some(src) => VideoPanel::Embed { src },
            None => VideoPanel::Direct {
                src: url.to_string(),
                loaded: false,
            },
        }
    }

    pub fn mark_loaded(&mut self) {
        if let VideoPanel::Direct { loaded, .. } = self {
            *loaded = true;
        }
    }

    /// Direct playback failed: swap the player for a textual notice
    pub fn fail(&mut self) -> Option<VideoPlaybackError> {
        match self {
            VideoPanel::Direct { src, .. } => {
                let src = std::mem::take(src);
                *self = VideoPanel::Failed { src: src.clone() };
                Some(VideoPlaybackError { src })
            }
            _ => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, VideoPanel::Hidden)
    }

    pub fn reserves_aspect_ratio(&self) -> bool {
        matches!(
            self,
            VideoPanel::Embed { .. } | VideoPanel::Direct { loaded: true, .. }
        )
    }

    pub fn player(&self) -> VideoPlayer {
        match self {
            VideoPanel::Hidden => VideoPlayer::None,
            VideoPanel::Embed { src } => VideoPlayer::Embed(src.clone()),
            VideoPanel::Direct { src, .. } => VideoPlayer::Direct(src.clone()),
            VideoPanel::Failed { .. } => VideoPlayer::Notice,
        }
    }

    pub fn is_embed(&self) -> bool {
        matches!(self, VideoPanel::Embed { .. })
    }
}

/// Video region of the detail panel
#[component]
pub fn VideoRegion(
    #[prop(into)] panel: Signal<VideoPanel>,
    on_loaded: Callback<()>,
    on_error: Callback<()>,
) -> impl IntoView {
    let player = Memo::new(move |_| panel.with(VideoPanel::player));

    view! {
        <Show when=move || panel.with(VideoPanel::is_visible)>
            <div
                class="detail-video"
                class:detail-video--ratio=move || panel.with(VideoPanel::reserves_aspect_ratio)
            >
                {move || match player.get() {
                    VideoPlayer::Embed(src) => view! {
                        <iframe src=src allow=EMBED_ALLOW allowfullscreen=true></iframe>
                    }
                    .attr("frameborder", "0")
                    .into_any(),
                    VideoPlayer::Direct(src) => view! {
                        <video
                            src=src
                            controls=true
                            playsinline=true
                            on:loadeddata=move |_| on_loaded.run(())
                            on:error=move |_| on_error.run(())
                        ></video>
                    }
                    .into_any(),
                    VideoPlayer::Notice => view! {
                        <p class="detail-video__error">{VIDEO_FAILURE_NOTICE}</p>
                    }
                    .into_any(),
                    VideoPlayer::None => view! { <></> }.into_any(),
                }}
            </div>
        </Show>
    }
}
