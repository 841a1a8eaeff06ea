use std::collections::HashMap;
use std::path::PathBuf;

use iced::widget::container;
use iced::{ContentFit, Element, Length};

use crate::style;
use crate::theme::{self, ColorScheme};

/// State of a cover image for a catalog entity.
#[derive(Debug, Clone)]
pub enum CoverState {
    Loading,
    Loaded(PathBuf),
    Failed,
}

/// In-memory cache mapping cover keys to their image state.
#[derive(Debug, Default)]
pub struct CoverCache {
    pub states: HashMap<String, CoverState>,
}

impl CoverCache {
    pub fn get(&self, key: &str) -> Option<&CoverState> {
        self.states.get(key)
    }
}

/// Cache key for an entity's cover. Kind-prefixed so ids from
/// different collections can't collide.
pub fn key(kind: &str, id: &str) -> String {
    format!("{kind}-{id}")
}

/// Directory for cached cover images.
pub fn covers_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "dituria")
        .map(|dirs| dirs.cache_dir().join("covers"))
        .unwrap_or_else(|| PathBuf::from("covers"))
}

/// Expected file path for a cover image.
pub fn cover_path(key: &str) -> PathBuf {
    covers_dir().join(format!("{key}.jpg"))
}

/// Download a cover image and save it to disk. Returns the saved path.
pub async fn fetch_cover(key: String, url: String) -> Result<PathBuf, String> {
    let dir = covers_dir();
    std::fs::create_dir_all(&dir).map_err(|e| e.to_string())?;

    let path = cover_path(&key);

    let bytes = reqwest::get(&url)
        .await
        .map_err(|e| e.to_string())?
        .bytes()
        .await
        .map_err(|e| e.to_string())?;

    std::fs::write(&path, &bytes).map_err(|e| e.to_string())?;
    Ok(path)
}

/// Render a cover image with rounded corners, or a styled placeholder.
///
/// Uses `ContentFit::Cover` so the image fills the frame completely.
/// The container keeps the placeholder background so a failed image
/// still shows a visible frame.
pub fn rounded_cover<'a, Message: 'static>(
    cs: &ColorScheme,
    covers: &'a CoverCache,
    key: &str,
    width: f32,
    height: f32,
    radius: f32,
) -> Element<'a, Message> {
    if let Some(CoverState::Loaded(path)) = covers.get(key) {
        container(
            iced::widget::image(path.as_path())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .border_radius(radius),
        )
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .style(theme::cover_placeholder(cs, radius))
        .into()
    } else {
        let icon_size = if width <= style::THUMB_WIDTH {
            style::TEXT_BASE
        } else {
            style::TEXT_XL
        };
        container(
            lucide_icons::iced::icon_image()
                .size(icon_size)
                .color(cs.outline)
                .center(),
        )
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(theme::cover_placeholder(cs, radius))
        .into()
    }
}
