//! Page-level options read from `data-*` attributes on the background canvas.

use folio_core::Theme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Background {
    #[default]
    Bubbles,
    Emblems,
}

impl Background {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bubbles" => Some(Background::Bubbles),
            "emblems" | "emblem" => Some(Background::Emblems),
            _ => None,
        }
    }
}

/// Where the background track comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MusicSource<'a> {
    /// The page's own `#bg-music` element.
    PageElement,
    Url(&'a str),
    Missing,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneConfig {
    pub background: Background,
    pub theme: Theme,
    pub music_src: Option<String>,
}

impl SceneConfig {
    /// Build from raw attribute values; unknown values fall back to defaults.
    pub fn from_attrs(
        background: Option<&str>,
        theme: Option<&str>,
        music_src: Option<&str>,
    ) -> Self {
        let background = match background {
            Some(name) => Background::from_name(name).unwrap_or_else(|| {
                log::warn!("[config] unknown background {:?}, using bubbles", name);
                Background::default()
            }),
            None => Background::default(),
        };
        let theme = match theme {
            Some(name) => Theme::from_name(name).unwrap_or_else(|| {
                log::warn!("[config] unknown theme {:?}, using violet", name);
                Theme::default()
            }),
            None => Theme::default(),
        };
        let music_src = music_src
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);
        Self {
            background,
            theme,
            music_src,
        }
    }

    /// A page element wins over the `data-music` URL.
    pub fn music_source(&self, page_has_element: bool) -> MusicSource<'_> {
        if page_has_element {
            return MusicSource::PageElement;
        }
        match self.music_src.as_deref() {
            Some(src) => MusicSource::Url(src),
            None => MusicSource::Missing,
        }
    }
}
