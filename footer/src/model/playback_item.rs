use serde::{Deserialize, Serialize};

/// A track as reported by the streaming service.
///
/// Only the fields the footer shows are modelled; everything else in the
/// response is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackItem {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub album: Option<Album>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl PlaybackItem {
    /// Create an item with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artists: Vec::new(),
            album: None,
            uri: None,
            duration_ms: None,
        }
    }

    pub fn with_artist(mut self, name: impl Into<String>) -> Self {
        self.artists.push(Artist { name: name.into() });
        self
    }

    pub fn with_album_art(mut self, url: impl Into<String>) -> Self {
        let image = Image {
            url: url.into(),
            width: None,
            height: None,
        };
        self.album.get_or_insert_with(Album::default).images.push(image);
        self
    }

    /// Artist names joined the way the footer displays them
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|artist| artist.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// URL of the first (largest) album image, if any
    pub fn album_art_url(&self) -> Option<&str> {
        self.album
            .as_ref()
            .and_then(|album| album.images.first())
            .map(|image| image.url.as_str())
    }
}
