//! Learning resource model.
//!
//! A resource is an external learning material — a book, a video channel, or
//! a website — tagged with the exam tracks it is useful for. The resource
//! ranker sorts a subject's candidates so that track-matching entries come
//! first.

use serde::{Deserialize, Serialize};

use super::Track;

/// Kind of learning material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Book,
    Video,
    Web,
}

/// An external learning resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Material kind.
    pub kind: ResourceKind,
    /// Title.
    pub title: String,
    /// Publisher, channel, or site operator.
    pub provider: String,
    /// Link, when the material is online.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Exam tracks this resource applies to. Empty = not track-specific.
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Resource {
    /// Creates a book resource.
    pub fn book(title: impl Into<String>, provider: impl Into<String>) -> Self {
        Self::new(ResourceKind::Book, title, provider)
    }

    /// Creates a video resource.
    pub fn video(title: impl Into<String>, provider: impl Into<String>) -> Self {
        Self::new(ResourceKind::Video, title, provider)
    }

    /// Creates a web resource.
    pub fn web(title: impl Into<String>, provider: impl Into<String>) -> Self {
        Self::new(ResourceKind::Web, title, provider)
    }

    fn new(kind: ResourceKind, title: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            provider: provider.into(),
            url: None,
            tracks: Vec::new(),
        }
    }

    /// Sets the URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the applicable tracks.
    pub fn with_tracks(mut self, tracks: impl Into<Vec<Track>>) -> Self {
        self.tracks = tracks.into();
        self
    }

    /// Whether this resource is tagged for the given track.
    pub fn applies_to(&self, track: Track) -> bool {
        self.tracks.contains(&track)
    }

    /// The generic substitute used when a subject has no catalog resources.
    pub fn fallback() -> Self {
        Resource::web("General Study Portal", "Khan Academy")
            .with_url("https://www.khanacademy.org")
    }
}
