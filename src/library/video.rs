use std::fmt;

/// Marker every tag starts with.
pub const TAG_MARKER: char = '#';

/// A single catalog entry. Immutable once loaded, shared as `Arc<Video>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
}

impl Video {
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }

    /// Case-insensitive exact match against one of the tags
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }

    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }

    /// "title (id) [#tag1 #tag2]" - the form shown everywhere and used as the search sort key
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}
