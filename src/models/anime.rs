use crate::domain::AnimeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anime {
    pub id: AnimeId,
    pub name: String,
    pub summary: Option<String>,
    pub director: Option<String>,
    pub active: bool,
}

/// A record about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnime {
    pub name: String,
    pub summary: Option<String>,
    pub director: Option<String>,
    pub active: bool,
}

impl NewAnime {
    #[must_use]
    pub fn new(name: impl Into<String>, director: Option<String>, summary: Option<String>) -> Self {
        Self {
            name: name.into(),
            summary,
            director,
            active: true,
        }
    }
}

/// Partial update. `None` leaves the stored value untouched, `Some` (including
/// an empty string) replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimeChanges {
    pub name: Option<String>,
    pub summary: Option<String>,
    pub director: Option<String>,
}

impl AnimeChanges {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.summary.is_none() && self.director.is_none()
    }
}

/// Case-sensitive substring filters for listings. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimeFilter {
    pub name: Option<String>,
    pub director: Option<String>,
    pub summary: Option<String>,
}

impl AnimeFilter {
    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    pub fn director(&self) -> Option<&str> {
        non_empty(self.director.as_deref())
    }

    pub fn summary(&self) -> Option<&str> {
        non_empty(self.summary.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
