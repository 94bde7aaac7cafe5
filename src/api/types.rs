use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::{Validate, ValidationError};

use crate::constants::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::models::anime::{Anime, AnimeChanges, AnimeFilter, NewAnime};

/// Error body shared by every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            fields: None,
        }
    }

    pub fn with_fields(
        message: impl Into<String>,
        fields: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            error: message.into(),
            fields: Some(fields),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimeDto {
    pub id: i32,
    pub name: String,
    pub summary: Option<String>,
    pub director: Option<String>,
    pub active: bool,
}

impl From<Anime> for AnimeDto {
    fn from(anime: Anime) -> Self {
        Self {
            id: anime.id.value(),
            name: anime.name,
            summary: anime.summary,
            director: anime.director,
            active: anime.active,
        }
    }
}

/// Body of `POST /api/anime`. Every field is required.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateAnimeRequest {
    #[validate(
        required(message = "Name is required"),
        custom(function = "non_blank", message = "Name is required"),
        length(min = 3, max = 100, message = "Name must be between 3 and 100 characters")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Director is required"),
        custom(function = "non_blank", message = "Director is required"),
        length(max = 50, message = "Director must be at most 50 characters")
    )]
    pub director: Option<String>,

    #[validate(
        required(message = "Summary is required"),
        custom(function = "non_blank", message = "Summary is required"),
        length(max = 500, message = "Summary must be at most 500 characters")
    )]
    pub summary: Option<String>,
}

/// Rejects empty and whitespace-only strings.
fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl CreateAnimeRequest {
    /// Builds the record to insert. Call only after validation succeeded.
    #[must_use]
    pub fn into_new_anime(self) -> NewAnime {
        NewAnime::new(self.name.unwrap_or_default(), self.director, self.summary)
    }
}

/// Body of `PUT /api/anime/{id}`. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAnimeRequest {
    #[validate(length(min = 3, max = 100, message = "Name must be between 3 and 100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 50, message = "Director must be at most 50 characters"))]
    pub director: Option<String>,

    #[validate(length(max = 500, message = "Summary must be at most 500 characters"))]
    pub summary: Option<String>,
}

impl From<UpdateAnimeRequest> for AnimeChanges {
    fn from(req: UpdateAnimeRequest) -> Self {
        Self {
            name: req.name,
            summary: req.summary,
            director: req.director,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAnimeQuery {
    pub name: Option<String>,
    pub director: Option<String>,
    pub summary: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

const fn default_page() -> u64 {
    DEFAULT_PAGE
}

const fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for ListAnimeQuery {
    fn default() -> Self {
        Self {
            name: None,
            director: None,
            summary: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListAnimeQuery {
    #[must_use]
    pub fn filter(&self) -> AnimeFilter {
        AnimeFilter {
            name: self.name.clone(),
            director: self.director.clone(),
            summary: self.summary.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<&'static str>,
    pub uptime_seconds: u64,
}
