use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header},
};
use std::sync::Arc;

use super::{AnimeDto, ApiError, AppState, CreateAnimeRequest, ListAnimeQuery, UpdateAnimeRequest};
use crate::api::validation::{Validated, validate_pagination};
use crate::domain::AnimeId;
use crate::services::AnimeError;

/// `GET /api/anime?name=&director=&summary=&page=&pageSize=`
pub async fn list_anime(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListAnimeQuery>, QueryRejection>,
) -> Result<Json<Vec<AnimeDto>>, ApiError> {
    let Query(params) = query.map_err(|rejection| {
        tracing::warn!(reason = %rejection.body_text(), "Invalid list query");
        ApiError::validation(rejection.body_text())
    })?;

    let page = validate_pagination(params.page, params.page_size).inspect_err(|e| {
        tracing::warn!("{e}");
    })?;

    let anime = state.anime_service().list(&params.filter(), page).await?;

    Ok(Json(anime.into_iter().map(AnimeDto::from).collect()))
}

/// `GET /api/anime/{id}`
///
/// Soft-deleted records are still returned here.
pub async fn get_anime(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<AnimeDto>, ApiError> {
    let id = AnimeId::new(id);

    let anime = state
        .anime_service()
        .get_by_id(id)
        .await?
        .ok_or_else(|| {
            let err = AnimeError::NotFound(id);
            tracing::warn!(anime_id = %id, "{err}");
            err
        })?;

    Ok(Json(anime.into()))
}

/// `POST /api/anime`
pub async fn create_anime(
    State(state): State<Arc<AppState>>,
    Validated(payload): Validated<CreateAnimeRequest>,
) -> Result<(StatusCode, HeaderMap, Json<AnimeDto>), ApiError> {
    let created = state
        .anime_service()
        .add(payload.into_new_anime())
        .await?;

    let mut headers = HeaderMap::new();
    let location = format!("/api/anime/{}", created.id);
    headers.insert(
        header::LOCATION,
        HeaderValue::from_str(&location).map_err(|e| ApiError::internal(e.to_string()))?,
    );

    tracing::info!(anime_id = %created.id, name = %created.name, "Anime created");

    Ok((StatusCode::CREATED, headers, Json(created.into())))
}

/// `PUT /api/anime/{id}`
///
/// Fields omitted from the body keep their stored value; fields sent as
/// empty strings overwrite it.
pub async fn update_anime(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Validated(payload): Validated<UpdateAnimeRequest>,
) -> Result<StatusCode, ApiError> {
    let id = AnimeId::new(id);

    state
        .anime_service()
        .update(id, payload.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/anime/{id}`
pub async fn remove_anime(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let id = AnimeId::new(id);

    state
        .anime_service()
        .soft_delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
