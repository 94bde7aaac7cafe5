//! Handler error mapping against stubbed services.
//!
//! These swap the SeaORM service for hand-written fakes so failure paths
//! can be forced without a broken database.

use anime_catalog::api::{INTERNAL_ERROR_MESSAGE, create_app_state, router};
use anime_catalog::config::Config;
use anime_catalog::domain::{AnimeId, PageRequest};
use anime_catalog::models::anime::{Anime, AnimeChanges, AnimeFilter, NewAnime};
use anime_catalog::services::{AnimeError, AnimeService};
use anime_catalog::state::SharedState;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

const SECRET_DETAIL: &str = "database is locked: /var/lib/catalog.db";

/// Fails every call with a storage error and counts invocations.
#[derive(Default)]
struct BrokenStore {
    calls: AtomicUsize,
}

impl BrokenStore {
    fn fail<T>(&self) -> Result<T, AnimeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AnimeError::Persistence(SECRET_DETAIL.to_string()))
    }
}

#[async_trait::async_trait]
impl AnimeService for BrokenStore {
    async fn add(&self, _anime: NewAnime) -> Result<Anime, AnimeError> {
        self.fail()
    }

    async fn list(
        &self,
        _filter: &AnimeFilter,
        _page: PageRequest,
    ) -> Result<Vec<Anime>, AnimeError> {
        self.fail()
    }

    async fn get_by_id(&self, _id: AnimeId) -> Result<Option<Anime>, AnimeError> {
        self.fail()
    }

    async fn update(&self, _id: AnimeId, _changes: AnimeChanges) -> Result<Anime, AnimeError> {
        self.fail()
    }

    async fn soft_delete(&self, _id: AnimeId) -> Result<(), AnimeError> {
        self.fail()
    }
}

/// Returns a fixed record from `add`.
struct FixedAdd;

#[async_trait::async_trait]
impl AnimeService for FixedAdd {
    async fn add(&self, anime: NewAnime) -> Result<Anime, AnimeError> {
        Ok(Anime {
            id: AnimeId::new(1),
            name: anime.name,
            summary: anime.summary,
            director: anime.director,
            active: anime.active,
        })
    }

    async fn list(
        &self,
        _filter: &AnimeFilter,
        _page: PageRequest,
    ) -> Result<Vec<Anime>, AnimeError> {
        Ok(Vec::new())
    }

    async fn get_by_id(&self, _id: AnimeId) -> Result<Option<Anime>, AnimeError> {
        Ok(None)
    }

    async fn update(&self, id: AnimeId, _changes: AnimeChanges) -> Result<Anime, AnimeError> {
        Err(AnimeError::NotFound(id))
    }

    async fn soft_delete(&self, id: AnimeId) -> Result<(), AnimeError> {
        Err(AnimeError::NotFound(id))
    }
}

async fn app_with(service: Arc<dyn AnimeService>) -> Router {
    let shared = SharedState::new(Config::default())
        .await
        .expect("Failed to build shared state")
        .with_anime_service(service);
    router(create_app_state(Arc::new(shared), None))
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("Content-Type", "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

const VALID_CREATE: &str =
    r#"{"name":"Naruto","director":"Hayato Date","summary":"Um ninja adolescente..."}"#;

#[tokio::test]
async fn storage_failures_become_generic_500s() {
    let app = app_with(Arc::new(BrokenStore::default())).await;

    let cases = [
        ("GET", "/api/anime", None),
        ("GET", "/api/anime/1", None),
        ("POST", "/api/anime", Some(VALID_CREATE)),
        ("PUT", "/api/anime/1", Some(r#"{"name":"Bleach"}"#)),
        ("DELETE", "/api/anime/1", None),
    ];

    for (method, uri, body) in cases {
        let (status, text) = call(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");

        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["error"], INTERNAL_ERROR_MESSAGE);
        assert!(!text.contains("locked"), "{method} {uri} leaked: {text}");
    }
}

#[tokio::test]
async fn validation_failures_never_reach_the_service() {
    let service = Arc::new(BrokenStore::default());
    let app = app_with(service.clone()).await;

    let (status, _) = call(&app, "GET", "/api/anime?page=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app, "GET", "/api/anime?pageSize=100", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(&app, "POST", "/api/anime", Some(r#"{"name":"Na"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let long_summary = format!(r#"{{"summary":"{}"}}"#, "s".repeat(501));
    let (status, _) = call(&app, "PUT", "/api/anime/1", Some(&long_summary)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(service.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn create_returns_201_with_location() {
    let app = app_with(Arc::new(FixedAdd)).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/anime")
        .header("Content-Type", "application/json")
        .body(Body::from(VALID_CREATE))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()["location"], "/api/anime/1");

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["active"], true);
    assert_eq!(json["director"], "Hayato Date");
}

#[tokio::test]
async fn not_found_errors_become_404s() {
    let app = app_with(Arc::new(FixedAdd)).await;

    for (method, uri, body) in [
        ("GET", "/api/anime/5", None),
        ("PUT", "/api/anime/5", Some(r#"{"director":"Oda"}"#)),
        ("DELETE", "/api/anime/5", None),
    ] {
        let (status, text) = call(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert!(text.contains("Id: 5"), "{method} {uri}: {text}");
    }
}

#[tokio::test]
async fn empty_listing_is_ok() {
    let app = app_with(Arc::new(FixedAdd)).await;

    let (status, text) = call(&app, "GET", "/api/anime", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "[]");
}
