pub mod anime_service;
pub use anime_service::{AnimeError, AnimeService};

pub mod anime_service_impl;
pub use anime_service_impl::SeaOrmAnimeService;
