pub mod prelude;

pub mod animes;
