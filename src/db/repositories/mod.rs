pub mod anime;
