pub mod app_state;
pub mod config;
pub mod entities;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod middleware;
pub mod products;
pub mod repositories;
pub mod responses;
pub mod router;
pub mod sessions;
