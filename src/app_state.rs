use crate::{
    config::Config,
    products::{HttpProductSource, ProductSource},
    repositories::{SessionRepository, SessionRepositoryTrait},
};
use sqlx::{Pool, Postgres};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductSource>,
    pub session_repo: Arc<dyn SessionRepositoryTrait + Send + Sync>,
    pub db_pool: Pool<Postgres>,
    pub product_host: Arc<str>,
}

impl AppState {
    pub fn new(pool: Pool<Postgres>, config: &Config) -> Self {
        Self {
            products: Arc::new(HttpProductSource::new()),
            session_repo: Arc::new(SessionRepository::new(pool.clone())),
            db_pool: pool,
            product_host: Arc::from(config.product_host()),
        }
    }
}
