use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use crate::config::AppConfig;
use crate::signup::repo::{PgSignupStore, SignupStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SignupStore>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;

        // Lazy pool: the process starts without a reachable database and
        // connectivity failures surface per request as the 500 path.
        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect_lazy(&config.database_url)?;

        let store = Arc::new(PgSignupStore::new(db)) as Arc<dyn SignupStore>;
        Ok(Self { store })
    }

    pub fn from_parts(store: Arc<dyn SignupStore>) -> Self {
        Self { store }
    }
}
