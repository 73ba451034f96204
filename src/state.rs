use std::sync::Arc;

use anyhow::Context;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::clients::nutrition::{EdamamClient, NutritionClient};
use crate::clients::suggestion::{OpenAiClient, SuggestionClient};
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub nutrition: Arc<dyn NutritionClient>,
    pub advisor: Arc<dyn SuggestionClient>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env());

        let db = SqlitePoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        let nutrition = Arc::new(EdamamClient::new(&config.edamam)) as Arc<dyn NutritionClient>;
        let advisor = Arc::new(OpenAiClient::new(&config.openai)) as Arc<dyn SuggestionClient>;

        Ok(Self {
            db,
            config,
            nutrition,
            advisor,
        })
    }

    pub fn from_parts(
        db: SqlitePool,
        config: Arc<AppConfig>,
        nutrition: Arc<dyn NutritionClient>,
        advisor: Arc<dyn SuggestionClient>,
    ) -> Self {
        Self {
            db,
            config,
            nutrition,
            advisor,
        }
    }
}
