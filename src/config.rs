use tracing::warn;

#[derive(Debug, Clone)]
pub struct EdamamConfig {
    pub app_id: String,
    pub app_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub edamam: EdamamConfig,
    pub openai: OpenAiConfig,
}

impl AppConfig {
    /// Reads configuration from the environment. Missing API credentials are
    /// not fatal at startup; only the requests that need them fail.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://nutrilog.db?mode=rwc".into());

        let edamam = EdamamConfig {
            app_id: credential("EDAMAM_APP_ID"),
            app_key: credential("EDAMAM_APP_KEY"),
            base_url: std::env::var("EDAMAM_BASE_URL")
                .unwrap_or_else(|_| "https://api.edamam.com".into()),
        };

        let openai = OpenAiConfig {
            api_key: credential("OPENAI_API_KEY"),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into()),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com".into()),
        };

        Self {
            database_url,
            edamam,
            openai,
        }
    }
}

fn credential(key: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        warn!("{key} not set; requests that depend on it will fail");
        String::new()
    })
}
