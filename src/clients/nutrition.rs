use anyhow::Context;
use axum::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::error;

use crate::config::EdamamConfig;

/// Parsed nutrition-analysis response, one report per submitted ingredient
/// line, in submission order.
#[derive(Debug, Clone, Deserialize)]
pub struct NutritionReport {
    #[serde(default)]
    pub ingredients: Vec<IngredientReport>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngredientReport {
    #[serde(default)]
    pub parsed: Vec<ParsedIngredient>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParsedIngredient {
    #[serde(default)]
    pub nutrients: NutrientTable,
}

/// Nutrient keys the API reports per ingredient. A key the API omits stays
/// `None`; the value is unknown, not zero.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NutrientTable {
    #[serde(rename = "ENERC_KCAL")]
    pub energy: Option<Nutrient>,
    #[serde(rename = "PROCNT")]
    pub protein: Option<Nutrient>,
    #[serde(rename = "FAT")]
    pub fat: Option<Nutrient>,
    #[serde(rename = "CHOCDF")]
    pub carbs: Option<Nutrient>,
    #[serde(rename = "FIBTG")]
    pub fiber: Option<Nutrient>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Nutrient {
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

#[async_trait]
pub trait NutritionClient: Send + Sync {
    /// Analyzes an ordered list of free-text ingredient lines.
    async fn analyze(&self, ingredients: &[String]) -> anyhow::Result<NutritionReport>;
}

#[derive(Clone)]
pub struct EdamamClient {
    http: Client,
    app_id: String,
    app_key: String,
    base_url: String,
}

impl EdamamClient {
    pub fn new(config: &EdamamConfig) -> Self {
        Self {
            http: Client::new(),
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl NutritionClient for EdamamClient {
    async fn analyze(&self, ingredients: &[String]) -> anyhow::Result<NutritionReport> {
        let url = format!(
            "{}/api/nutrition-details?app_id={}&app_key={}",
            self.base_url, self.app_id, self.app_key
        );
        let payload = serde_json::json!({
            "title": "User Food List",
            "ingr": ingredients,
        });

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .context("nutrition api request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, "nutrition api returned an error");
            anyhow::bail!("nutrition api returned {status}: {body}");
        }

        response
            .json::<NutritionReport>()
            .await
            .context("decode nutrition api response")
    }
}
