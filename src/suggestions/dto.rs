use serde::Deserialize;
use time::Date;

#[derive(Debug, Deserialize)]
pub struct CreateSuggestionRequest {
    /// Day to advise on; must have logged entries.
    pub date: Date,
    #[serde(default)]
    pub special_request: Option<String>,
}
