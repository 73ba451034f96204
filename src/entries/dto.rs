use serde::{Deserialize, Serialize};
use time::Date;

use crate::entries::repo::FoodEntry;

#[derive(Debug, Deserialize)]
pub struct CreateEntriesRequest {
    /// Ordered ingredient items, one future food entry each.
    pub items: Vec<IngredientItem>,
    /// Optional label applied to every entry created from this request.
    #[serde(default)]
    pub tags: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IngredientItem {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl IngredientItem {
    /// One free-text line the nutrition api can parse, e.g. "2 cup rice".
    pub fn to_line(&self) -> String {
        [
            self.quantity.as_deref(),
            self.unit.as_deref(),
            Some(self.name.as_str()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedEntriesResponse {
    pub entries: Vec<FoodEntry>,
    /// Ingredients the nutrition api could not parse; skipped, not stored.
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub date: Option<Date>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_line_joins_quantity_unit_name() {
        let item = IngredientItem {
            name: "rice".into(),
            quantity: Some("2".into()),
            unit: Some("cup".into()),
        };
        assert_eq!(item.to_line(), "2 cup rice");
    }

    #[test]
    fn test_to_line_skips_absent_and_blank_parts() {
        let item = IngredientItem {
            name: "banana".into(),
            quantity: Some("1".into()),
            unit: None,
        };
        assert_eq!(item.to_line(), "1 banana");

        let item = IngredientItem {
            name: " egg ".into(),
            quantity: Some("  ".into()),
            unit: Some("".into()),
        };
        assert_eq!(item.to_line(), "egg");
    }
}
