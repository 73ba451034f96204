use indexmap::IndexMap;
use time::Date;

use crate::clients::suggestion::ChatMessage;
use crate::entries::repo::FoodEntry;

const SYSTEM_PROMPT: &str = "You are a dietitian reviewing one day of a user's \
food diary. Based on the logged items and their nutrient values, give short, \
concrete advice: note what was missing or excessive and suggest one or two \
practical changes for the next day. Answer in plain text.";

/// Builds the conversation for the suggestion api: system instructions plus
/// a user prompt listing the day's entries per time bucket.
pub fn build_messages(
    date: Date,
    buckets: &IndexMap<String, Vec<FoodEntry>>,
    special_request: Option<&str>,
) -> Vec<ChatMessage> {
    let mut lines = Vec::with_capacity(buckets.len());
    for (time, entries) in buckets {
        let described: Vec<String> = entries.iter().map(describe).collect();
        lines.push(format!("- {}: {}", time, described.join("; ")));
    }

    let mut user = format!(
        "Food log for {date}, grouped by time of day:\n{}",
        lines.join("\n")
    );
    if let Some(request) = special_request.map(str::trim).filter(|r| !r.is_empty()) {
        user.push_str("\n\nSpecial request: ");
        user.push_str(request);
    }

    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user)]
}

fn describe(entry: &FoodEntry) -> String {
    let mut parts = Vec::new();
    if let Some(v) = entry.calories {
        parts.push(format!("calories {v:.1} kcal"));
    }
    if let Some(v) = entry.protein {
        parts.push(format!("protein {v:.1} g"));
    }
    if let Some(v) = entry.fat {
        parts.push(format!("fat {v:.1} g"));
    }
    if let Some(v) = entry.carbs {
        parts.push(format!("carbs {v:.1} g"));
    }
    if let Some(v) = entry.fiber {
        parts.push(format!("fiber {v:.1} g"));
    }
    if parts.is_empty() {
        entry.name.clone()
    } else {
        format!("{} ({})", entry.name, parts.join(", "))
    }
}
