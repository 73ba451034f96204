use indexmap::IndexMap;

use crate::entries::repo::FoodEntry;

/// Partitions entries by the UTC calendar date (`YYYY-MM-DD`) of `created_at`.
///
/// Group order is the first-seen order of each date in the input; order
/// within a group is the input order. No entry is dropped or duplicated.
pub fn group_by_date(entries: Vec<FoodEntry>) -> IndexMap<String, Vec<FoodEntry>> {
    partition(entries, |entry| {
        let date = entry.created_at.date();
        format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        )
    })
}

/// Partitions entries by the time of day (`HH:MM:SS`) of `created_at`.
/// Entries logged in the same second share a bucket. Same ordering
/// contract as [`group_by_date`].
pub fn group_by_time(entries: Vec<FoodEntry>) -> IndexMap<String, Vec<FoodEntry>> {
    partition(entries, |entry| {
        let time = entry.created_at.time();
        format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())
    })
}

fn partition<F>(entries: Vec<FoodEntry>, key: F) -> IndexMap<String, Vec<FoodEntry>>
where
    F: Fn(&FoodEntry) -> String,
{
    let mut groups: IndexMap<String, Vec<FoodEntry>> = IndexMap::new();
    for entry in entries {
        groups.entry(key(&entry)).or_default().push(entry);
    }
    groups
}

#[cfg(test)]
mod tests {
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    use super::*;

    fn entry_at(id: i64, name: &str, at: &str) -> FoodEntry {
        FoodEntry {
            id,
            name: name.into(),
            calories: None,
            protein: None,
            fat: None,
            carbs: None,
            fiber: None,
            tags: None,
            created_at: OffsetDateTime::parse(at, &Rfc3339).unwrap(),
        }
    }

    #[test]
    fn test_group_by_date_keeps_first_seen_order() {
        let entries = vec![
            entry_at(3, "toast", "2024-01-02T09:00:00Z"),
            entry_at(2, "rice", "2024-01-01T08:00:00Z"),
            entry_at(1, "egg", "2024-01-02T07:30:00Z"),
        ];

        let groups = group_by_date(entries);

        let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["2024-01-02", "2024-01-01"]);
        let names: Vec<&str> = groups["2024-01-02"]
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["toast", "egg"]);
    }

    #[test]
    fn test_group_by_time_buckets_same_second() {
        let entries = vec![
            entry_at(1, "rice", "2024-01-01T08:00:00Z"),
            entry_at(2, "egg", "2024-01-01T08:00:00Z"),
            entry_at(3, "toast", "2024-01-01T12:15:30Z"),
        ];

        let groups = group_by_time(entries);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["08:00:00"].len(), 2);
        assert_eq!(groups["12:15:30"].len(), 1);
    }

    #[test]
    fn test_keys_are_zero_padded() {
        let groups = group_by_date(vec![entry_at(1, "egg", "2024-03-05T07:04:09Z")]);
        assert!(groups.contains_key("2024-03-05"));

        let groups = group_by_time(vec![entry_at(1, "egg", "2024-03-05T07:04:09Z")]);
        assert!(groups.contains_key("07:04:09"));
    }

    #[test]
    fn test_date_then_time_is_a_lossless_partition() {
        let entries = vec![
            entry_at(1, "rice", "2024-01-01T08:00:00Z"),
            entry_at(2, "egg", "2024-01-01T08:00:00Z"),
            entry_at(3, "toast", "2024-01-02T09:00:00Z"),
        ];
        let total = entries.len();

        let mut seen = 0;
        for (_, day) in group_by_date(entries) {
            for (_, bucket) in group_by_time(day) {
                seen += bucket.len();
            }
        }
        assert_eq!(seen, total);
    }

    #[test]
    fn test_duplicate_time_scenario() {
        let entries = vec![
            entry_at(1, "rice", "2024-01-01T08:00:00Z"),
            entry_at(2, "egg", "2024-01-01T08:00:00Z"),
            entry_at(3, "toast", "2024-01-02T09:00:00Z"),
        ];

        let by_date = group_by_date(entries);
        assert_eq!(by_date.len(), 2);

        let first_day = by_date["2024-01-01"].clone();
        let by_time = group_by_time(first_day);
        assert_eq!(by_time.len(), 1);
        assert_eq!(by_time["08:00:00"].len(), 2);
    }
}
