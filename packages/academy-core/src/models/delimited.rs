//! Serde adapter for lists the backend stores as one comma-joined string.
//!
//! `Vec<String>` in Rust, `"a,b,c"` on the wire. Accepts a JSON array or
//! `null` on input as well.

use serde::{Deserialize, Deserializer, Serializer};

pub const SEPARATOR: char = ',';

pub fn serialize<S>(items: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&join(items))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Joined(String),
        List(Vec<String>),
    }

    Ok(match Option::<Wire>::deserialize(deserializer)? {
        Some(Wire::Joined(text)) => split(&text),
        Some(Wire::List(items)) => clean(items),
        None => Vec::new(),
    })
}

/// Split a delimited string, trimming entries and dropping blanks.
pub fn split(text: &str) -> Vec<String> {
    clean(text.split(SEPARATOR).map(str::to_string).collect())
}

pub fn join(items: &[String]) -> String {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

fn clean(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_and_drops_blanks() {
        assert_eq!(
            split(" Tajweed , Hifz,, Tafsir "),
            vec!["Tajweed", "Hifz", "Tafsir"]
        );
        assert!(split("").is_empty());
    }

    #[test]
    fn test_join_skips_blank_entries() {
        let items = vec!["Tajweed".to_string(), " ".to_string(), "Hifz ".to_string()];
        assert_eq!(join(&items), "Tajweed,Hifz");
    }
}
