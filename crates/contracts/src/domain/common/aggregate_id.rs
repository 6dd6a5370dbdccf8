use serde::{Deserialize, Deserializer, Serialize};
use std::hash::Hash;

/// Identifier of a remote resource that can travel through URLs
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + std::fmt::Debug
{
    /// Render the id as it appears in a URL path segment
    fn as_string(&self) -> String;

    /// Parse the id back from a path segment or query value
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Channels are addressed by their numeric id
pub type ChannelId = i64;

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}

/// Article id. The API is inconsistent and sends both `"42"` and `42`,
/// so the id is normalised to its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ArticleId(pub String);

impl ArticleId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for ArticleId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Article id is empty".into());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl<'de> Deserialize<'de> for ArticleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => ArticleId(s),
            RawId::Number(n) => ArticleId(n.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_id_accepts_text_and_numbers() {
        let from_text: ArticleId = serde_json::from_str("\"8218\"").unwrap();
        let from_number: ArticleId = serde_json::from_str("8218").unwrap();
        assert_eq!(from_text, from_number);
        assert_eq!(serde_json::to_string(&from_number).unwrap(), "\"8218\"");
    }

    #[test]
    fn article_id_rejects_blank_path_segment() {
        assert!(ArticleId::from_string("  ").is_err());
        assert_eq!(ArticleId::from_string(" 42 ").unwrap().value(), "42");
    }

    #[test]
    fn channel_id_parses_query_value() {
        assert_eq!(<i64 as AggregateId>::from_string("5"), Ok(5));
        assert!(<i64 as AggregateId>::from_string("five").is_err());
    }
}
