use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Upstream identifier of a story (`objectID` in the search API).
///
/// Opaque: it is only ever compared for equality, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(String);

impl StoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// One search hit as returned by the upstream API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    #[serde(rename = "objectID")]
    pub id: StoryId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default)]
    pub points: Option<u64>,
    #[serde(default)]
    pub num_comments: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Story {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: StoryId::new(id),
            title: title.into(),
            author: String::new(),
            url: String::new(),
            points: None,
            num_comments: None,
            created_at: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

// Ask HN posts and comments come back with `"url": null`
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_search_hit() {
        let json = r#"{
            "objectID": "38792446",
            "title": "Rust 1.75",
            "author": "steveklabnik",
            "url": "https://blog.rust-lang.org/",
            "points": 412,
            "num_comments": 120,
            "created_at": "2023-12-28T17:03:11.000Z"
        }"#;

        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.id, StoryId::new("38792446"));
        assert_eq!(story.title, "Rust 1.75");
        assert_eq!(story.author, "steveklabnik");
        assert_eq!(story.points, Some(412));
        assert!(story.created_at.is_some());
    }

    #[test]
    fn null_and_missing_fields_become_empty() {
        let json = r#"{"objectID": "1", "title": null}"#;

        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.title, "");
        assert_eq!(story.url, "");
        assert_eq!(story.author, "");
        assert_eq!(story.num_comments, None);
    }

    #[test]
    fn missing_id_is_rejected() {
        let json = r#"{"title": "No id"}"#;
        assert!(serde_json::from_str::<Story>(json).is_err());
    }
}
