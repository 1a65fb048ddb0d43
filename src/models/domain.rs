use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A matchable record: a unique id plus named free-text attributes
///
/// Entities arrive from the hosting service as parsed JSON documents with the
/// id under `_id` and every other top-level field treated as a text attribute:
///
/// ```json
/// {"_id": "s1", "skills": ["python", "ml"], "interests": "nlp and search"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(flatten)]
    pub attributes: HashMap<String, AttributeValue>,
}

impl Entity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: HashMap::new(),
        }
    }

    /// Add a free-text attribute (builder style, for callers constructing
    /// entities in code rather than from JSON).
    pub fn with_text(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.attributes
            .insert(key.into(), AttributeValue::Text(text.into()));
        self
    }

    /// Add a token-sequence attribute.
    pub fn with_tokens<I, S>(mut self, key: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes.insert(
            key.into(),
            AttributeValue::Tokens(tokens.into_iter().map(Into::into).collect()),
        );
        self
    }
}

/// One attribute's value: either a sequence of tokens or free text
///
/// Untagged so the wire shape stays what callers already send: JSON arrays
/// deserialize as `Tokens`, JSON strings as `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Tokens(Vec<String>),
    Text(String),
}

impl AttributeValue {
    /// The value as one text fragment; token sequences join with single spaces.
    pub fn joined(&self) -> String {
        match self {
            AttributeValue::Tokens(tokens) => tokens.join(" "),
            AttributeValue::Text(text) => text.clone(),
        }
    }
}
