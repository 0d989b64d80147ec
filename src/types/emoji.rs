use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-defined feedback tag code (e.g. `TREE_SHADE`).
///
/// The vocabulary is owned by the backend, so codes are kept as opaque
/// strings rather than a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCode(pub String);

impl TagCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Post-walk feedback vote for a segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmojiTagRequest {
    pub user_id: i64,
    pub tag_code: TagCode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagInfo {
    pub code: TagCode,
    pub label: String,
    pub emoji: String,
    pub count: u64,
}

/// Aggregated feedback for a segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmojiTagStats {
    pub road_id: i64,
    pub total_count: u64,
    #[serde(default)]
    pub my_selection: Option<TagCode>,
    #[serde(default)]
    pub stats: Vec<TagInfo>,
}

impl EmojiTagStats {
    /// The tag with the most votes, ties resolved by server order.
    pub fn top_tag(&self) -> Option<&TagInfo> {
        self.stats
            .iter()
            .reduce(|best, tag| if tag.count > best.count { tag } else { best })
    }
}
