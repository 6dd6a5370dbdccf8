use serde::{Deserialize, Serialize};

/// `data` of `GET /user/profile`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub art_count: u64,
    #[serde(default)]
    pub follow_count: u64,
    #[serde(default)]
    pub fans_count: u64,
    #[serde(default)]
    pub like_count: u64,
}

impl UserProfile {
    /// Category labels of the statistics chart, in display order
    pub const STAT_LABELS: [&'static str; 4] = ["Articles", "Following", "Followers", "Likes"];

    /// Values matching [`Self::STAT_LABELS`]
    pub fn stats(&self) -> [u64; 4] {
        [
            self.art_count,
            self.follow_count,
            self.fans_count,
            self.like_count,
        ]
    }
}
