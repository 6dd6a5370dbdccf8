use serde::{Deserialize, Serialize};

/// How many images accompany an article. The discriminant is the wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CoverMode {
    None = 0,
    #[default]
    Single = 1,
    Triple = 3,
}

impl CoverMode {
    pub fn all() -> [CoverMode; 3] {
        [CoverMode::Single, CoverMode::Triple, CoverMode::None]
    }

    /// Maximum number of images the mode allows
    pub fn capacity(self) -> usize {
        self as usize
    }

    pub fn shows_upload(self) -> bool {
        self != CoverMode::None
    }

    pub fn label(self) -> &'static str {
        match self {
            CoverMode::None => "No image",
            CoverMode::Single => "Single image",
            CoverMode::Triple => "Three images",
        }
    }

    /// Key used by radio controls
    pub fn as_key(self) -> &'static str {
        match self {
            CoverMode::None => "0",
            CoverMode::Single => "1",
            CoverMode::Triple => "3",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        key.parse::<u8>().ok().and_then(|v| Self::try_from(v).ok())
    }
}

impl TryFrom<u8> for CoverMode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CoverMode::None),
            1 => Ok(CoverMode::Single),
            3 => Ok(CoverMode::Triple),
            other => Err(format!("Unknown cover type: {}", other)),
        }
    }
}

impl From<CoverMode> for u8 {
    fn from(mode: CoverMode) -> Self {
        mode as u8
    }
}

/// `cover` object as sent and received by the article resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverDto {
    #[serde(rename = "type")]
    pub cover_type: CoverMode,
    #[serde(default)]
    pub images: Vec<String>,
}
