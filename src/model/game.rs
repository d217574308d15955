use serde::{Deserialize, Serialize};
use std::fmt;

/// Upstream ids come back as either numbers or strings depending on the record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum GameId {
    Number(i64),
    Text(String),
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameId::Number(n) => write!(f, "{n}"),
            GameId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub id: GameId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub platforms: Vec<String>,
    pub categories: Vec<String>,
    pub release: String,
}

impl GameRecord {
    /// Shape check for payloads that are handed to a renderer without a hard failure.
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        serde_json::from_value(value).ok()
    }
}

/// Everything the game page body needs once both fetches are done.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PageData {
    pub game: GameRecord,
    pub recommended: Option<GameRecord>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageOutcome {
    Render(PageData),
    Redirect(&'static str),
}
