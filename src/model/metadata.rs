use serde::Serialize;

use super::GameRecord;

pub const FALLBACK_TITLE: &str = "DalyGames - Descubra jogos incríveis para se divertir.";
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct OpenGraph {
    pub title: String,
    pub images: Vec<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    pub noimageindex: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub nocache: bool,
    pub google_bot: GoogleBot,
}

impl Robots {
    #[must_use]
    pub fn indexable() -> Self {
        Self {
            index: true,
            follow: true,
            nocache: true,
            google_bot: GoogleBot {
                index: true,
                follow: true,
                noimageindex: true,
            },
        }
    }

    #[must_use]
    pub fn content(&self) -> String {
        let mut parts = vec![
            if self.index { "index" } else { "noindex" },
            if self.follow { "follow" } else { "nofollow" },
        ];
        if self.nocache {
            parts.push("nocache");
        }
        parts.join(", ")
    }

    #[must_use]
    pub fn google_bot_content(&self) -> String {
        let mut parts = vec![
            if self.google_bot.index { "index" } else { "noindex" },
            if self.google_bot.follow { "follow" } else { "nofollow" },
        ];
        if self.google_bot.noimageindex {
            parts.push("noimageindex");
        }
        parts.join(", ")
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<Robots>,
}

impl PageMetadata {
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            description: None,
            open_graph: None,
            robots: None,
        }
    }

    #[must_use]
    pub fn for_game(game: &GameRecord) -> Self {
        Self {
            title: game.title.clone(),
            description: Some(description_preview(&game.description)),
            open_graph: Some(OpenGraph {
                title: game.title.clone(),
                images: vec![game.image_url.clone()],
            }),
            robots: Some(Robots::indexable()),
        }
    }
}

/// First 100 characters followed by `...`, appended even when nothing was cut.
#[must_use]
pub fn description_preview(description: &str) -> String {
    let head: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{head}...")
}
