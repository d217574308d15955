pub mod game;
pub mod metadata;

pub use game::{GameId, GameRecord, PageData, PageOutcome};
pub use metadata::{GoogleBot, OpenGraph, PageMetadata, Robots, FALLBACK_TITLE};
