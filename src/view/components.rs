use maud::{Markup, html};

use crate::model::GameRecord;
use crate::view::image::ImageHostPolicy;

pub fn container(content: Markup) -> Markup {
    html! {
        div class="container" { (content) }
    }
}

pub fn label(name: &str) -> Markup {
    html! {
        span class="label" { (name) }
    }
}

/// Card for the recommended game. A missing or malformed recommendation gets a placeholder.
pub fn game_card(game: Option<&GameRecord>, image_policy: &ImageHostPolicy) -> Markup {
    html! {
        @match game {
            Some(game) => {
                a class="game-card" href=(format!("/game/{}", game.id)) {
                    @if let Some(src) = image_policy.resolve(&game.image_url) {
                        img class="game-card-image" src=(src.as_str()) alt=(game.title)
                            loading="lazy";
                    }
                    div class="game-card-body" {
                        p class="game-card-title" { (game.title) }
                    }
                }
            }
            None => {
                div class="game-card game-card-empty" {
                    p { "Nenhum jogo recomendado no momento." }
                }
            }
        }
    }
}
