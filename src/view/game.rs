use maud::{Markup, html};

use crate::model::{PageData, PageMetadata};
use crate::view::components::{container, game_card, label};
use crate::view::image::ImageHostPolicy;

fn render_head(metadata: &PageMetadata) -> Markup {
    html! {
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (metadata.title) }
            @if let Some(description) = &metadata.description {
                meta name="description" content=(description);
            }
            @if let Some(og) = &metadata.open_graph {
                meta property="og:title" content=(og.title);
                @for image in &og.images {
                    meta property="og:image" content=(image);
                }
            }
            @if let Some(robots) = &metadata.robots {
                meta name="robots" content=(robots.content());
                meta name="googlebot" content=(robots.google_bot_content());
            }
            link rel="stylesheet" href="/static/styles.css";
        }
    }
}

#[must_use]
pub fn render_game_page(
    metadata: &PageMetadata,
    data: &PageData,
    image_policy: &ImageHostPolicy,
) -> Markup {
    let game = &data.game;

    html! {
        (maud::DOCTYPE)
        (render_head(metadata))
        body {
            main class="game" {
                @match image_policy.resolve(&game.image_url) {
                    Some(src) => {
                        div class="game-hero" {
                            img class="game-hero-image" src=(src.as_str()) alt=(game.title);
                        }
                    }
                    None => {
                        div class="game-hero game-hero-empty" {}
                    }
                }
                (container(html! {
                    h1 class="game-title" { (game.title) }
                    p class="game-description" { (game.description) }

                    h2 { "Plataformas" }
                    div class="labels platforms" {
                        @for platform in &game.platforms {
                            (label(platform))
                        }
                    }

                    h2 { "Categorias" }
                    div class="labels categories" {
                        @for category in &game.categories {
                            (label(category))
                        }
                    }

                    p class="game-release" {
                        "Data de lançamento: "
                        strong { (game.release) }
                    }

                    h2 { "Jogo recomendado:" }
                    div class="recommended" {
                        (game_card(data.recommended.as_ref(), image_policy))
                    }
                }))
            }
        }
    }
}
