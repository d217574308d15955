use maud::{Markup, html};

use crate::model::FALLBACK_TITLE;

#[must_use]
pub fn render_index_template() -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" href="/static/styles.css";
            title { (FALLBACK_TITLE) }
        }
        body {
            main class="home" {
                h1 { "DalyGames" }
                p { "Descubra jogos incríveis para se divertir." }
            }
        }
    }
}
