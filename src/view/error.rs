use maud::{Markup, html};

pub const ERROR_TITLE: &str = "Algo deu errado";

#[must_use]
pub fn render_error_page() -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (ERROR_TITLE) }
        }
        body {
            main class="error-boundary" {
                h1 { (ERROR_TITLE) }
                p {
                    "Não foi possível carregar os dados deste jogo. "
                    "Tente novamente em instantes."
                }
                a href="/" { "Voltar para o início" }
            }
        }
    }
}
