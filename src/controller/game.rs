use actix_web::http::header::{ContentType, LOCATION};
use actix_web::web::{self, Data};
use actix_web::HttpResponse;
use std::collections::HashMap;
use tracing::error;

use crate::controller::gateway::FetchGateway;
use crate::controller::metadata::resolve_metadata;
use crate::controller::page::load_page;
use crate::error::PageError;
use crate::model::PageOutcome;
use crate::view::game::render_game_page;
use crate::view::image::ImageHostPolicy;

/// Settings the views need that are not part of the fetched data.
#[derive(Clone, Debug)]
pub struct SiteSettings {
    pub image_policy: ImageHostPolicy,
}

/// `GET /game/{id}`
///
/// # Errors
///
/// Will return `Err` if the game or the game of the day cannot be fetched
pub async fn game_page(
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
    gateway: Data<FetchGateway>,
    settings: Data<SiteSettings>,
) -> Result<HttpResponse, PageError> {
    let id = path.into_inner();
    let json = matches!(query.get("json").map(String::as_str), Some("1" | "true"));

    let (metadata, outcome) = futures::join!(
        resolve_metadata(gateway.get_ref(), &id),
        load_page(gateway.get_ref(), &id)
    );

    let data = match outcome {
        Ok(PageOutcome::Render(data)) => data,
        Ok(PageOutcome::Redirect(location)) => {
            return Ok(HttpResponse::Found()
                .insert_header((LOCATION, location))
                .finish());
        }
        Err(e) => {
            error!(id = %id, error = ?e, "game page failed");
            return Err(e);
        }
    };

    if json {
        return Ok(HttpResponse::Ok().json(data));
    }

    let markup = render_game_page(&metadata, &data, &settings.image_policy);
    Ok(HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(markup.into_string()))
}

/// `GET /`
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(crate::view::index::render_index_template().into_string())
}
