use daly_games::args;
use daly_games::controller::game::{SiteSettings, game_page, index};
use daly_games::controller::gateway::{FetchGateway, ReqwestGameApi};
use daly_games::view::image::ImageHostPolicy;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = args::args_checks();

    let api = ReqwestGameApi::new(args.request_timeout)?;
    let gateway = FetchGateway::new(args.api_url.clone(), Arc::new(api))
        .with_revalidate(args.revalidate);
    let settings = SiteSettings {
        image_policy: ImageHostPolicy::new(args.image_host.clone()),
    };
    let static_dir = args.static_dir.clone();

    info!(
        api_url = %args.api_url,
        bind = %args.bind,
        port = args.port,
        revalidate_secs = args.revalidate.num_seconds(),
        "starting server"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(gateway.clone()))
            .app_data(Data::new(settings.clone()))
            .route("/", web::get().to(index))
            .route("/game/{id}", web::get().to(game_page))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}
