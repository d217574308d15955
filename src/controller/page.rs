use crate::controller::gateway::{ApiRequest, CachePolicy, FetchGateway};
use crate::error::{FetchError, PageError};
use crate::model::{GameRecord, PageData, PageOutcome};
use tracing::warn;

pub const REDIRECT_TARGET: &str = "/";

/// Primary record for the page, revalidated from the shared cache.
///
/// # Errors
///
/// Will return `Err` if the gateway fails; there is no fallback value on this path
pub async fn load_primary(
    gateway: &FetchGateway,
    id: &str,
) -> Result<Option<GameRecord>, PageError> {
    let request = ApiRequest::Game(id.to_string());
    Ok(gateway.fetch_game(&request, gateway.revalidating()).await?)
}

/// Game of the day, always fetched live.
///
/// A body that is not a game record is handed on as `None` so the card can render a placeholder.
///
/// # Errors
///
/// Will return `Err` if the gateway fails or upstream has no game of the day (404 or `null`)
pub async fn load_recommended(gateway: &FetchGateway) -> Result<Option<GameRecord>, PageError> {
    let Some(value) = gateway
        .fetch(&ApiRequest::GameDay, CachePolicy::NoStore)
        .await?
    else {
        return Err(FetchError::new("no game of the day returned").into());
    };

    let recommended = GameRecord::from_value(value);
    if recommended.is_none() {
        warn!("game of the day payload is not a game record");
    }
    Ok(recommended)
}

/// Loads both page dependencies. Either failing fails the whole page.
///
/// # Errors
///
/// Will return `Err` if either fetch fails
pub async fn load_page(gateway: &FetchGateway, id: &str) -> Result<PageOutcome, PageError> {
    let (primary, recommended) =
        futures::try_join!(load_primary(gateway, id), load_recommended(gateway))?;

    match primary {
        Some(game) => Ok(PageOutcome::Render(PageData { game, recommended })),
        None => Ok(PageOutcome::Redirect(REDIRECT_TARGET)),
    }
}
