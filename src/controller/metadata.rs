use crate::controller::gateway::{ApiRequest, FetchGateway};
use crate::model::PageMetadata;
use tracing::warn;

/// Page metadata for a game. Never fails: any problem yields the fallback title.
pub async fn resolve_metadata(gateway: &FetchGateway, id: &str) -> PageMetadata {
    let request = ApiRequest::Game(id.to_string());
    match gateway.fetch_game(&request, gateway.revalidating()).await {
        Ok(Some(game)) => PageMetadata::for_game(&game),
        Ok(None) => {
            warn!(id, "no game record for metadata, using fallback");
            PageMetadata::fallback()
        }
        Err(e) => {
            warn!(id, error = %e, "metadata fetch failed, using fallback");
            PageMetadata::fallback()
        }
    }
}
