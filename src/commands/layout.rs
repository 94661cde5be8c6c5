//! Layout Commands
//!
//! Batch persistence of seat coordinates.

use crate::error::AdminError;
use crate::models::{SavePositionsResponse, SeatPosition};

use super::post_json;

pub async fn save_positions(
    url: &str,
    positions: &[SeatPosition],
    csrf: Option<&str>,
) -> Result<SavePositionsResponse, AdminError> {
    log::info!("[LAYOUT] Saving {} seat positions to {}", positions.len(), url);
    let response: SavePositionsResponse = post_json(url, positions, csrf).await?;
    for error in &response.errors {
        log::warn!("[LAYOUT] Server skipped a seat: {}", error);
    }
    Ok(response)
}
