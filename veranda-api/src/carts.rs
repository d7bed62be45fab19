use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;

use veranda_cart::{quote_to_cart_lines, CartLine};
use veranda_shared::models::events::CartExportedEvent;

use crate::error::ApiError;
use crate::quotes::{compute_quote, QuoteRequest};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/carts/preview", post(preview_cart))
}

/// POST /v1/carts/preview
/// Price the request and return the generic cart rows checkout would
/// persist
pub async fn preview_cart(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<Vec<CartLine>>, ApiError> {
    let quote = compute_quote(&req, &state.pricing)?;
    let rows = quote_to_cart_lines(&quote);

    let event = CartExportedEvent {
        quote_id: quote.id,
        line_count: rows.len(),
        total_cents: quote.total_cents,
        timestamp: Utc::now().timestamp(),
    };
    tracing::info!(?event, "cart preview built");

    Ok(Json(rows))
}
