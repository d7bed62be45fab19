use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use veranda_catalog::{PricingMap, ShipLocation};
use veranda_quote::{
    build_quote, price_panel, AccessoryLine, PanelConfiguration, Quote, QuoteError, QuoteLine,
};
use veranda_shared::format_usd;
use veranda_shared::models::events::{QuotePricedEvent, QuoteRejectedEvent};

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub panels: Vec<PanelConfiguration>,
    #[serde(default)]
    pub accessories: Vec<AccessoryLine>,
    pub ship_location: ShipLocation,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub id: Uuid,
    pub lines: Vec<QuoteLineResponse>,
    pub subtotal_cents: i64,
    pub ship_location: ShipLocation,
    pub shipping_cents: i64,
    pub total_cents: i64,
    pub display_total: String,
    pub currency: String,
    pub created_at: chrono::DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct QuoteLineResponse {
    pub description: String,
    pub quantity: u32,
    pub total_cents: i64,
    pub display_total: String,
    pub detail: serde_json::Value,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/quotes", post(create_quote))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/quotes
/// Price the submitted panels and accessories into an instant quote
pub async fn create_quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let quote = match compute_quote(&req, &state.pricing) {
        Ok(quote) => quote,
        Err(err) => {
            let event = QuoteRejectedEvent {
                reason: err.to_string(),
                timestamp: Utc::now().timestamp(),
            };
            tracing::info!(?event, "quote rejected");
            return Err(err.into());
        }
    };

    let event = QuotePricedEvent {
        quote_id: quote.id,
        panel_count: req.panels.len(),
        accessory_count: req.accessories.len(),
        subtotal_cents: quote.subtotal_cents,
        total_cents: quote.total_cents,
        ship_location: format!("{:?}", quote.ship_location),
        timestamp: Utc::now().timestamp(),
    };
    tracing::info!(?event, "quote priced");

    Ok(Json(quote_response(&quote)))
}

/// Shared by the quote and cart-preview endpoints: one calculator call per
/// panel, then aggregation. Any failure aborts the whole request.
pub fn compute_quote(req: &QuoteRequest, pricing: &PricingMap) -> Result<Quote, QuoteError> {
    let mut breakdowns = Vec::with_capacity(req.panels.len());
    for panel in &req.panels {
        breakdowns.push(price_panel(panel, pricing)?);
    }
    build_quote(breakdowns, &req.accessories, req.ship_location, pricing)
}

pub fn quote_response(quote: &Quote) -> QuoteResponse {
    let lines = quote
        .lines
        .iter()
        .map(|line| match line {
            QuoteLine::Panel(breakdown) => QuoteLineResponse {
                description: breakdown.description.clone(),
                quantity: 1,
                total_cents: breakdown.total_cents,
                display_total: format_usd(breakdown.total_cents),
                detail: serde_json::json!({
                    "base_cents": breakdown.base_cents,
                    "attachment_cents": breakdown.attachment_cents,
                    "canvas_cents": breakdown.canvas_cents,
                    "features": breakdown.features,
                }),
            },
            QuoteLine::Accessory(charge) => QuoteLineResponse {
                description: format!("{:?}", charge.accessory),
                quantity: charge.quantity,
                total_cents: charge.total_cents,
                display_total: format_usd(charge.total_cents),
                detail: serde_json::json!({
                    "unit_cents": charge.unit_cents,
                }),
            },
        })
        .collect();

    QuoteResponse {
        id: quote.id,
        lines,
        subtotal_cents: quote.subtotal_cents,
        ship_location: quote.ship_location,
        shipping_cents: quote.shipping_cents,
        total_cents: quote.total_cents,
        display_total: format_usd(quote.total_cents),
        currency: quote.currency.clone(),
        created_at: quote.created_at,
    }
}
