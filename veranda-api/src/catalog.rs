use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/catalog", get(get_catalog))
}

/// GET /v1/catalog
/// The option vocabulary and current rates, for rendering the quote form
pub async fn get_catalog(State(state): State<AppState>) -> Json<serde_json::Value> {
    let pricing = &state.pricing;

    let mut mesh_rates: Vec<_> = pricing
        .mesh_rates
        .iter()
        .map(|((fabric, color), rate)| {
            (
                format!("{:?}/{:?}", fabric, color),
                json!({
                    "fabric": fabric,
                    "color": color,
                    "per_foot_cents": rate.per_foot_cents,
                    "tall_tier": rate.tall_tier,
                }),
            )
        })
        .collect();
    mesh_rates.sort_by(|a, b| a.0.cmp(&b.0));

    let mut vinyl_rates: Vec<_> = pricing
        .vinyl_rates
        .iter()
        .map(|((series, size), cents)| {
            (
                format!("{:?}/{:?}", series, size),
                json!({
                    "series": series,
                    "size": size,
                    "per_foot_cents": cents,
                }),
            )
        })
        .collect();
    vinyl_rates.sort_by(|a, b| a.0.cmp(&b.0));

    let mut canvas_rates: Vec<_> = pricing
        .canvas_rates
        .iter()
        .map(|(color, cents)| {
            (
                format!("{:?}", color),
                json!({ "color": color, "per_foot_cents": cents }),
            )
        })
        .collect();
    canvas_rates.sort_by(|a, b| a.0.cmp(&b.0));

    let mut attachments: Vec<_> = pricing
        .attachment_costs
        .iter()
        .map(|(kind, cost)| {
            (
                format!("{:?}", kind),
                json!({ "attachment": kind, "cost": cost }),
            )
        })
        .collect();
    attachments.sort_by(|a, b| a.0.cmp(&b.0));

    let mut features: Vec<_> = pricing
        .feature_rules
        .iter()
        .flat_map(|(feature, rules)| {
            rules.iter().map(move |(size, rule)| {
                (
                    format!("{:?}/{:?}", feature, size),
                    json!({
                        "feature": feature,
                        "size": size,
                        "flat_cents": rule.flat_cents,
                        "min_bracket": rule.min_bracket,
                    }),
                )
            })
        })
        .collect();
    features.sort_by(|a, b| a.0.cmp(&b.0));

    let mut accessories: Vec<_> = pricing
        .accessory_prices
        .iter()
        .map(|(accessory, cents)| {
            (
                format!("{:?}", accessory),
                json!({ "accessory": accessory, "unit_cents": cents }),
            )
        })
        .collect();
    accessories.sort_by(|a, b| a.0.cmp(&b.0));

    let mut ship_locations: Vec<_> = pricing
        .shipping_tiers
        .iter()
        .map(|(location, tiers)| {
            (
                format!("{:?}", location),
                json!({ "location": location, "tiers": tiers }),
            )
        })
        .collect();
    ship_locations.sort_by(|a, b| a.0.cmp(&b.0));

    let strip = |entries: Vec<(String, serde_json::Value)>| {
        entries.into_iter().map(|(_, v)| v).collect::<Vec<_>>()
    };

    Json(json!({
        "mesh_rates": strip(mesh_rates),
        "vinyl_rates": strip(vinyl_rates),
        "canvas_rates": strip(canvas_rates),
        "attachment_costs": strip(attachments),
        "feature_rules": strip(features),
        "accessory_prices": strip(accessories),
        "shipping_tiers": strip(ship_locations),
    }))
}
