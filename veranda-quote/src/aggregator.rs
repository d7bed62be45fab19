use chrono::Utc;
use uuid::Uuid;

use veranda_catalog::{PricingMap, ShipLocation};

use crate::models::{AccessoryCharge, AccessoryLine, PriceBreakdown, Quote, QuoteLine};
use crate::{QuoteError, QuoteResult};

/// Combine priced panels and independent accessory lines into one quote.
///
/// Line totals are already rounded and authoritative: the subtotal is
/// plain integer-cent addition, never a re-derivation from raw inputs.
/// The shipping table owns every zone-specific rule; this function only
/// performs the lookup and the final addition. Any failure aborts the
/// whole quote; a partially-priced quote is never returned.
pub fn build_quote(
    breakdowns: Vec<PriceBreakdown>,
    accessory_lines: &[AccessoryLine],
    ship_location: ShipLocation,
    pricing: &PricingMap,
) -> QuoteResult<Quote> {
    if breakdowns.is_empty() && accessory_lines.is_empty() {
        return Err(QuoteError::EmptyQuote);
    }

    let mut lines: Vec<QuoteLine> = breakdowns.into_iter().map(QuoteLine::Panel).collect();
    for line in accessory_lines {
        let unit_cents = pricing.accessory_price(line.accessory)?;
        lines.push(QuoteLine::Accessory(AccessoryCharge {
            accessory: line.accessory,
            quantity: line.quantity,
            unit_cents,
            total_cents: unit_cents * line.quantity as i64,
        }));
    }

    let subtotal_cents: i64 = lines.iter().map(QuoteLine::total_cents).sum();
    let shipping_cents = pricing.shipping_estimate(ship_location, subtotal_cents)?;

    Ok(Quote {
        id: Uuid::new_v4(),
        lines,
        subtotal_cents,
        ship_location,
        shipping_cents,
        total_cents: subtotal_cents + shipping_cents,
        currency: "USD".to_string(),
        created_at: Utc::now(),
    })
}
