use serde_json::json;

use veranda_quote::{Quote, QuoteLine};
use veranda_shared::format_usd;

use crate::models::{CartLine, CartLineKind};

/// Map a computed quote into the generic cart rows consumed by checkout.
///
/// One row per panel breakdown (quantity 1), one per accessory charge, and
/// a trailing shipping row. The sum of extended row prices equals the
/// quote's grand total.
pub fn quote_to_cart_lines(quote: &Quote) -> Vec<CartLine> {
    let mut rows = Vec::with_capacity(quote.lines.len() + 1);

    for line in &quote.lines {
        match line {
            QuoteLine::Panel(breakdown) => {
                rows.push(CartLine::new(
                    quote.id,
                    CartLineKind::Panel,
                    breakdown.description.clone(),
                    breakdown.total_cents,
                    1,
                    json!({
                        "line": breakdown.line,
                        "width_ft": breakdown.width_ft,
                        "height_in": breakdown.height_in,
                        "base_cents": breakdown.base_cents,
                        "attachment_cents": breakdown.attachment_cents,
                        "canvas_cents": breakdown.canvas_cents,
                        "features": breakdown.features,
                        "display_total": format_usd(breakdown.total_cents),
                    }),
                ));
            }
            QuoteLine::Accessory(charge) => {
                rows.push(CartLine::new(
                    quote.id,
                    CartLineKind::Accessory,
                    format!("{:?}", charge.accessory),
                    charge.unit_cents,
                    charge.quantity,
                    json!({
                        "accessory": charge.accessory,
                        "display_unit": format_usd(charge.unit_cents),
                    }),
                ));
            }
        }
    }

    rows.push(CartLine::new(
        quote.id,
        CartLineKind::Shipping,
        format!("Shipping estimate ({:?})", quote.ship_location),
        quote.shipping_cents,
        1,
        json!({
            "ship_location": quote.ship_location,
            "subtotal_cents": quote.subtotal_cents,
        }),
    ));

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use veranda_catalog::{
        Accessory, MeshColor, MeshFabric, PricingMap, ShipLocation, TopAttachment,
    };
    use veranda_quote::{
        build_quote, price_mesh_panel, AccessoryLine, MeshPanel, PanelDimensions,
    };

    fn sample_quote(map: &PricingMap) -> Quote {
        let breakdown = price_mesh_panel(
            &MeshPanel {
                dimensions: PanelDimensions {
                    width_feet: 20.0,
                    width_inches: 0.0,
                    height_inches: 96.0,
                },
                fabric: MeshFabric::HeavyMosquito,
                color: MeshColor::Black,
                attachment: TopAttachment::Tracking,
            },
            map,
        )
        .unwrap();
        let accessories = [AccessoryLine {
            accessory: Accessory::TrackCarrier,
            quantity: 24,
        }];
        build_quote(vec![breakdown], &accessories, ShipLocation::Domestic, map).unwrap()
    }

    #[test]
    fn test_rows_sum_to_the_grand_total() {
        let map = PricingMap::standard();
        let quote = sample_quote(&map);
        let rows = quote_to_cart_lines(&quote);

        let sum: i64 = rows.iter().map(CartLine::extended_cents).sum();
        assert_eq!(sum, quote.total_cents);
    }

    #[test]
    fn test_row_shapes() {
        let map = PricingMap::standard();
        let quote = sample_quote(&map);
        let rows = quote_to_cart_lines(&quote);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].kind, CartLineKind::Panel);
        assert_eq!(rows[0].quantity, 1);
        assert_eq!(rows[0].unit_price_cents, 11_400);
        assert_eq!(rows[0].metadata["display_total"], "$114.00");

        assert_eq!(rows[1].kind, CartLineKind::Accessory);
        assert_eq!(rows[1].quantity, 24);
        assert_eq!(rows[1].unit_price_cents, 95);

        assert_eq!(rows[2].kind, CartLineKind::Shipping);
        assert_eq!(rows[2].metadata["subtotal_cents"], quote.subtotal_cents);
    }

    #[test]
    fn test_rows_reference_the_quote() {
        let map = PricingMap::standard();
        let quote = sample_quote(&map);
        for row in quote_to_cart_lines(&quote) {
            assert_eq!(row.quote_id, quote.id);
        }
    }
}
