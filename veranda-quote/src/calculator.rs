use veranda_catalog::{classify_height, AttachmentCost, Feature, PricingMap, ProductLine};
use veranda_shared::round_half_up_cents;

use crate::dimensions::normalize_dimensions;
use crate::models::{FeatureCharge, MeshPanel, PanelConfiguration, PriceBreakdown, VinylPanel};
use crate::{QuoteError, QuoteResult};

/// Price one panel of either product line.
pub fn price_panel(config: &PanelConfiguration, pricing: &PricingMap) -> QuoteResult<PriceBreakdown> {
    match config {
        PanelConfiguration::MeshCurtain(panel) => price_mesh_panel(panel, pricing),
        PanelConfiguration::VinylPanel(panel) => price_vinyl_panel(panel, pricing),
    }
}

/// Price a mesh curtain panel.
///
/// Base cost is width times the per-foot rate for the fabric/color pair
/// (the rate itself decides whether a tall tier applies); the attachment
/// charge follows its table cost model. Height never enters the formula
/// directly.
pub fn price_mesh_panel(panel: &MeshPanel, pricing: &PricingMap) -> QuoteResult<PriceBreakdown> {
    let dims = normalize_dimensions(
        panel.dimensions.width_feet,
        panel.dimensions.width_inches,
        panel.dimensions.height_inches,
    )?;

    // All table lookups before any arithmetic.
    let rate = pricing.mesh_rate(panel.fabric, panel.color, dims.height_in)?;
    let attachment_cost = pricing.attachment_cost(panel.attachment)?;

    let base_cents = dims.width_ft * rate as f64;
    let attachment_cents = attachment_charge(attachment_cost, dims.width_ft);
    let total_cents = round_half_up_cents(base_cents + attachment_cents);

    Ok(PriceBreakdown {
        line: ProductLine::MeshCurtain,
        description: format!(
            "{:?} {:?} mesh curtain, {:.2} ft x {:.0} in, {:?} top",
            panel.fabric, panel.color, dims.width_ft, dims.height_in, panel.attachment
        ),
        width_ft: dims.width_ft,
        height_in: dims.height_in,
        base_cents,
        attachment_cents,
        canvas_cents: 0.0,
        features: Vec::new(),
        total_cents,
    })
}

/// Price a vinyl enclosure panel.
///
/// The height bracket decides how many canvas runs the panel gets; door
/// and zipper surcharges are flat, independent, and refused outright when
/// the feature table has no rule for the panel size or the bracket is
/// below the rule's minimum.
pub fn price_vinyl_panel(panel: &VinylPanel, pricing: &PricingMap) -> QuoteResult<PriceBreakdown> {
    let dims = normalize_dimensions(
        panel.dimensions.width_feet,
        panel.dimensions.width_inches,
        panel.dimensions.height_inches,
    )?;
    let (bracket, canvas_edges) = classify_height(dims.height_in);

    // All table lookups before any arithmetic. The canvas color is part of
    // the configuration, so it must resolve even when the bracket needs no
    // canvas run.
    let rate = pricing.vinyl_rate(panel.series, panel.size)?;
    let canvas_rate = pricing.canvas_rate(panel.canvas)?;
    let attachment_cost = pricing.attachment_cost(panel.attachment)?;

    let mut features = Vec::new();
    for (selected, feature) in [(panel.has_door, Feature::Door), (panel.has_zipper, Feature::Zipper)]
    {
        if !selected {
            continue;
        }
        let rules = pricing.feature_rules(feature)?;
        let rule = rules.get(&panel.size).ok_or(QuoteError::UnsupportedFeature {
            feature,
            size: panel.size,
        })?;
        if let Some(min_bracket) = rule.min_bracket {
            if bracket < min_bracket {
                return Err(QuoteError::UnsupportedFeature {
                    feature,
                    size: panel.size,
                });
            }
        }
        features.push(FeatureCharge {
            feature,
            flat_cents: rule.flat_cents,
        });
    }

    let base_cents = dims.width_ft * rate as f64;
    let canvas_cents = dims.width_ft * canvas_rate as f64 * canvas_edges.count() as f64;
    let attachment_cents = attachment_charge(attachment_cost, dims.width_ft);
    let feature_cents: i64 = features.iter().map(|f| f.flat_cents).sum();

    let total_cents =
        round_half_up_cents(base_cents + canvas_cents + attachment_cents + feature_cents as f64);

    Ok(PriceBreakdown {
        line: ProductLine::VinylPanel,
        description: format!(
            "{:?} {:?} vinyl panel, {:.2} ft x {:.0} in, {:?} canvas, {:?} top",
            panel.series, panel.size, dims.width_ft, dims.height_in, panel.canvas, panel.attachment
        ),
        width_ft: dims.width_ft,
        height_in: dims.height_in,
        base_cents,
        attachment_cents,
        canvas_cents,
        features,
        total_cents,
    })
}

fn attachment_charge(cost: &AttachmentCost, width_ft: f64) -> f64 {
    match cost {
        AttachmentCost::PerLinearFoot { cents_per_foot } => width_ft * *cents_per_foot as f64,
        AttachmentCost::FlatPerPanel { cents } => *cents as f64,
    }
}
