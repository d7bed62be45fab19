use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::brackets::HeightBracket;
use crate::options::{
    Accessory, CanvasColor, Feature, MeshColor, MeshFabric, PanelSize, ShipLocation, TopAttachment,
    VinylSeries,
};

/// A pricing-table miss. Option combinations with no entry must fail the
/// calculation; they are never priced at zero.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no pricing entry in {table} table for {key}")]
pub struct LookupError {
    pub table: &'static str,
    pub key: String,
}

impl LookupError {
    fn new(table: &'static str, key: impl std::fmt::Debug) -> Self {
        Self {
            table,
            key: format!("{:?}", key),
        }
    }
}

/// Per-linear-foot mesh rate, with an optional tall tier that takes over
/// above its height threshold. The tier is table data, not a formula
/// branch: adding one is a data change only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeshRate {
    pub per_foot_cents: i64,
    pub tall_tier: Option<TallTier>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TallTier {
    pub min_height_in: i32,
    pub per_foot_cents: i64,
}

/// Cost model for a top-attachment kind. Tracking amortizes hardware per
/// foot; binding-only is a flat fabrication charge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttachmentCost {
    PerLinearFoot { cents_per_foot: i64 },
    FlatPerPanel { cents: i64 },
}

/// Flat feature surcharge for one panel size. A `(feature, size)` pair with
/// no rule is not offered; `min_bracket` additionally gates the feature on
/// the panel's height bracket (a walk-through door needs headroom).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureRule {
    pub flat_cents: i64,
    pub min_bracket: Option<HeightBracket>,
}

/// One shipping bracket: subtotals up to and including `up_to_cents` pay
/// `charge_cents`. `None` marks the open-ended final bracket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingTier {
    pub up_to_cents: Option<i64>,
    pub charge_cents: i64,
}

/// Immutable lookup tables for one quote session.
///
/// Built once (from the standard data or a configured table file) and
/// shared read-only behind an `Arc`; a table reload constructs a new map so
/// in-flight calculations are unaffected.
#[derive(Debug, Clone, Default)]
pub struct PricingMap {
    pub mesh_rates: HashMap<(MeshFabric, MeshColor), MeshRate>,
    pub vinyl_rates: HashMap<(VinylSeries, PanelSize), i64>,
    pub canvas_rates: HashMap<CanvasColor, i64>,
    pub attachment_costs: HashMap<TopAttachment, AttachmentCost>,
    pub feature_rules: HashMap<Feature, HashMap<PanelSize, FeatureRule>>,
    pub accessory_prices: HashMap<Accessory, i64>,
    pub shipping_tiers: HashMap<ShipLocation, Vec<ShippingTier>>,
}

impl PricingMap {
    /// Mesh per-foot rate for a fabric/color pair, honoring a configured
    /// tall tier when the panel height reaches its threshold.
    pub fn mesh_rate(
        &self,
        fabric: MeshFabric,
        color: MeshColor,
        height_in: f64,
    ) -> Result<i64, LookupError> {
        let rate = self
            .mesh_rates
            .get(&(fabric, color))
            .ok_or_else(|| LookupError::new("mesh_rates", (fabric, color)))?;

        if let Some(tier) = &rate.tall_tier {
            if height_in >= tier.min_height_in as f64 {
                return Ok(tier.per_foot_cents);
            }
        }
        Ok(rate.per_foot_cents)
    }

    pub fn vinyl_rate(&self, series: VinylSeries, size: PanelSize) -> Result<i64, LookupError> {
        self.vinyl_rates
            .get(&(series, size))
            .copied()
            .ok_or_else(|| LookupError::new("vinyl_rates", (series, size)))
    }

    pub fn canvas_rate(&self, color: CanvasColor) -> Result<i64, LookupError> {
        self.canvas_rates
            .get(&color)
            .copied()
            .ok_or_else(|| LookupError::new("canvas_rates", color))
    }

    pub fn attachment_cost(&self, kind: TopAttachment) -> Result<&AttachmentCost, LookupError> {
        self.attachment_costs
            .get(&kind)
            .ok_or_else(|| LookupError::new("attachment_costs", kind))
    }

    /// Per-size rules for a feature. Absence of the feature itself is a
    /// table miss; absence of a particular size within the returned map is
    /// a legality question the calculator decides.
    pub fn feature_rules(
        &self,
        feature: Feature,
    ) -> Result<&HashMap<PanelSize, FeatureRule>, LookupError> {
        self.feature_rules
            .get(&feature)
            .ok_or_else(|| LookupError::new("feature_rules", feature))
    }

    pub fn accessory_price(&self, accessory: Accessory) -> Result<i64, LookupError> {
        self.accessory_prices
            .get(&accessory)
            .copied()
            .ok_or_else(|| LookupError::new("accessory_prices", accessory))
    }

    /// Shipping estimate for a subtotal: first bracket whose bound covers
    /// the subtotal wins. The table, not the caller, owns every
    /// zone-specific rule.
    pub fn shipping_estimate(
        &self,
        location: ShipLocation,
        subtotal_cents: i64,
    ) -> Result<i64, LookupError> {
        let tiers = self
            .shipping_tiers
            .get(&location)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| LookupError::new("shipping_tiers", location))?;

        for tier in tiers {
            match tier.up_to_cents {
                Some(bound) if subtotal_cents <= bound => return Ok(tier.charge_cents),
                Some(_) => continue,
                None => return Ok(tier.charge_cents),
            }
        }
        // Tiers without an open-ended bracket cannot price large subtotals.
        Err(LookupError::new("shipping_tiers", (location, subtotal_cents)))
    }

    /// Built-in standard tables, calibrated against the current fabrication
    /// rate card. A configured table file replaces these wholesale.
    pub fn standard() -> Self {
        let mut mesh_rates = HashMap::new();
        for (fabric, color, per_foot_cents, tall_tier) in [
            (MeshFabric::HeavyMosquito, MeshColor::Black, 450, None),
            (MeshFabric::HeavyMosquito, MeshColor::White, 450, None),
            (MeshFabric::HeavyMosquito, MeshColor::Gray, 475, None),
            (MeshFabric::HeavyMosquito, MeshColor::Brown, 475, None),
            (MeshFabric::NoSeeUm, MeshColor::Black, 525, None),
            (MeshFabric::NoSeeUm, MeshColor::White, 525, None),
            (MeshFabric::NoSeeUm, MeshColor::Gray, 550, None),
            (
                MeshFabric::Solar80,
                MeshColor::Black,
                595,
                Some(TallTier {
                    min_height_in: 120,
                    per_foot_cents: 650,
                }),
            ),
            (
                MeshFabric::Solar80,
                MeshColor::White,
                595,
                Some(TallTier {
                    min_height_in: 120,
                    per_foot_cents: 650,
                }),
            ),
        ] {
            mesh_rates.insert(
                (fabric, color),
                MeshRate {
                    per_foot_cents,
                    tall_tier,
                },
            );
        }

        let mut vinyl_rates = HashMap::new();
        vinyl_rates.insert((VinylSeries::ClearVinyl, PanelSize::Standard), 800);
        vinyl_rates.insert((VinylSeries::ClearVinyl, PanelSize::Oversize), 925);
        vinyl_rates.insert((VinylSeries::TintedVinyl, PanelSize::Standard), 875);
        vinyl_rates.insert((VinylSeries::TintedVinyl, PanelSize::Oversize), 1000);

        let mut canvas_rates = HashMap::new();
        canvas_rates.insert(CanvasColor::White, 200);
        canvas_rates.insert(CanvasColor::Tan, 200);
        canvas_rates.insert(CanvasColor::ForestGreen, 225);
        canvas_rates.insert(CanvasColor::Black, 225);

        let mut attachment_costs = HashMap::new();
        attachment_costs.insert(
            TopAttachment::Tracking,
            AttachmentCost::PerLinearFoot { cents_per_foot: 120 },
        );
        attachment_costs.insert(
            TopAttachment::Velcro,
            AttachmentCost::PerLinearFoot { cents_per_foot: 45 },
        );
        // Bound hem only, no top hardware; included in the base rate.
        attachment_costs.insert(
            TopAttachment::BindingOnly,
            AttachmentCost::FlatPerPanel { cents: 0 },
        );

        let mut door_rules = HashMap::new();
        door_rules.insert(
            PanelSize::Standard,
            FeatureRule {
                flat_cents: 4500,
                min_bracket: Some(HeightBracket::Medium),
            },
        );
        door_rules.insert(
            PanelSize::Oversize,
            FeatureRule {
                flat_cents: 5200,
                min_bracket: Some(HeightBracket::Medium),
            },
        );
        let mut zipper_rules = HashMap::new();
        // Zippers are not fabricated on oversize panels.
        zipper_rules.insert(
            PanelSize::Standard,
            FeatureRule {
                flat_cents: 1800,
                min_bracket: None,
            },
        );
        let mut feature_rules = HashMap::new();
        feature_rules.insert(Feature::Door, door_rules);
        feature_rules.insert(Feature::Zipper, zipper_rules);

        let mut accessory_prices = HashMap::new();
        accessory_prices.insert(Accessory::TrackSection, 1250);
        accessory_prices.insert(Accessory::TrackCarrier, 95);
        accessory_prices.insert(Accessory::VelcroRoll, 1600);
        accessory_prices.insert(Accessory::StorageStrap, 450);

        let mut shipping_tiers = HashMap::new();
        shipping_tiers.insert(
            ShipLocation::Domestic,
            vec![
                ShippingTier {
                    up_to_cents: Some(10_000),
                    charge_cents: 2_500,
                },
                ShippingTier {
                    up_to_cents: Some(50_000),
                    charge_cents: 4_500,
                },
                ShippingTier {
                    up_to_cents: None,
                    charge_cents: 9_500,
                },
            ],
        );
        shipping_tiers.insert(
            ShipLocation::CanadaNear,
            vec![
                ShippingTier {
                    up_to_cents: Some(10_000),
                    charge_cents: 4_000,
                },
                ShippingTier {
                    up_to_cents: Some(50_000),
                    charge_cents: 6_500,
                },
                ShippingTier {
                    up_to_cents: None,
                    charge_cents: 12_000,
                },
            ],
        );
        shipping_tiers.insert(
            ShipLocation::CanadaFar,
            vec![
                ShippingTier {
                    up_to_cents: Some(10_000),
                    charge_cents: 5_500,
                },
                ShippingTier {
                    up_to_cents: Some(50_000),
                    charge_cents: 8_000,
                },
                ShippingTier {
                    up_to_cents: None,
                    charge_cents: 14_500,
                },
            ],
        );
        shipping_tiers.insert(
            ShipLocation::International,
            vec![
                ShippingTier {
                    up_to_cents: Some(50_000),
                    charge_cents: 15_000,
                },
                ShippingTier {
                    up_to_cents: None,
                    charge_cents: 27_500,
                },
            ],
        );

        Self {
            mesh_rates,
            vinyl_rates,
            canvas_rates,
            attachment_costs,
            feature_rules,
            accessory_prices,
            shipping_tiers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_rate_exact_key_match() {
        let map = PricingMap::standard();
        let rate = map
            .mesh_rate(MeshFabric::HeavyMosquito, MeshColor::Black, 96.0)
            .unwrap();
        assert_eq!(rate, 450);
    }

    #[test]
    fn test_mesh_rate_missing_pair_is_an_error() {
        let map = PricingMap::standard();
        let err = map
            .mesh_rate(MeshFabric::Solar80, MeshColor::Brown, 96.0)
            .unwrap_err();
        assert_eq!(err.table, "mesh_rates");
    }

    #[test]
    fn test_tall_tier_kicks_in_at_threshold() {
        let map = PricingMap::standard();
        assert_eq!(
            map.mesh_rate(MeshFabric::Solar80, MeshColor::Black, 119.0)
                .unwrap(),
            595
        );
        assert_eq!(
            map.mesh_rate(MeshFabric::Solar80, MeshColor::Black, 120.0)
                .unwrap(),
            650
        );
    }

    #[test]
    fn test_shipping_bracket_selection() {
        let map = PricingMap::standard();
        assert_eq!(
            map.shipping_estimate(ShipLocation::Domestic, 9_999).unwrap(),
            2_500
        );
        assert_eq!(
            map.shipping_estimate(ShipLocation::Domestic, 10_000).unwrap(),
            2_500
        );
        assert_eq!(
            map.shipping_estimate(ShipLocation::Domestic, 10_001).unwrap(),
            4_500
        );
        assert_eq!(
            map.shipping_estimate(ShipLocation::Domestic, 1_000_000)
                .unwrap(),
            9_500
        );
        assert_eq!(
            map.shipping_estimate(ShipLocation::International, 20_000)
                .unwrap(),
            15_000
        );
    }

    #[test]
    fn test_shipping_missing_location_is_an_error() {
        let map = PricingMap::default();
        assert!(map
            .shipping_estimate(ShipLocation::Domestic, 1_000)
            .is_err());
    }

    #[test]
    fn test_feature_rules_presence() {
        let map = PricingMap::standard();
        let zipper = map.feature_rules(Feature::Zipper).unwrap();
        assert!(zipper.contains_key(&PanelSize::Standard));
        assert!(!zipper.contains_key(&PanelSize::Oversize));
    }

    #[test]
    fn test_accessory_prices() {
        let map = PricingMap::standard();
        assert_eq!(map.accessory_price(Accessory::TrackSection).unwrap(), 1250);
        assert_eq!(map.accessory_price(Accessory::TrackCarrier).unwrap(), 95);
    }
}
