use std::collections::HashMap;

use serde::Deserialize;

use veranda_catalog::{
    Accessory, AttachmentCost, CanvasColor, Feature, FeatureRule, HeightBracket, MeshColor,
    MeshFabric, MeshRate, PanelSize, PricingMap, ShipLocation, ShippingTier, TallTier,
    TopAttachment, VinylSeries,
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read pricing tables: {0}")]
    Config(#[from] config::ConfigError),

    #[error("pricing table {0} is empty")]
    EmptyTable(&'static str),

    #[error("duplicate {table} entry for {key}")]
    DuplicateKey { table: &'static str, key: String },

    #[error("shipping tiers for {0} must end with one open-ended bracket")]
    MalformedShippingTiers(String),
}

/// On-disk shape of the pricing tables.
///
/// Tables with composite keys are flat entry lists because a JSON or TOML
/// map key cannot carry a tuple; conversion rebuilds the keyed maps and
/// rejects duplicates rather than letting a later entry win silently.
#[derive(Debug, Deserialize)]
pub struct PricingTablesFile {
    pub mesh_rates: Vec<MeshRateEntry>,
    pub vinyl_rates: Vec<VinylRateEntry>,
    pub canvas_rates: Vec<CanvasRateEntry>,
    pub attachment_costs: Vec<AttachmentCostEntry>,
    pub feature_rules: Vec<FeatureRuleEntry>,
    pub accessory_prices: Vec<AccessoryPriceEntry>,
    pub shipping_tiers: Vec<ShippingTierEntry>,
}

#[derive(Debug, Deserialize)]
pub struct MeshRateEntry {
    pub fabric: MeshFabric,
    pub color: MeshColor,
    pub per_foot_cents: i64,
    pub tall_tier: Option<TallTier>,
}

#[derive(Debug, Deserialize)]
pub struct VinylRateEntry {
    pub series: VinylSeries,
    pub size: PanelSize,
    pub per_foot_cents: i64,
}

#[derive(Debug, Deserialize)]
pub struct CanvasRateEntry {
    pub color: CanvasColor,
    pub per_foot_cents: i64,
}

#[derive(Debug, Deserialize)]
pub struct AttachmentCostEntry {
    pub attachment: TopAttachment,
    pub cost: AttachmentCost,
}

#[derive(Debug, Deserialize)]
pub struct FeatureRuleEntry {
    pub feature: Feature,
    pub size: PanelSize,
    pub flat_cents: i64,
    pub min_bracket: Option<HeightBracket>,
}

#[derive(Debug, Deserialize)]
pub struct AccessoryPriceEntry {
    pub accessory: Accessory,
    pub unit_cents: i64,
}

#[derive(Debug, Deserialize)]
pub struct ShippingTierEntry {
    pub location: ShipLocation,
    pub up_to_cents: Option<i64>,
    pub charge_cents: i64,
}

impl PricingTablesFile {
    pub fn into_pricing_map(self) -> Result<PricingMap, StoreError> {
        if self.mesh_rates.is_empty() {
            return Err(StoreError::EmptyTable("mesh_rates"));
        }
        if self.vinyl_rates.is_empty() {
            return Err(StoreError::EmptyTable("vinyl_rates"));
        }
        if self.canvas_rates.is_empty() {
            return Err(StoreError::EmptyTable("canvas_rates"));
        }
        if self.attachment_costs.is_empty() {
            return Err(StoreError::EmptyTable("attachment_costs"));
        }
        if self.accessory_prices.is_empty() {
            return Err(StoreError::EmptyTable("accessory_prices"));
        }
        if self.shipping_tiers.is_empty() {
            return Err(StoreError::EmptyTable("shipping_tiers"));
        }

        let mut map = PricingMap::default();

        for entry in self.mesh_rates {
            let key = (entry.fabric, entry.color);
            if map
                .mesh_rates
                .insert(
                    key,
                    MeshRate {
                        per_foot_cents: entry.per_foot_cents,
                        tall_tier: entry.tall_tier,
                    },
                )
                .is_some()
            {
                return Err(StoreError::DuplicateKey {
                    table: "mesh_rates",
                    key: format!("{:?}", key),
                });
            }
        }

        for entry in self.vinyl_rates {
            let key = (entry.series, entry.size);
            if map.vinyl_rates.insert(key, entry.per_foot_cents).is_some() {
                return Err(StoreError::DuplicateKey {
                    table: "vinyl_rates",
                    key: format!("{:?}", key),
                });
            }
        }

        for entry in self.canvas_rates {
            if map
                .canvas_rates
                .insert(entry.color, entry.per_foot_cents)
                .is_some()
            {
                return Err(StoreError::DuplicateKey {
                    table: "canvas_rates",
                    key: format!("{:?}", entry.color),
                });
            }
        }

        for entry in self.attachment_costs {
            if map
                .attachment_costs
                .insert(entry.attachment, entry.cost)
                .is_some()
            {
                return Err(StoreError::DuplicateKey {
                    table: "attachment_costs",
                    key: format!("{:?}", entry.attachment),
                });
            }
        }

        for entry in self.feature_rules {
            let rules = map.feature_rules.entry(entry.feature).or_default();
            if rules
                .insert(
                    entry.size,
                    FeatureRule {
                        flat_cents: entry.flat_cents,
                        min_bracket: entry.min_bracket,
                    },
                )
                .is_some()
            {
                return Err(StoreError::DuplicateKey {
                    table: "feature_rules",
                    key: format!("{:?}", (entry.feature, entry.size)),
                });
            }
        }

        for entry in self.accessory_prices {
            if map
                .accessory_prices
                .insert(entry.accessory, entry.unit_cents)
                .is_some()
            {
                return Err(StoreError::DuplicateKey {
                    table: "accessory_prices",
                    key: format!("{:?}", entry.accessory),
                });
            }
        }

        for entry in self.shipping_tiers {
            map.shipping_tiers
                .entry(entry.location)
                .or_default()
                .push(ShippingTier {
                    up_to_cents: entry.up_to_cents,
                    charge_cents: entry.charge_cents,
                });
        }
        for (location, tiers) in &map.shipping_tiers {
            let open_ended = tiers.iter().filter(|t| t.up_to_cents.is_none()).count();
            let last_is_open = tiers.last().is_some_and(|t| t.up_to_cents.is_none());
            if open_ended != 1 || !last_is_open {
                return Err(StoreError::MalformedShippingTiers(format!("{:?}", location)));
            }
        }

        Ok(map)
    }
}

/// Load the pricing map from the configured table file, or fall back to
/// the built-in standard tables.
///
/// A reload always builds a fresh `PricingMap`; callers holding the old
/// one are unaffected.
pub fn load_pricing_map(tables_path: Option<&str>) -> Result<PricingMap, StoreError> {
    match tables_path {
        Some(path) => {
            tracing::info!(path, "loading pricing tables from file");
            let file: PricingTablesFile = config::Config::builder()
                .add_source(config::File::with_name(path))
                .build()?
                .try_deserialize()?;
            file.into_pricing_map()
        }
        None => {
            tracing::info!("no pricing table file configured, using standard tables");
            Ok(PricingMap::standard())
        }
    }
}
