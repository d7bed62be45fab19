use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use veranda_catalog::{
    Accessory, CanvasColor, Feature, MeshColor, MeshFabric, PanelSize, ProductLine, ShipLocation,
    TopAttachment, VinylSeries,
};

/// Raw user-entered panel dimensions, prior to normalization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PanelDimensions {
    pub width_feet: f64,
    pub width_inches: f64,
    pub height_inches: f64,
}

/// One mesh curtain panel as configured on the quote form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeshPanel {
    #[serde(flatten)]
    pub dimensions: PanelDimensions,
    pub fabric: MeshFabric,
    pub color: MeshColor,
    pub attachment: TopAttachment,
}

/// One vinyl enclosure panel as configured on the quote form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VinylPanel {
    #[serde(flatten)]
    pub dimensions: PanelDimensions,
    pub series: VinylSeries,
    pub size: PanelSize,
    pub canvas: CanvasColor,
    pub attachment: TopAttachment,
    #[serde(default)]
    pub has_door: bool,
    #[serde(default)]
    pub has_zipper: bool,
}

/// A panel configuration, tagged by product line. Transient: only the
/// computed breakdown outlives the pricing call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "product_line", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PanelConfiguration {
    MeshCurtain(MeshPanel),
    VinylPanel(VinylPanel),
}

/// A flat surcharge applied for one selected feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCharge {
    pub feature: Feature,
    pub flat_cents: i64,
}

/// The priced breakdown of a single panel.
///
/// Component costs are kept unrounded; `total_cents` is the one rounded
/// figure, produced half-up over the component sum. A breakdown is never
/// recomputed in place: changing any option prices a new one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceBreakdown {
    pub line: ProductLine,
    pub description: String,
    pub width_ft: f64,
    pub height_in: f64,
    /// Material cost before rounding, in cents
    pub base_cents: f64,
    /// Top-attachment hardware cost before rounding, in cents
    pub attachment_cents: f64,
    /// Canvas border cost before rounding, in cents; zero for mesh
    pub canvas_cents: f64,
    pub features: Vec<FeatureCharge>,
    /// Rounded line total; the authoritative figure for aggregation
    pub total_cents: i64,
}

/// Hardware ordered independently of any panel, as requested.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AccessoryLine {
    pub accessory: Accessory,
    pub quantity: u32,
}

/// An accessory line after pricing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessoryCharge {
    pub accessory: Accessory,
    pub quantity: u32,
    pub unit_cents: i64,
    pub total_cents: i64,
}

/// One line of a quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteLine {
    Panel(PriceBreakdown),
    Accessory(AccessoryCharge),
}

impl QuoteLine {
    pub fn total_cents(&self) -> i64 {
        match self {
            QuoteLine::Panel(breakdown) => breakdown.total_cents,
            QuoteLine::Accessory(charge) => charge.total_cents,
        }
    }
}

/// A complete priced quote. Immutable once built; a changed input produces
/// a new quote, never an edit of this one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub id: Uuid,
    pub lines: Vec<QuoteLine>,
    /// Exact integer sum of the line totals
    pub subtotal_cents: i64,
    pub ship_location: ShipLocation,
    pub shipping_cents: i64,
    pub total_cents: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}
