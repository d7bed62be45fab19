use serde::{Deserialize, Serialize};

/// Product lines the quote form offers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductLine {
    MeshCurtain,
    VinylPanel,
}

/// Mesh fabrics for curtain panels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeshFabric {
    HeavyMosquito,
    NoSeeUm,
    Solar80,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeshColor {
    Black,
    White,
    Gray,
    Brown,
}

/// Vinyl sheet series for enclosure panels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VinylSeries {
    ClearVinyl,
    TintedVinyl,
}

/// Fabrication size class for vinyl panels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PanelSize {
    Standard,
    Oversize,
}

/// Canvas border colors (vinyl panels only)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanvasColor {
    White,
    Tan,
    ForestGreen,
    Black,
}

/// How the panel hangs at the top edge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopAttachment {
    Tracking,
    Velcro,
    BindingOnly,
}

/// Optional fabricated add-ons
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Feature {
    Door,
    Zipper,
}

/// Hardware sold independently of any panel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Accessory {
    TrackSection,
    TrackCarrier,
    VelcroRoll,
    StorageStrap,
}

/// Shipping zone; only selects a shipping-estimate table entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipLocation {
    Domestic,
    CanadaNear,
    CanadaFar,
    International,
}
