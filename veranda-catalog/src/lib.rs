pub mod brackets;
pub mod options;
pub mod tables;

pub use brackets::{classify_height, CanvasEdges, HeightBracket};
pub use options::{
    Accessory, CanvasColor, Feature, MeshColor, MeshFabric, PanelSize, ProductLine, ShipLocation,
    TopAttachment, VinylSeries,
};
pub use tables::{
    AttachmentCost, FeatureRule, LookupError, MeshRate, PricingMap, ShippingTier, TallTier,
};
