pub mod aggregator;
pub mod calculator;
pub mod dimensions;
pub mod models;

pub use aggregator::build_quote;
pub use calculator::{price_mesh_panel, price_panel, price_vinyl_panel};
pub use dimensions::{normalize_dimensions, NormalizedDimensions};
pub use models::{
    AccessoryCharge, AccessoryLine, FeatureCharge, MeshPanel, PanelConfiguration, PanelDimensions,
    PriceBreakdown, Quote, QuoteLine, VinylPanel,
};

use veranda_catalog::{Feature, LookupError, PanelSize};

/// Failures the engine can report. All are detected before any arithmetic
/// touches the offending input, and none are ever defaulted to a zero
/// price.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error(transparent)]
    UnknownPricingKey(#[from] LookupError),

    #[error("{feature:?} is not available on {size:?} panels with the selected height")]
    UnsupportedFeature { feature: Feature, size: PanelSize },

    #[error("a quote must contain at least one line item")]
    EmptyQuote,
}

pub type QuoteResult<T> = Result<T, QuoteError>;
