use std::sync::Arc;

use veranda_catalog::PricingMap;

/// Shared application state. The pricing map is immutable after startup;
/// a table reload would swap in a new `Arc` rather than mutate this one.
#[derive(Clone)]
pub struct AppState {
    pub pricing: Arc<PricingMap>,
}
