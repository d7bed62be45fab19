use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a cart row represents
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartLineKind {
    Panel,
    Accessory,
    Shipping,
}

/// The generic cart row shape the checkout collaborator persists.
///
/// Only the computed prices and a metadata snapshot survive here; the
/// originating panel configuration is transient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub id: Uuid,
    pub quote_id: Uuid,
    pub kind: CartLineKind,
    pub description: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl CartLine {
    pub fn new(
        quote_id: Uuid,
        kind: CartLineKind,
        description: String,
        unit_price_cents: i64,
        quantity: u32,
        metadata: serde_json::Value,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            quote_id,
            kind,
            description,
            unit_price_cents,
            quantity,
            metadata,
            created_at: Utc::now(),
        }
    }

    /// Extended row price (unit price times quantity)
    pub fn extended_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity as i64
    }
}
