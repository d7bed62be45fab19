use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct QuotePricedEvent {
    pub quote_id: Uuid,
    pub panel_count: usize,
    pub accessory_count: usize,
    pub subtotal_cents: i64,
    pub total_cents: i64,
    pub ship_location: String,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct QuoteRejectedEvent {
    pub reason: String,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct CartExportedEvent {
    pub quote_id: Uuid,
    pub line_count: usize,
    pub total_cents: i64,
    pub timestamp: i64,
}
