use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Price snapshot for one city
///
/// The price document is stored opaquely, exactly as the pricing API returned
/// it. A re-fetch for the same city overwrites the previous snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostOfLiving {
    pub city: String,
    pub prices: Value,
    pub fetched_at: DateTime<Utc>,
}
