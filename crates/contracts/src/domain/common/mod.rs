use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-owned lifecycle timestamps, present on every persisted resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityMetadata {
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}
