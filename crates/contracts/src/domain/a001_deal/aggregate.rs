use crate::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};

// ============================================================================
// Lifecycle
// ============================================================================

/// Deal lifecycle. Transitions are server-owned; the client only requests
/// them through explicit status patches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealStatus {
    Draft,
    Active,
    Paused,
    Archived,
}

impl DealStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DealStatus::Draft => "Draft",
            DealStatus::Active => "Active",
            DealStatus::Paused => "Paused",
            DealStatus::Archived => "Archived",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A merchant deal as returned by `/deals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub title: String,
    pub description: String,

    #[serde(rename = "dealType")]
    pub deal_type: String,

    #[serde(rename = "discountPercentage")]
    pub discount_percentage: f64,

    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,

    #[serde(rename = "productIds", default)]
    pub product_ids: Vec<String>,

    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,

    pub status: DealStatus,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// A marketing campaign grouping several deals (`/deals/campaigns`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,

    #[serde(rename = "dealIds", default)]
    pub deal_ids: Vec<String>,

    #[serde(rename = "startsAt")]
    pub starts_at: String,
    #[serde(rename = "endsAt")]
    pub ends_at: String,

    pub status: String,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Draft of a deal being created or edited in the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DealDto {
    pub id: Option<String>,
    pub title: String,
    pub description: String,

    #[serde(rename = "dealType")]
    pub deal_type: String,

    #[serde(rename = "discountPercentage")]
    pub discount_percentage: Option<f64>,

    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,

    #[serde(rename = "productIds", default)]
    pub product_ids: Vec<String>,

    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,
}

impl From<Deal> for DealDto {
    fn from(d: Deal) -> Self {
        Self {
            id: Some(d.id),
            title: d.title,
            description: d.description,
            deal_type: d.deal_type,
            discount_percentage: Some(d.discount_percentage),
            start_date: d.start_date,
            end_date: d.end_date,
            product_ids: d.product_ids,
            image_urls: d.image_urls,
        }
    }
}
