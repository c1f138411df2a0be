use crate::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// A planned event as returned by `/events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,

    #[serde(rename = "contactEmail")]
    pub contact_email: String,

    pub venue: String,

    #[serde(rename = "startsAt")]
    pub starts_at: String,
    #[serde(rename = "endsAt")]
    pub ends_at: String,

    #[serde(rename = "ticketTiers", default)]
    pub ticket_tiers: Vec<TicketTier>,

    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,

    pub status: String,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// One ticket pricing tier of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TicketTier {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Aggregated numbers from `/events/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventStats {
    #[serde(rename = "totalEvents")]
    pub total_events: usize,
    pub upcoming: usize,
    #[serde(rename = "ticketsSold")]
    pub tickets_sold: usize,
    pub revenue: f64,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Draft of an event being created or edited in the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EventDto {
    pub id: Option<String>,
    pub title: String,
    pub description: String,

    #[serde(rename = "contactEmail")]
    pub contact_email: String,

    pub venue: String,

    #[serde(rename = "startsAt")]
    pub starts_at: String,
    #[serde(rename = "endsAt")]
    pub ends_at: String,

    #[serde(rename = "ticketTiers", default)]
    pub ticket_tiers: Vec<TicketTier>,

    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,
}

impl From<Event> for EventDto {
    fn from(e: Event) -> Self {
        Self {
            id: Some(e.id),
            title: e.title,
            description: e.description,
            contact_email: e.contact_email,
            venue: e.venue,
            starts_at: e.starts_at,
            ends_at: e.ends_at,
            ticket_tiers: e.ticket_tiers,
            image_urls: e.image_urls,
        }
    }
}
