use crate::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// A venue ("place") as returned by `/places`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: String,

    #[serde(rename = "placeType")]
    pub place_type: String,

    pub description: String,

    #[serde(rename = "facilityIds", default)]
    pub facility_ids: Vec<String>,

    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,

    pub claimed: bool,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// A selectable facility from `/places/facilities` (wifi, parking, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    pub id: String,
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Draft of a place being created or edited in the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlaceDto {
    pub id: Option<String>,
    pub name: String,
    pub address: String,

    #[serde(rename = "placeType")]
    pub place_type: String,

    pub description: String,

    #[serde(rename = "facilityIds", default)]
    pub facility_ids: Vec<String>,

    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,
}

impl From<Place> for PlaceDto {
    fn from(p: Place) -> Self {
        Self {
            id: Some(p.id),
            name: p.name,
            address: p.address,
            place_type: p.place_type,
            description: p.description,
            facility_ids: p.facility_ids,
            image_urls: p.image_urls,
        }
    }
}

/// Payload for `POST /places/{id}/claim`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClaimRequest {
    #[serde(rename = "merchantNote")]
    pub merchant_note: String,
}
