use contracts::domain::a005_place::aggregate::{ClaimRequest, Facility, Place, PlaceDto};
use contracts::shared::{ApiEnvelope, PageData, PageEnvelope};

use crate::shared::request;

pub async fn fetch_page(query: &str) -> Result<PageData<Place>, String> {
    let envelope: PageEnvelope<Place> = request::get_json(&format!("/places{}", query)).await?;
    Ok(envelope.data)
}

/// POST on create, PATCH on update; returns the saved id.
pub async fn save(dto: &PlaceDto) -> Result<String, String> {
    let envelope: ApiEnvelope<Place> = match &dto.id {
        Some(id) => request::patch_json(&format!("/places/{}", id), dto).await?,
        None => request::post_json("/places", dto).await?,
    };
    Ok(envelope.data.id)
}

pub async fn delete(id: &str) -> Result<(), String> {
    request::delete(&format!("/places/{}", id)).await
}

/// The selectable facility catalog (not paginated).
pub async fn fetch_facilities() -> Result<Vec<Facility>, String> {
    let envelope: ApiEnvelope<Vec<Facility>> = request::get_json("/places/facilities").await?;
    Ok(envelope.data)
}

/// Claim an existing place for this merchant.
pub async fn claim(place_id: &str, merchant_note: String) -> Result<String, String> {
    let body = ClaimRequest { merchant_note };
    let envelope: ApiEnvelope<Place> =
        request::post_json(&format!("/places/{}/claim", place_id), &body).await?;
    Ok(envelope.data.id)
}
