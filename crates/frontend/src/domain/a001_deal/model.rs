use contracts::domain::a001_deal::aggregate::{Campaign, Deal, DealDto, DealStatus};
use contracts::shared::{ApiEnvelope, PageData, PageEnvelope};
use serde::Serialize;

use crate::shared::request;

pub async fn fetch_page(query: &str) -> Result<PageData<Deal>, String> {
    let envelope: PageEnvelope<Deal> = request::get_json(&format!("/deals{}", query)).await?;
    Ok(envelope.data)
}

/// POST on create, PATCH on update; returns the saved id.
pub async fn save(dto: &DealDto) -> Result<String, String> {
    let envelope: ApiEnvelope<Deal> = match &dto.id {
        Some(id) => request::patch_json(&format!("/deals/{}", id), dto).await?,
        None => request::post_json("/deals", dto).await?,
    };
    Ok(envelope.data.id)
}

pub async fn delete(id: &str) -> Result<(), String> {
    request::delete(&format!("/deals/{}", id)).await
}

#[derive(Serialize)]
struct StatusPatch {
    status: DealStatus,
}

/// Request a lifecycle transition; the server owns the state machine.
pub async fn patch_status(id: &str, status: DealStatus) -> Result<Deal, String> {
    let envelope: ApiEnvelope<Deal> =
        request::patch_json(&format!("/deals/{}/status", id), &StatusPatch { status }).await?;
    Ok(envelope.data)
}

pub async fn fetch_campaigns(query: &str) -> Result<PageData<Campaign>, String> {
    let envelope: PageEnvelope<Campaign> =
        request::get_json(&format!("/deals/campaigns{}", query)).await?;
    Ok(envelope.data)
}
