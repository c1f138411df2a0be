use contracts::domain::a004_event::aggregate::{Event, EventDto, EventStats};
use contracts::shared::{ApiEnvelope, PageData, PageEnvelope};

use crate::shared::request;

pub async fn fetch_page(query: &str) -> Result<PageData<Event>, String> {
    let envelope: PageEnvelope<Event> = request::get_json(&format!("/events{}", query)).await?;
    Ok(envelope.data)
}

pub async fn fetch_stats() -> Result<EventStats, String> {
    let envelope: ApiEnvelope<EventStats> = request::get_json("/events/stats").await?;
    Ok(envelope.data)
}

/// POST on create, PATCH on update; returns the saved id.
pub async fn save(dto: &EventDto) -> Result<String, String> {
    let envelope: ApiEnvelope<Event> = match &dto.id {
        Some(id) => request::patch_json(&format!("/events/{}", id), dto).await?,
        None => request::post_json("/events", dto).await?,
    };
    Ok(envelope.data.id)
}

pub async fn delete(id: &str) -> Result<(), String> {
    request::delete(&format!("/events/{}", id)).await
}
