use contracts::domain::a002_menu_item::aggregate::{MenuItem, MenuItemDto};
use contracts::shared::{ApiEnvelope, PageData, PageEnvelope};

use crate::shared::request;

pub async fn fetch_page(query: &str) -> Result<PageData<MenuItem>, String> {
    let envelope: PageEnvelope<MenuItem> =
        request::get_json(&format!("/menu-items{}", query)).await?;
    Ok(envelope.data)
}

/// POST on create, PATCH on update; returns the saved id.
pub async fn save(dto: &MenuItemDto) -> Result<String, String> {
    let envelope: ApiEnvelope<MenuItem> = match &dto.id {
        Some(id) => request::patch_json(&format!("/menu-items/{}", id), dto).await?,
        None => request::post_json("/menu-items", dto).await?,
    };
    Ok(envelope.data.id)
}

pub async fn delete(id: &str) -> Result<(), String> {
    request::delete(&format!("/menu-items/{}", id)).await
}
