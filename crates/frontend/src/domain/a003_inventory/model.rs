use contracts::domain::a003_inventory::aggregate::{
    Catalog, CatalogDto, InventoryProduct, InventoryProductDto,
};
use contracts::shared::{ApiEnvelope, PageData, PageEnvelope};

use crate::shared::request;

// ============================================================================
// Products
// ============================================================================

pub async fn fetch_page(query: &str) -> Result<PageData<InventoryProduct>, String> {
    let envelope: PageEnvelope<InventoryProduct> =
        request::get_json(&format!("/inventory/products{}", query)).await?;
    Ok(envelope.data)
}

/// POST on create, PATCH on update; returns the saved id.
pub async fn save(dto: &InventoryProductDto) -> Result<String, String> {
    let envelope: ApiEnvelope<InventoryProduct> = match &dto.id {
        Some(id) => request::patch_json(&format!("/inventory/products/{}", id), dto).await?,
        None => request::post_json("/inventory/products", dto).await?,
    };
    Ok(envelope.data.id)
}

pub async fn delete(id: &str) -> Result<(), String> {
    request::delete(&format!("/inventory/products/{}", id)).await
}

// ============================================================================
// Catalogs
// ============================================================================

pub async fn fetch_catalogs(query: &str) -> Result<PageData<Catalog>, String> {
    let envelope: PageEnvelope<Catalog> =
        request::get_json(&format!("/inventory/catalogs{}", query)).await?;
    Ok(envelope.data)
}

pub async fn save_catalog(dto: &CatalogDto) -> Result<String, String> {
    let envelope: ApiEnvelope<Catalog> = match &dto.id {
        Some(id) => request::patch_json(&format!("/inventory/catalogs/{}", id), dto).await?,
        None => request::post_json("/inventory/catalogs", dto).await?,
    };
    Ok(envelope.data.id)
}

pub async fn delete_catalog(id: &str) -> Result<(), String> {
    request::delete(&format!("/inventory/catalogs/{}", id)).await
}
