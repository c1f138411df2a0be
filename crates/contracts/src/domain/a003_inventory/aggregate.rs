use crate::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};

// ============================================================================
// Products
// ============================================================================

/// A stocked product as returned by `/inventory/products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryProduct {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub quantity: u32,
    pub category: String,

    #[serde(rename = "mediaUrls", default)]
    pub media_urls: Vec<String>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// Draft of a product being created or edited in the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InventoryProductDto {
    pub id: Option<String>,
    pub name: String,
    pub sku: String,
    pub price: Option<f64>,
    pub quantity: Option<u32>,
    pub category: String,

    #[serde(rename = "mediaUrls", default)]
    pub media_urls: Vec<String>,
}

impl From<InventoryProduct> for InventoryProductDto {
    fn from(p: InventoryProduct) -> Self {
        Self {
            id: Some(p.id),
            name: p.name,
            sku: p.sku,
            price: Some(p.price),
            quantity: Some(p.quantity),
            category: p.category,
            media_urls: p.media_urls,
        }
    }
}

// ============================================================================
// Catalogs
// ============================================================================

/// A category row inside a catalog; tags are addressed by the nested
/// path `categories.N.tags` in form field errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogCategory {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A product catalog as returned by `/inventory/catalogs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub categories: Vec<CatalogCategory>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// Draft of a catalog being created or edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogDto {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<CatalogCategory>,
}

impl From<Catalog> for CatalogDto {
    fn from(c: Catalog) -> Self {
        Self {
            id: Some(c.id),
            name: c.name,
            categories: c.categories,
        }
    }
}
