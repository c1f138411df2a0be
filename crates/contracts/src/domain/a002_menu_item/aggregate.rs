use crate::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};

/// A menu item as returned by `/menu-items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,

    pub available: bool,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// Draft of a menu item being created or edited in the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemDto {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub category: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,

    pub available: bool,
}

impl Default for MenuItemDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            price: None,
            category: String::new(),
            tags: Vec::new(),
            image_url: None,
            available: true,
        }
    }
}

impl From<MenuItem> for MenuItemDto {
    fn from(m: MenuItem) -> Self {
        Self {
            id: Some(m.id),
            name: m.name,
            description: m.description,
            price: Some(m.price),
            category: m.category,
            tags: m.tags,
            image_url: m.image_url,
            available: m.available,
        }
    }
}
