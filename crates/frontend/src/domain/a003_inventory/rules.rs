use contracts::domain::a003_inventory::aggregate::{CatalogDto, InventoryProductDto};

use crate::shared::validate::{self, FieldErrors, RuleSet};
use crate::shared::wizard::{StepDefinition, WizardSchema};

pub const PRODUCTS_CACHE_KEY: &str = "inventory-products";
pub const CATALOGS_CACHE_KEY: &str = "inventory-catalogs";

pub fn product_rules() -> RuleSet<InventoryProductDto> {
    RuleSet::new(vec![
        validate::required("name", "Name", |d: &InventoryProductDto| &d.name),
        validate::required("sku", "SKU", |d: &InventoryProductDto| &d.sku),
        validate::required("category", "Category", |d: &InventoryProductDto| &d.category),
        validate::number_in_range(
            "price",
            "Price",
            0.01,
            100_000_000.0,
            |d: &InventoryProductDto| d.price,
        ),
        validate::number_in_range(
            "quantity",
            "Quantity",
            0.0,
            1_000_000.0,
            |d: &InventoryProductDto| d.quantity.map(|q| q as f64),
        ),
    ])
}

pub fn product_schema() -> WizardSchema<InventoryProductDto> {
    WizardSchema::new(
        vec![
            StepDefinition {
                label: "Product",
                fields: &["name", "sku", "category"],
            },
            StepDefinition {
                label: "Stock & price",
                fields: &["price", "quantity"],
            },
            StepDefinition {
                label: "Media",
                fields: &[],
            },
        ],
        product_rules(),
    )
}

/// Catalog validation with indexed field paths (`categories.0.name`), so a
/// violation inside a nested row maps back to that row's inputs.
pub fn validate_catalog(dto: &CatalogDto) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if dto.name.trim().is_empty() {
        errors.insert("name".to_string(), "Catalog name is required".to_string());
    }
    if dto.categories.is_empty() {
        errors.insert(
            "categories".to_string(),
            "Add at least one category".to_string(),
        );
    }
    for (index, category) in dto.categories.iter().enumerate() {
        if category.name.trim().is_empty() {
            errors.insert(
                format!("categories.{}.name", index),
                "Category name is required".to_string(),
            );
        }
        if category.tags.is_empty() {
            errors.insert(
                format!("categories.{}.tags", index),
                "Add at least one tag".to_string(),
            );
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_inventory::aggregate::CatalogCategory;

    #[test]
    fn product_quantity_and_price_are_bounded() {
        let mut dto = InventoryProductDto {
            name: "Chapman syrup".into(),
            sku: "CHP-001".into(),
            category: "drinks".into(),
            price: Some(1200.0),
            quantity: Some(40),
            ..InventoryProductDto::default()
        };
        assert!(product_rules().validate_all(&dto).is_empty());

        dto.price = None;
        dto.quantity = None;
        let errors = product_rules().validate_all(&dto);
        assert!(errors.contains_key("price"));
        assert!(errors.contains_key("quantity"));
    }

    #[test]
    fn catalog_violations_carry_indexed_paths() {
        let dto = CatalogDto {
            id: None,
            name: "Main catalog".into(),
            categories: vec![
                CatalogCategory {
                    name: "Grills".into(),
                    tags: vec!["suya".into()],
                },
                CatalogCategory {
                    name: "".into(),
                    tags: vec![],
                },
            ],
        };
        let errors = validate_catalog(&dto);
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key("categories.1.name"));
        assert!(errors.contains_key("categories.1.tags"));
    }

    #[test]
    fn empty_catalog_needs_a_category() {
        let dto = CatalogDto {
            id: None,
            name: "Empty".into(),
            categories: vec![],
        };
        assert!(validate_catalog(&dto).contains_key("categories"));
    }
}
