use contracts::domain::a002_menu_item::aggregate::MenuItemDto;

use crate::shared::validate::{self, RuleSet};
use crate::shared::wizard::{StepDefinition, WizardSchema};

pub const CACHE_KEY: &str = "menu-items";

pub fn menu_item_rules() -> RuleSet<MenuItemDto> {
    RuleSet::new(vec![
        validate::required("name", "Name", |d: &MenuItemDto| &d.name),
        validate::required("description", "Description", |d: &MenuItemDto| &d.description),
        validate::required("category", "Category", |d: &MenuItemDto| &d.category),
        validate::number_in_range("price", "Price", 0.01, 10_000_000.0, |d: &MenuItemDto| {
            d.price
        }),
    ])
}

/// Tags live on the terminal step so its staged draft is still mounted (and
/// its flush callback still registered) when the submit coordinator runs.
pub fn menu_item_schema() -> WizardSchema<MenuItemDto> {
    WizardSchema::new(
        vec![
            StepDefinition {
                label: "Item",
                fields: &["name", "description", "category"],
            },
            StepDefinition {
                label: "Media",
                fields: &[],
            },
            StepDefinition {
                label: "Pricing & tags",
                fields: &["price"],
            },
        ],
        menu_item_rules(),
    )
}

/// Commit a staged tag draft into the item's tag list.
///
/// A blank draft is a no-op, so force-flushing a half-typed input right
/// before submit never appends an empty row. Duplicates are dropped.
pub fn flush_tag(draft: &str, dto: &mut MenuItemDto) {
    let tag = draft.trim();
    if tag.is_empty() {
        return;
    }
    if !dto.tags.iter().any(|t| t == tag) {
        dto.tags.push(tag.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto_with_tags(tags: &[&str]) -> MenuItemDto {
        MenuItemDto {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..MenuItemDto::default()
        }
    }

    #[test]
    fn blank_tag_draft_does_not_append() {
        let mut dto = dto_with_tags(&["spicy"]);
        flush_tag("", &mut dto);
        flush_tag("   ", &mut dto);
        assert_eq!(dto.tags, vec!["spicy".to_string()]);
    }

    #[test]
    fn tag_draft_is_trimmed_and_deduplicated() {
        let mut dto = dto_with_tags(&["spicy"]);
        flush_tag("  vegan ", &mut dto);
        flush_tag("spicy", &mut dto);
        assert_eq!(dto.tags, vec!["spicy".to_string(), "vegan".to_string()]);
    }

    #[test]
    fn price_must_be_positive() {
        let mut dto = MenuItemDto {
            name: "Jollof rice".into(),
            description: "Party size".into(),
            category: "mains".into(),
            price: Some(0.0),
            ..MenuItemDto::default()
        };
        let errors = menu_item_rules().validate_all(&dto);
        assert!(errors.contains_key("price"));

        dto.price = Some(2500.0);
        assert!(menu_item_rules().validate_all(&dto).is_empty());
    }
}
