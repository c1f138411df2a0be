use contracts::domain::a001_deal::aggregate::DealDto;

use crate::shared::validate::{self, RuleSet};
use crate::shared::wizard::{StepDefinition, WizardSchema};

pub const CACHE_KEY: &str = "deals";

pub fn deal_rules() -> RuleSet<DealDto> {
    RuleSet::new(vec![
        validate::required("title", "Title", |d: &DealDto| &d.title),
        validate::required("description", "Description", |d: &DealDto| &d.description),
        validate::required("dealType", "Deal type", |d: &DealDto| &d.deal_type),
        validate::number_in_range(
            "discountPercentage",
            "Discount percentage",
            0.0,
            100.0,
            |d: &DealDto| d.discount_percentage,
        ),
        validate::required("startDate", "Start date", |d: &DealDto| &d.start_date),
        validate::required("endDate", "End date", |d: &DealDto| &d.end_date),
        validate::non_empty_list("productIds", "Select at least one product", |d: &DealDto| {
            d.product_ids.len()
        }),
    ])
}

pub fn deal_schema() -> WizardSchema<DealDto> {
    WizardSchema::new(
        vec![
            StepDefinition {
                label: "Basics",
                fields: &["title", "description", "dealType"],
            },
            StepDefinition {
                label: "Discount & schedule",
                fields: &["discountPercentage", "startDate", "endDate"],
            },
            StepDefinition {
                label: "Products",
                fields: &["productIds"],
            },
            // Pending images are transient UI state, validated nowhere:
            // they only become part of the record in the upload phase.
            StepDefinition {
                label: "Media",
                fields: &[],
            },
        ],
        deal_rules(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::wizard::{FlushRegistry, WizardCore};
    use std::sync::Arc;

    fn valid_dto() -> DealDto {
        DealDto {
            id: None,
            title: "2-for-1 Tuesdays".into(),
            description: "Buy one plate, get one free".into(),
            deal_type: "bogo".into(),
            discount_percentage: Some(50.0),
            start_date: "2025-04-01".into(),
            end_date: "2025-04-30".into(),
            product_ids: vec!["prod-1".into()],
            image_urls: Vec::new(),
        }
    }

    #[test]
    fn valid_deal_passes_whole_record_validation() {
        assert!(deal_rules().validate_all(&valid_dto()).is_empty());
    }

    #[test]
    fn discount_over_100_is_rejected_locally_with_no_request() {
        let mut core = WizardCore::new(Arc::new(deal_schema()));
        let mut dto = valid_dto();
        dto.discount_percentage = Some(150.0);
        core.load(dto);

        // prepare_submit is the gate before any network call: Err means the
        // submit coordinator never invokes the persist hook.
        let flush = FlushRegistry::new();
        assert!(core.prepare_submit(&flush).is_err());
        assert_eq!(
            core.errors.get("discountPercentage").map(String::as_str),
            Some("Discount percentage must be between 0 and 100")
        );
    }

    #[test]
    fn discount_step_gates_on_its_own_fields() {
        let mut core = WizardCore::new(Arc::new(deal_schema()));
        let mut dto = valid_dto();
        dto.discount_percentage = Some(150.0);
        core.load(dto);

        assert!(core.next()); // Basics ok -> step 2
        assert!(!core.next()); // discount out of range keeps the cursor
        assert_eq!(core.step(), 2);
    }

    #[test]
    fn full_walk_reaches_the_media_step() {
        let mut core = WizardCore::new(Arc::new(deal_schema()));
        core.load(valid_dto());
        assert!(core.next());
        assert!(core.next());
        assert!(core.next());
        assert!(core.is_last_step());
    }
}
