use contracts::domain::a005_place::aggregate::PlaceDto;

use crate::shared::validate::{self, RuleSet};
use crate::shared::wizard::{StepDefinition, WizardSchema};

pub const CACHE_KEY: &str = "places";

pub fn place_rules() -> RuleSet<PlaceDto> {
    RuleSet::new(vec![
        validate::required("name", "Name", |d: &PlaceDto| &d.name),
        validate::required("address", "Address", |d: &PlaceDto| &d.address),
        validate::required("placeType", "Place type", |d: &PlaceDto| &d.place_type),
        validate::required("description", "Description", |d: &PlaceDto| &d.description),
    ])
}

pub fn place_schema() -> WizardSchema<PlaceDto> {
    WizardSchema::new(
        vec![
            StepDefinition {
                label: "Basics",
                fields: &["name", "address", "placeType"],
            },
            StepDefinition {
                label: "Details",
                fields: &["description"],
            },
            StepDefinition {
                label: "Facilities",
                fields: &[],
            },
            StepDefinition {
                label: "Media",
                fields: &[],
            },
        ],
        place_rules(),
    )
}

// ============================================================================
// Find & claim
// ============================================================================

/// Draft of a claim: which place, plus a note for the reviewer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClaimDraft {
    pub place_id: String,
    pub place_name: String,
    pub merchant_note: String,
}

pub fn claim_rules() -> RuleSet<ClaimDraft> {
    RuleSet::new(vec![
        validate::required("placeId", "A place selection", |d: &ClaimDraft| &d.place_id),
        validate::required("merchantNote", "A note for the reviewer", |d: &ClaimDraft| {
            &d.merchant_note
        }),
    ])
}

/// The claim flow is the jump-enabled wizard variant: picking a search
/// result jumps straight to the claim step instead of walking `next()`.
pub fn claim_schema() -> WizardSchema<ClaimDraft> {
    WizardSchema::new(
        vec![
            StepDefinition {
                label: "Find place",
                fields: &["placeId"],
            },
            StepDefinition {
                label: "Claim",
                fields: &["merchantNote"],
            },
        ],
        claim_rules(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::wizard::{FlushRegistry, WizardCore};
    use std::sync::Arc;

    #[test]
    fn claim_flow_jumps_to_the_claim_step_on_selection() {
        let mut core = WizardCore::new_with_jumps(Arc::new(claim_schema()));
        core.set_field("placeId", |d| {
            d.place_id = "place-42".into();
            d.place_name = "Mama Nkechi's".into();
        });
        assert!(core.jump(2));
        assert_eq!(core.step(), 2);
    }

    #[test]
    fn claim_without_selection_fails_at_submit() {
        let mut core = WizardCore::new_with_jumps(Arc::new(claim_schema()));
        core.set_field("merchantNote", |d| d.merchant_note = "This is my venue".into());
        assert!(core.jump(2));

        let flush = FlushRegistry::new();
        assert!(core.prepare_submit(&flush).is_err());
        assert!(core.errors.contains_key("placeId"));
    }

    #[test]
    fn regular_place_wizard_does_not_jump() {
        let mut core = WizardCore::new(Arc::new(place_schema()));
        assert!(!core.jump(3));
        assert_eq!(core.step(), 1);
    }
}
