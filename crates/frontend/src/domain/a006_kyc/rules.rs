use contracts::domain::a006_kyc::aggregate::KycMerchantDto;

use crate::shared::validate::{self, RuleSet};
use crate::shared::wizard::{StepDefinition, WizardSchema};

pub const CACHE_KEY: &str = "kyc-merchant";

/// Identity fields use their nested wire paths (`identityMetadata.bvn`) so a
/// violation maps onto the exact input inside the nested group.
pub fn kyc_rules() -> RuleSet<KycMerchantDto> {
    RuleSet::new(vec![
        validate::required("businessName", "Business name", |d: &KycMerchantDto| {
            &d.business_name
        }),
        validate::required(
            "businessCategory",
            "Business category",
            |d: &KycMerchantDto| &d.business_category,
        ),
        validate::required("rcNumber", "RC number", |d: &KycMerchantDto| &d.rc_number),
        validate::digits_exact("identityMetadata.bvn", "BVN", 11, |d: &KycMerchantDto| {
            &d.identity_metadata.bvn
        }),
        validate::required("identityMetadata.idType", "ID type", |d: &KycMerchantDto| {
            &d.identity_metadata.id_type
        }),
        validate::required(
            "identityMetadata.idNumber",
            "ID number",
            |d: &KycMerchantDto| &d.identity_metadata.id_number,
        ),
    ])
}

pub fn kyc_schema() -> WizardSchema<KycMerchantDto> {
    WizardSchema::new(
        vec![
            StepDefinition {
                label: "Business",
                fields: &["businessName", "businessCategory", "rcNumber"],
            },
            StepDefinition {
                label: "Identity",
                fields: &[
                    "identityMetadata.bvn",
                    "identityMetadata.idType",
                    "identityMetadata.idNumber",
                ],
            },
            StepDefinition {
                label: "Documents",
                fields: &[],
            },
        ],
        kyc_rules(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_kyc::aggregate::IdentityMetadata;
    use crate::shared::wizard::WizardCore;
    use std::sync::Arc;

    fn valid_dto() -> KycMerchantDto {
        KycMerchantDto {
            id: None,
            business_name: "Suya Spot Ltd".into(),
            business_category: "food-and-drink".into(),
            rc_number: "RC123456".into(),
            identity_metadata: IdentityMetadata {
                bvn: "12345678901".into(),
                id_type: "nin".into(),
                id_number: "98765432109".into(),
            },
            document_urls: Vec::new(),
        }
    }

    #[test]
    fn valid_submission_passes() {
        assert!(kyc_rules().validate_all(&valid_dto()).is_empty());
    }

    #[test]
    fn bvn_violations_use_the_nested_path() {
        let mut dto = valid_dto();
        dto.identity_metadata.bvn = "1234".into();
        let errors = kyc_rules().validate_all(&dto);
        assert_eq!(
            errors.get("identityMetadata.bvn").map(String::as_str),
            Some("BVN must be exactly 11 digits")
        );

        dto.identity_metadata.bvn = "1234567890a".into();
        assert!(kyc_rules()
            .validate_all(&dto)
            .contains_key("identityMetadata.bvn"));
    }

    #[test]
    fn identity_step_gates_on_nested_fields() {
        let mut core = WizardCore::new(Arc::new(kyc_schema()));
        let mut dto = valid_dto();
        dto.identity_metadata.bvn.clear();
        core.load(dto);

        assert!(core.next()); // Business step passes
        assert!(!core.next()); // Identity step blocks on the empty BVN
        assert_eq!(core.step(), 2);
        assert!(core.errors.contains_key("identityMetadata.bvn"));
    }
}
