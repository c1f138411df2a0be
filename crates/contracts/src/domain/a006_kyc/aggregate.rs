use crate::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};

// ============================================================================
// Lifecycle
// ============================================================================

/// KYC verification lifecycle. Transitions are server-owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    Pending,
    Verified,
    Rejected,
}

impl KycStatus {
    pub fn label(&self) -> &'static str {
        match self {
            KycStatus::Pending => "Pending review",
            KycStatus::Verified => "Verified",
            KycStatus::Rejected => "Rejected",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Identity fields nested under `identityMetadata` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct IdentityMetadata {
    pub bvn: String,

    #[serde(rename = "idType")]
    pub id_type: String,

    #[serde(rename = "idNumber")]
    pub id_number: String,
}

/// The merchant's KYC submission as returned by `/kyc/merchant`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KycMerchant {
    pub id: String,

    #[serde(rename = "businessName")]
    pub business_name: String,

    #[serde(rename = "businessCategory")]
    pub business_category: String,

    #[serde(rename = "rcNumber")]
    pub rc_number: String,

    #[serde(rename = "identityMetadata")]
    pub identity_metadata: IdentityMetadata,

    #[serde(rename = "documentUrls", default)]
    pub document_urls: Vec<String>,

    pub status: KycStatus,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// A business category from `/kyc/business/categories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessCategory {
    pub id: String,
    pub name: String,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Draft of the KYC submission assembled by the compliance wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct KycMerchantDto {
    pub id: Option<String>,

    #[serde(rename = "businessName")]
    pub business_name: String,

    #[serde(rename = "businessCategory")]
    pub business_category: String,

    #[serde(rename = "rcNumber")]
    pub rc_number: String,

    #[serde(rename = "identityMetadata")]
    pub identity_metadata: IdentityMetadata,

    #[serde(rename = "documentUrls", default)]
    pub document_urls: Vec<String>,
}

impl From<KycMerchant> for KycMerchantDto {
    fn from(k: KycMerchant) -> Self {
        Self {
            id: Some(k.id),
            business_name: k.business_name,
            business_category: k.business_category,
            rc_number: k.rc_number,
            identity_metadata: k.identity_metadata,
            document_urls: k.document_urls,
        }
    }
}
