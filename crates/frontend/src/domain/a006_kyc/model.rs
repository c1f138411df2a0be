use contracts::domain::a006_kyc::aggregate::{BusinessCategory, KycMerchant, KycMerchantDto};
use contracts::shared::ApiEnvelope;

use crate::shared::request;

/// The merchant's current KYC submission; 404 means nothing submitted yet.
pub async fn fetch_current() -> Result<Option<KycMerchant>, String> {
    match request::get_json::<ApiEnvelope<KycMerchant>>("/kyc/merchant").await {
        Ok(envelope) => Ok(Some(envelope.data)),
        Err(e) if e.contains("404") || e.to_lowercase().contains("not found") => Ok(None),
        Err(e) => Err(e),
    }
}

/// POST on first submission, PATCH on resubmission; returns the saved id.
pub async fn save(dto: &KycMerchantDto) -> Result<String, String> {
    let envelope: ApiEnvelope<KycMerchant> = match &dto.id {
        Some(id) => request::patch_json(&format!("/kyc/merchant/{}", id), dto).await?,
        None => request::post_json("/kyc/merchant", dto).await?,
    };
    Ok(envelope.data.id)
}

pub async fn fetch_business_categories() -> Result<Vec<BusinessCategory>, String> {
    let envelope: ApiEnvelope<Vec<BusinessCategory>> =
        request::get_json("/kyc/business/categories").await?;
    Ok(envelope.data)
}
