//! Multipart file uploads.
//!
//! Each attachment purpose has its own endpoint; the server answers with the
//! stored URLs. Individual media URLs are removed with a DELETE carrying the
//! target list in the body.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::FormData;

use super::api_utils::api_url;
use super::request;
use crate::system::auth::storage;

/// Attachment purposes, one upload endpoint each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadPurpose {
    CompanyLogo,
    KycDocuments,
    FacilityImages,
    ProductMedia,
}

impl UploadPurpose {
    fn path(&self) -> &'static str {
        match self {
            UploadPurpose::CompanyLogo => "/uploads/company-logo",
            UploadPurpose::KycDocuments => "/uploads/kyc-documents",
            UploadPurpose::FacilityImages => "/uploads/facility-images",
            UploadPurpose::ProductMedia => "/uploads/product-media",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct UploadResponse {
    status: String,
    #[serde(default)]
    data: UploadedUrls,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct UploadedUrls {
    #[serde(default)]
    urls: Vec<String>,
}

/// Upload the given files under the `files` multipart field and return the
/// stored URLs. An empty selection short-circuits without a request.
pub async fn upload_files(
    purpose: UploadPurpose,
    files: &[web_sys::File],
) -> Result<Vec<String>, String> {
    if files.is_empty() {
        return Ok(Vec::new());
    }

    let form = FormData::new().map_err(|e| format!("{e:?}"))?;
    for file in files {
        form.append_with_blob_and_filename("files", file, &file.name())
            .map_err(|e| format!("{e:?}"))?;
    }

    let mut builder = Request::post(&api_url(purpose.path()));
    if let Some(token) = storage::get_access_token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    // The browser sets the multipart boundary itself; no Content-Type here.
    let response = builder
        .body(form)
        .map_err(|e| format!("Failed to build upload: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send upload: {}", e))?;

    if !response.ok() {
        return Err(format!("Upload failed: HTTP {}", response.status()));
    }

    let parsed: UploadResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse upload response: {}", e))?;
    if parsed.status != "success" {
        return Err("Upload rejected by server".to_string());
    }
    Ok(parsed.data.urls)
}

#[derive(Serialize)]
struct DeleteMediaRequest<'a> {
    urls: &'a [String],
}

/// Remove previously uploaded media by URL.
pub async fn delete_media(purpose: UploadPurpose, urls: &[String]) -> Result<(), String> {
    if urls.is_empty() {
        return Ok(());
    }
    request::delete_with_body(purpose.path(), &DeleteMediaRequest { urls }).await
}
