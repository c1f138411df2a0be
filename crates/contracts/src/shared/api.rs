use serde::{Deserialize, Serialize};

/// Envelope returned by every mutation endpoint: `{status, data, message?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: String,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// One page of a server-paginated list.
///
/// Field names follow the wire format exactly (`currentpage`, `lastpage`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageData<T> {
    pub data: Vec<T>,
    pub count: usize,
    pub currentpage: usize,
    pub lastpage: usize,
    pub nextpage: Option<usize>,
    pub prevpage: Option<usize>,
}

impl<T> PageData<T> {
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            count: 0,
            currentpage: 1,
            lastpage: 1,
            nextpage: None,
            prevpage: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Envelope returned by list endpoints.
pub type PageEnvelope<T> = ApiEnvelope<PageData<T>>;

/// Error body shape used by the API when a request fails.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub status: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Best human-readable message out of the error envelope.
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_envelope_decodes_wire_names() {
        let json = r#"{
            "status": "success",
            "data": {
                "data": ["a", "b"],
                "count": 12,
                "currentpage": 2,
                "lastpage": 6,
                "nextpage": 3,
                "prevpage": 1
            }
        }"#;
        let page: PageEnvelope<String> = serde_json::from_str(json).unwrap();
        assert!(page.is_success());
        assert_eq!(page.data.currentpage, 2);
        assert_eq!(page.data.lastpage, 6);
        assert_eq!(page.data.nextpage, Some(3));
        assert_eq!(page.data.data.len(), 2);
    }

    #[test]
    fn empty_page_is_empty() {
        let page: PageData<String> = PageData::empty();
        assert!(page.is_empty());
        assert_eq!(page.currentpage, 1);
    }

    #[test]
    fn error_body_prefers_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message": "Deal not found", "error": "404"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Deal not found"));
    }
}
