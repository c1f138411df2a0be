pub mod api;

pub use api::{ApiEnvelope, PageData, PageEnvelope};
