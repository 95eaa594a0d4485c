//! Remote API
//!
//! Bindings to the record endpoint, behind a trait so the loader can be
//! driven by scripted sources in tests.

mod record;

use async_trait::async_trait;

use crate::error::LoadError;

pub use record::HttpRecordSource;

/// Anything that can fetch the raw response body for an identifier
#[async_trait(?Send)]
pub trait RecordSource {
    async fn fetch(&self, id: &str) -> Result<String, LoadError>;
}
