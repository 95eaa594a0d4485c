//! Record Endpoint
//!
//! `GET <endpoint>?<param>=<id>` over the browser fetch API.

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::RecordSource;
use crate::config::AppConfig;
use crate::error::LoadError;

#[derive(Clone, Debug)]
pub struct HttpRecordSource {
    client: Client,
    endpoint: String,
    id_param: String,
}

impl HttpRecordSource {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            id_param: config.id_param.clone(),
        }
    }

    /// Request URL for `id`, with the identifier query-encoded
    pub fn request_url(&self, id: &str) -> Result<Url, LoadError> {
        Url::parse_with_params(&self.endpoint, &[(self.id_param.as_str(), id)]).map_err(LoadError::transport)
    }
}

#[async_trait(?Send)]
impl RecordSource for HttpRecordSource {
    async fn fetch(&self, id: &str) -> Result<String, LoadError> {
        let url = self.request_url(id)?;
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(LoadError::transport)?;
        let response = response.error_for_status().map_err(LoadError::transport)?;
        response.text().await.map_err(LoadError::transport)
    }
}
