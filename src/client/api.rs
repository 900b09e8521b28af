//! # Materials API Client
//!
//! Thin blocking wrapper over the five material endpoints. One call, one
//! HTTP request; nothing is retried.

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::http_server::{ErrorResponse, MessageResponse};
use crate::model::{Material, MaterialPatch, NewMaterial};

use super::config::ClientConfig;
use super::errors::{ClientError, ClientResult};

/// Operations the form client needs from the API
pub trait MaterialsApi {
    fn list(&self) -> ClientResult<Vec<Material>>;

    fn get(&self, id: i32) -> ClientResult<Material>;

    fn create(&self, material: &NewMaterial) -> ClientResult<Material>;

    fn update(&self, id: i32, patch: &MaterialPatch) -> ClientResult<Material>;

    fn delete(&self, id: i32) -> ClientResult<MessageResponse>;
}

/// [`MaterialsApi`] over HTTP
pub struct HttpMaterialsClient {
    base_url: String,
    http: Client,
}

impl HttpMaterialsClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            http: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json()?);
        }

        let message = match response.json::<ErrorResponse>() {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string(),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn log_failure<T>(operation: &str, result: ClientResult<T>) -> ClientResult<T> {
        if let Err(e) = &result {
            warn!(operation, error = %e, "materials API call failed");
        }
        result
    }
}

impl MaterialsApi for HttpMaterialsClient {
    fn list(&self) -> ClientResult<Vec<Material>> {
        let result = self
            .http
            .get(self.url("materials"))
            .send()
            .map_err(ClientError::from)
            .and_then(Self::decode);
        Self::log_failure("list", result)
    }

    fn get(&self, id: i32) -> ClientResult<Material> {
        let result = self
            .http
            .get(self.url(&format!("material/{}", id)))
            .send()
            .map_err(ClientError::from)
            .and_then(Self::decode);
        Self::log_failure("get", result)
    }

    fn create(&self, material: &NewMaterial) -> ClientResult<Material> {
        let result = self
            .http
            .post(self.url("create-material"))
            .json(material)
            .send()
            .map_err(ClientError::from)
            .and_then(Self::decode);
        Self::log_failure("create", result)
    }

    fn update(&self, id: i32, patch: &MaterialPatch) -> ClientResult<Material> {
        let result = self
            .http
            .put(self.url(&format!("update-material/{}", id)))
            .json(patch)
            .send()
            .map_err(ClientError::from)
            .and_then(Self::decode);
        Self::log_failure("update", result)
    }

    fn delete(&self, id: i32) -> ClientResult<MessageResponse> {
        let result = self
            .http
            .delete(self.url(&format!("delete-material/{}", id)))
            .send()
            .map_err(ClientError::from)
            .and_then(Self::decode);
        Self::log_failure("delete", result)
    }
}
