#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{path::Path, time::Duration};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{ExtractError, Extractor, FeatureSet};
use crate::{
    config,
    features::{DocumentFeatures, Grid},
};

/// Which feature model the bridge should produce for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeModel {
    /// A spreadsheet cell grid.
    Grid,
    /// The paragraph/image/table/margin model of an office document.
    Document,
}

/// One extraction request sent to the bridge sidecar.
#[derive(Debug, Serialize)]
struct BridgeRequest<'a> {
    /// Path of the document, as visible to the sidecar.
    path:  &'a str,
    /// Requested feature model.
    model: BridgeModel,
}

/// Feature payload returned by the bridge, tagged with the produced model.
#[derive(Debug, Deserialize)]
#[serde(tag = "model", content = "features", rename_all = "snake_case")]
enum BridgeResponse {
    /// A spreadsheet cell grid.
    Grid(Grid),
    /// An office-document feature model.
    Document(DocumentFeatures),
}

/// Client for the office-automation bridge sidecar.
///
/// The sidecar owns the office process and serves normalized feature models
/// over HTTP (`POST {base}/extract`). The client is constructed explicitly,
/// carries a bounded per-request timeout, and is opened once per batch.
#[derive(Debug, Clone)]
pub struct BridgeClient {
    /// HTTP client with the configured timeout applied.
    http:     reqwest::Client,
    /// Base URL of the sidecar endpoint, without a trailing slash.
    base_url: String,
}

impl BridgeClient {
    /// Creates a client for the sidecar at `base_url` with the given
    /// per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for the office bridge")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from the environment, or `None` when no bridge
    /// endpoint is configured.
    pub fn from_env() -> Result<Option<Self>> {
        config::bridge_env()
            .map(|env| Self::new(env.base_url(), env.timeout()))
            .transpose()
    }

    /// Asks the sidecar to extract the given feature model from the document
    /// at `path`.
    pub async fn extract(&self, path: &Path, model: BridgeModel) -> Result<FeatureSet, ExtractError> {
        let display_path = path.to_string_lossy();
        let request = BridgeRequest {
            path: display_path.as_ref(),
            model,
        };

        let response = self
            .http
            .post(format!("{}/extract", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ExtractError::Unavailable {
                path:   path.to_path_buf(),
                detail: if e.is_timeout() {
                    "bridge request timed out".to_string()
                } else {
                    e.to_string()
                },
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Unavailable {
                path:   path.to_path_buf(),
                detail: format!("bridge returned {status}"),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ExtractError::Unavailable {
                path:   path.to_path_buf(),
                detail: e.to_string(),
            })?;

        let parsed: BridgeResponse =
            serde_json::from_slice(&body).map_err(|e| ExtractError::Malformed {
                path:   path.to_path_buf(),
                detail: format!("bridge payload: {e}"),
            })?;

        Ok(match parsed {
            BridgeResponse::Grid(grid) => FeatureSet::Grid(grid),
            BridgeResponse::Document(features) => FeatureSet::Document(features),
        })
    }
}

/// An [`Extractor`] that delegates one fixed feature model to the bridge.
#[derive(Debug, Clone)]
pub struct BridgeExtractor {
    /// Client for the bridge sidecar.
    client: BridgeClient,
    /// Feature model requested for every document.
    model:  BridgeModel,
}

impl BridgeExtractor {
    /// Creates an extractor producing `model` through `client`.
    pub fn new(client: BridgeClient, model: BridgeModel) -> Self {
        Self { client, model }
    }
}

impl Extractor for BridgeExtractor {
    async fn extract(&self, path: &Path) -> Result<FeatureSet, ExtractError> {
        self.client.extract(path, self.model).await
    }
}
