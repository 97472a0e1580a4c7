#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{sync::OnceLock, time::Duration};

use crate::constants::{BRIDGE_TIMEOUT_SECS, BRIDGE_TIMEOUT_VAR, BRIDGE_URL_VAR};

/// Office-automation bridge settings loaded from the environment, if
/// available.
#[derive(Clone)]
pub struct BridgeEnv {
    /// Base URL of the bridge sidecar endpoint.
    base_url: String,
    /// Per-request timeout applied to bridge calls.
    timeout:  Duration,
}

impl BridgeEnv {
    /// Builds a bridge settings bundle from environment-provided values;
    /// returns `None` if no endpoint is configured.
    fn from_env() -> Option<Self> {
        let base_url = std::env::var(BRIDGE_URL_VAR).ok()?.trim().to_owned();
        if base_url.is_empty() {
            return None;
        }

        let timeout = std::env::var(BRIDGE_TIMEOUT_VAR)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(BRIDGE_TIMEOUT_SECS);

        Some(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout:  Duration::from_secs(timeout),
        })
    }

    /// Returns the bridge endpoint base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the per-request timeout for bridge calls.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Lazily resolved bridge settings.
static BRIDGE_ENV: OnceLock<Option<BridgeEnv>> = OnceLock::new();

/// Returns the bridge settings, if the environment configures an endpoint.
pub fn bridge_env() -> Option<&'static BridgeEnv> {
    BRIDGE_ENV.get_or_init(BridgeEnv::from_env).as_ref()
}
