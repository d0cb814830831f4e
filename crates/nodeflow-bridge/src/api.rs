use futures::future::BoxFuture;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use nodeflow_core::config::ApiConfig;
use nodeflow_core::error::{NodeflowError, Result};
use nodeflow_core::traits::ModelBridge;
use nodeflow_core::types::{BridgeResponse, ModelConfigEntry, Provider};

/// Bridge backed by the real backend API.
///
/// Resolves `(provider, model)` pairs against the model-configuration
/// listing, then calls the configuration's execute endpoint. Transport
/// errors surface as `BridgeRequest`; "no usable configuration or response"
/// is `Ok(None)` — callers treat both the same way.
pub struct ApiBridge {
    http: Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Serialize)]
struct ExecuteRequest<'a> {
    prompt: &'a str,
    parameters: &'a serde_json::Value,
}

#[derive(Deserialize)]
struct ExecuteResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    is_mock: Option<bool>,
}

impl ApiBridge {
    /// Build a bridge from the API config. The request timeout is applied
    /// here, at the bridge boundary — a hung remote call no longer stalls
    /// the whole run.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NodeflowError::BridgeRequest(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Fetch all model configurations from the backend.
    pub async fn list_configs(&self) -> Result<Vec<ModelConfigEntry>> {
        let url = format!("{}/api/ai/aimodelconfig/", self.base_url);
        let resp = self
            .authorize(self.http.get(&url))
            .send()
            .await
            .map_err(|e| NodeflowError::BridgeRequest(e.to_string()))?
            .error_for_status()
            .map_err(|e| NodeflowError::BridgeRequest(e.to_string()))?;

        resp.json::<Vec<ModelConfigEntry>>()
            .await
            .map_err(|e| NodeflowError::BridgeParse(e.to_string()))
    }

    /// Run one inference request against a resolved configuration.
    pub async fn execute_config(
        &self,
        config_id: i64,
        prompt: &str,
        parameters: &serde_json::Value,
    ) -> Result<Option<BridgeResponse>> {
        let url = format!("{}/api/ai/aimodelconfig/{}/execute/", self.base_url, config_id);
        let resp = self
            .authorize(self.http.post(&url))
            .json(&ExecuteRequest { prompt, parameters })
            .send()
            .await
            .map_err(|e| NodeflowError::BridgeRequest(e.to_string()))?
            .error_for_status()
            .map_err(|e| NodeflowError::BridgeRequest(e.to_string()))?;

        let body: ExecuteResponse = resp
            .json()
            .await
            .map_err(|e| NodeflowError::BridgeParse(e.to_string()))?;

        match body.response {
            Some(content) => {
                let is_mock = body.is_mock.unwrap_or(false);
                debug!(config_id, is_mock, "Model executed");
                Ok(Some(BridgeResponse { content, is_mock }))
            }
            None => {
                warn!(config_id, "No response field in execute reply");
                Ok(None)
            }
        }
    }
}

/// Pick the configuration to use for a `(provider, model)` pair.
///
/// Exact active match wins; otherwise any active configuration for the same
/// provider stands in as a substitute.
pub fn select_config<'a>(
    configs: &'a [ModelConfigEntry],
    provider: Provider,
    model_name: &str,
) -> Option<&'a ModelConfigEntry> {
    configs
        .iter()
        .find(|c| c.provider == provider.as_str() && c.model_name == model_name && c.is_active)
        .or_else(|| {
            configs
                .iter()
                .find(|c| c.provider == provider.as_str() && c.is_active)
        })
}

impl ModelBridge for ApiBridge {
    fn execute_model(
        &self,
        provider: Provider,
        model_name: &str,
        prompt: &str,
        parameters: &serde_json::Value,
    ) -> BoxFuture<'_, Result<Option<BridgeResponse>>> {
        let model_name = model_name.to_string();
        let prompt = prompt.to_string();
        let parameters = parameters.clone();

        Box::pin(async move {
            let configs = self.list_configs().await?;

            let config = match select_config(&configs, provider, &model_name) {
                Some(c) => c,
                None => {
                    warn!(%provider, model = %model_name, "No active model configuration");
                    return Ok(None);
                }
            };

            if config.model_name != model_name {
                info!(
                    %provider,
                    requested = %model_name,
                    substitute = %config.model_name,
                    config_id = config.id,
                    "Using substitute configuration for provider"
                );
            }

            self.execute_config(config.id, &prompt, &parameters).await
        })
    }
}
