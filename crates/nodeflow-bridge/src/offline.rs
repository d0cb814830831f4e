use futures::future::BoxFuture;
use tracing::debug;

use nodeflow_core::error::Result;
use nodeflow_core::traits::ModelBridge;
use nodeflow_core::types::{BridgeResponse, Provider};

/// Bridge for demo/offline mode: never reaches a backend, so every model
/// node takes the local heuristic fallback path.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineBridge;

impl ModelBridge for OfflineBridge {
    fn execute_model(
        &self,
        provider: Provider,
        model_name: &str,
        _prompt: &str,
        _parameters: &serde_json::Value,
    ) -> BoxFuture<'_, Result<Option<BridgeResponse>>> {
        debug!(%provider, model = %model_name, "Offline bridge, no remote response");
        Box::pin(async { Ok(None) })
    }
}
