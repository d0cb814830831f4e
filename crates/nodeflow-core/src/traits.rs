use futures::future::BoxFuture;

use crate::error::Result;
use crate::types::{BridgeResponse, Provider};

/// Provider bridge — resolves `(provider, model)` pairs against the backend
/// and runs one inference request.
///
/// `Ok(None)` means no usable response was available (no matching
/// configuration, or the backend returned nothing); callers must treat it
/// identically to an `Err` and switch to the local heuristic responder.
pub trait ModelBridge: Send + Sync + 'static {
    fn execute_model(
        &self,
        provider: Provider,
        model_name: &str,
        prompt: &str,
        parameters: &serde_json::Value,
    ) -> BoxFuture<'_, Result<Option<BridgeResponse>>>;
}
