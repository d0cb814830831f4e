use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A node in the workflow graph.
///
/// Plain data as delivered by the visual editor: a stable id, an open string
/// type tag, and a free-form payload. Nodes are immutable for the duration of
/// one run; the engine borrows them and never writes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier, stable within one execution.
    pub id: String,
    /// Type tag selecting an executor (see [`NodeKind::from_tag`]).
    #[serde(rename = "type")]
    pub node_type: String,
    /// Free-form payload (prompt text, model name, parameters, ...).
    /// Each executor reads only the keys it needs and tolerates absence.
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl Node {
    /// Create a node with an empty payload.
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            data: serde_json::Map::new(),
        }
    }

    /// Set one payload key.
    pub fn with_data(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }
}

/// A directed edge: `target` consumes `source`'s output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// AI provider behind a model node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "OPENAI")]
    OpenAi,
    #[serde(rename = "ANTHROPIC")]
    Anthropic,
    #[serde(rename = "DEEPSEEK")]
    DeepSeek,
    #[serde(rename = "OLLAMA")]
    Ollama,
    #[serde(rename = "HUGGINGFACE")]
    HuggingFace,
    #[serde(rename = "GEMINI")]
    Gemini,
}

impl Provider {
    /// Wire name used by the backend configuration records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI",
            Provider::Anthropic => "ANTHROPIC",
            Provider::DeepSeek => "DEEPSEEK",
            Provider::Ollama => "OLLAMA",
            Provider::HuggingFace => "HUGGINGFACE",
            Provider::Gemini => "GEMINI",
        }
    }

    /// Model used when the node payload does not name one.
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::OpenAi => "gpt-3.5-turbo",
            Provider::Anthropic => "claude-3-5-sonnet-20241022",
            Provider::DeepSeek => "deepseek-chat",
            Provider::Ollama => "llama2:7b",
            Provider::HuggingFace => "codellama/CodeLlama-7b-Instruct-hf",
            Provider::Gemini => "gemini-1.5-pro",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Executor family for a node, resolved from its open type tag.
///
/// Unrecognized tags fall back to [`NodeKind::Generic`] — an unknown type is
/// never an error by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Captures literal text from the node's own payload.
    TextInput,
    /// Calls an AI provider with upstream text as the prompt.
    Model(Provider),
    /// Formats upstream output for display.
    TextOutput,
    /// Passes upstream content through unchanged.
    Generic,
}

impl NodeKind {
    /// Map a type tag to its executor family. Case-exact; several legacy
    /// aliases per family are accepted.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text-input" | "input" | "chatInput" => NodeKind::TextInput,
            "openai" | "modelNode" | "model-node" => NodeKind::Model(Provider::OpenAi),
            "anthropic" => NodeKind::Model(Provider::Anthropic),
            "deepseek" => NodeKind::Model(Provider::DeepSeek),
            "ollama" => NodeKind::Model(Provider::Ollama),
            "huggingface" => NodeKind::Model(Provider::HuggingFace),
            "gemini" => NodeKind::Model(Provider::Gemini),
            "text-output" | "output" | "chatOutput" => NodeKind::TextOutput,
            _ => NodeKind::Generic,
        }
    }
}

/// Kind tag on a produced output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputKind {
    Text,
    AiResponse,
    Output,
    Generic,
}

/// Output produced by a node executor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeOutput {
    /// Output family.
    pub kind: OutputKind,
    /// The produced value. A string for most kinds; structured values pass
    /// through generic nodes unchanged.
    pub content: serde_json::Value,
    /// Model name, for AI responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Provider, for AI responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    /// Original type tag, recorded by the generic passthrough for diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    /// Human-displayable rendering, set by output nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    /// True when the content came from the local heuristic responder rather
    /// than a real remote inference call.
    #[serde(default)]
    pub fallback: bool,
    pub timestamp: DateTime<Utc>,
}

impl NodeOutput {
    /// Output of an input node: captured literal text.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: OutputKind::Text,
            content: serde_json::Value::String(content.into()),
            model: None,
            provider: None,
            node_type: None,
            formatted: None,
            fallback: false,
            timestamp: Utc::now(),
        }
    }

    /// Output of a model node.
    pub fn ai_response(
        content: impl Into<String>,
        model: impl Into<String>,
        provider: Provider,
        fallback: bool,
    ) -> Self {
        Self {
            kind: OutputKind::AiResponse,
            content: serde_json::Value::String(content.into()),
            model: Some(model.into()),
            provider: Some(provider),
            node_type: None,
            formatted: None,
            fallback,
            timestamp: Utc::now(),
        }
    }

    /// Output of an output node: upstream content plus a display rendering.
    pub fn output(content: serde_json::Value, formatted: impl Into<String>) -> Self {
        Self {
            kind: OutputKind::Output,
            content,
            model: None,
            provider: None,
            node_type: None,
            formatted: Some(formatted.into()),
            fallback: false,
            timestamp: Utc::now(),
        }
    }

    /// Output of the generic passthrough, recording the original type tag.
    pub fn generic(content: serde_json::Value, node_type: impl Into<String>) -> Self {
        Self {
            kind: OutputKind::Generic,
            content,
            model: None,
            provider: None,
            node_type: Some(node_type.into()),
            formatted: None,
            fallback: false,
            timestamp: Utc::now(),
        }
    }

    /// The content as a string, if it is one.
    pub fn content_str(&self) -> Option<&str> {
        self.content.as_str()
    }
}

/// Per-run map of node id → produced output.
///
/// Append-only: the engine writes each node's entry once, after that node
/// succeeds, and never mutates it again within the run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionContext {
    entries: HashMap<String, NodeOutput>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node_id: impl Into<String>, output: NodeOutput) {
        self.entries.insert(node_id.into(), output);
    }

    pub fn get(&self, node_id: &str) -> Option<&NodeOutput> {
        self.entries.get(node_id)
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.entries.contains_key(node_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (node id, output) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &NodeOutput)> {
        self.entries.iter()
    }
}

/// Result of executing an entire workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// True iff no node failed.
    pub success: bool,
    /// Outputs of every node that completed.
    pub results: ExecutionContext,
    /// `"<nodeId>: <message>"` entries in order of occurrence. Execution
    /// stops at the first failure, so normally at most one.
    pub errors: Vec<String>,
    /// The topological order the run used.
    pub execution_order: Vec<String>,
}

/// Status of a node as it moves through a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Executing,
    Completed,
    #[serde(rename = "error")]
    Failed,
}

/// Status-change notification broadcast to UI subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeStatusEvent {
    pub node_id: String,
    pub status: NodeStatus,
    /// The output on completion, or the error message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl NodeStatusEvent {
    pub fn executing(node_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            status: NodeStatus::Executing,
            payload: None,
        }
    }

    pub fn completed(node_id: impl Into<String>, output: &NodeOutput) -> Self {
        Self {
            node_id: node_id.into(),
            status: NodeStatus::Completed,
            payload: serde_json::to_value(output).ok(),
        }
    }

    pub fn failed(node_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            status: NodeStatus::Failed,
            payload: Some(serde_json::Value::String(message.into())),
        }
    }
}

/// A model configuration record from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfigEntry {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub provider: String,
    pub model_name: String,
    #[serde(default)]
    pub is_active: bool,
}

/// Textual response obtained through the provider bridge.
#[derive(Debug, Clone)]
pub struct BridgeResponse {
    pub content: String,
    /// The backend flags canned responses so callers can tell them apart
    /// from real inference.
    pub is_mock: bool,
}
