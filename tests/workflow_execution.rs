use std::sync::Arc;

use nodeflow::{
    Edge, Node, NodeflowError, OfflineBridge, OutputKind, Provider, WorkflowEngine,
};

fn engine() -> WorkflowEngine {
    WorkflowEngine::new(Arc::new(OfflineBridge))
}

#[tokio::test]
async fn test_three_node_pipeline_offline() {
    // text-input -> openai -> text-output, with no backend reachable: the
    // model node falls back to the local responder and the run succeeds.
    let nodes = vec![
        Node::new("1", "text-input").with_data("text", serde_json::json!("Capital of India?")),
        Node::new("2", "openai"),
        Node::new("3", "text-output"),
    ];
    let edges = vec![Edge::new("1", "2"), Edge::new("2", "3")];

    let result = engine().execute(&nodes, &edges).await.unwrap();

    assert!(result.success);
    assert!(result.errors.is_empty());
    assert_eq!(result.execution_order, vec!["1", "2", "3"]);

    let model_out = result.results.get("2").unwrap();
    assert_eq!(model_out.kind, OutputKind::AiResponse);
    assert!(model_out.fallback);
    assert_eq!(model_out.provider, Some(Provider::OpenAi));
    assert_eq!(model_out.model.as_deref(), Some("gpt-3.5-turbo"));

    let final_out = result.results.get("3").unwrap();
    assert!(final_out.content_str().unwrap().contains("Delhi"));
    assert!(final_out.formatted.as_deref().unwrap().contains("Delhi"));
}

#[tokio::test]
async fn test_output_passthrough_idempotence() {
    let nodes = vec![
        Node::new("in", "text-input").with_data("text", serde_json::json!("hello")),
        Node::new("out", "text-output"),
    ];
    let edges = vec![Edge::new("in", "out")];

    let result = engine().execute(&nodes, &edges).await.unwrap();
    assert!(result.success);

    let out = result.results.get("out").unwrap();
    assert_eq!(out.content, serde_json::json!("hello"));
    assert_eq!(out.formatted.as_deref(), Some("hello"));
}

#[tokio::test]
async fn test_empty_input_fails_with_node_id() {
    let nodes = vec![Node::new("lonely", "text-input")];

    let result = engine().execute(&nodes, &[]).await.unwrap();

    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].starts_with("lonely:"));
    assert!(result.errors[0].contains("No input text provided"));
    assert!(result.results.is_empty());
}

#[tokio::test]
async fn test_unknown_type_passes_through() {
    let nodes = vec![
        Node::new("1", "text-input").with_data("text", serde_json::json!("payload")),
        Node::new("2", "annotation"),
        Node::new("3", "text-output"),
    ];
    let edges = vec![Edge::new("1", "2"), Edge::new("2", "3")];

    let result = engine().execute(&nodes, &edges).await.unwrap();
    assert!(result.success);

    let generic = result.results.get("2").unwrap();
    assert_eq!(generic.kind, OutputKind::Generic);
    assert_eq!(generic.node_type.as_deref(), Some("annotation"));
    assert_eq!(generic.content, serde_json::json!("payload"));

    // The passthrough content reaches the output node unchanged.
    let out = result.results.get("3").unwrap();
    assert_eq!(out.content, serde_json::json!("payload"));
}

#[tokio::test]
async fn test_cycle_is_a_structural_error() {
    let nodes = vec![
        Node::new("A", "text-input").with_data("text", serde_json::json!("x")),
        Node::new("B", "openai"),
    ];
    let edges = vec![Edge::new("A", "B"), Edge::new("B", "A")];

    let err = engine().execute(&nodes, &edges).await.unwrap_err();
    assert!(matches!(err, NodeflowError::CircularDependency(_)));
}

#[tokio::test]
async fn test_every_provider_tag_resolves_and_falls_back() {
    for (tag, provider) in [
        ("openai", Provider::OpenAi),
        ("anthropic", Provider::Anthropic),
        ("deepseek", Provider::DeepSeek),
        ("ollama", Provider::Ollama),
        ("huggingface", Provider::HuggingFace),
        ("gemini", Provider::Gemini),
    ] {
        let nodes = vec![
            Node::new("1", "text-input").with_data("text", serde_json::json!("hello")),
            Node::new("2", tag),
        ];
        let edges = vec![Edge::new("1", "2")];

        let result = engine().execute(&nodes, &edges).await.unwrap();
        assert!(result.success, "provider tag {} should succeed", tag);

        let out = result.results.get("2").unwrap();
        assert_eq!(out.provider, Some(provider));
        assert!(out.fallback);
        assert_eq!(out.model.as_deref(), Some(provider.default_model()));
    }
}

#[tokio::test]
async fn test_topological_order_respects_all_edges() {
    let nodes = vec![
        Node::new("d", "text-output"),
        Node::new("b", "annotation"),
        Node::new("a", "text-input").with_data("text", serde_json::json!("go")),
        Node::new("c", "annotation"),
    ];
    let edges = vec![
        Edge::new("a", "b"),
        Edge::new("b", "c"),
        Edge::new("c", "d"),
    ];

    let result = engine().execute(&nodes, &edges).await.unwrap();
    assert!(result.success);

    for edge in &edges {
        let s = result
            .execution_order
            .iter()
            .position(|id| *id == edge.source)
            .unwrap();
        let t = result
            .execution_order
            .iter()
            .position(|id| *id == edge.target)
            .unwrap();
        assert!(s < t);
    }
    assert_eq!(result.execution_order.len(), nodes.len());
}
