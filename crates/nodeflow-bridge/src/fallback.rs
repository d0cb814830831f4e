//! Local heuristic responder for demo/offline mode.
//!
//! Used only when the bridge yields no remote response. A handful of fixed
//! trivia answers plus a generic acknowledgement — deliberately small, and
//! not a substitute for real inference.

/// Produce a canned response for a prompt.
pub fn offline_response(prompt: &str) -> String {
    let lower = prompt.to_lowercase();

    // Capital city questions get accurate canned answers.
    if lower.contains("capital") && lower.contains("india") {
        return "Delhi is the capital of India. New Delhi serves as the seat of the \
                Government of India and is part of the National Capital Territory of Delhi."
            .to_string();
    }

    if lower.contains("capital") && lower.contains("france") {
        return "Paris is the capital of France and its most populous city.".to_string();
    }

    if lower.contains("capital") && (lower.contains("usa") || lower.contains("united states")) {
        return "Washington, D.C. is the capital of the United States of America.".to_string();
    }

    if lower.contains("capital") && lower.contains("japan") {
        return "Tokyo is the capital of Japan and one of the world's most populous \
                metropolitan areas."
            .to_string();
    }

    if lower.contains("hello") || lower.contains("hi") {
        return "Hello! I'm an AI assistant powered by NodeFlow. How can I help you today?"
            .to_string();
    }

    if lower.contains("2+2") || lower.contains("2 + 2") {
        return "2 + 2 = 4".to_string();
    }

    format!(
        "Thank you for your question: \"{}\". This is a demonstration of NodeFlow's \
         workflow execution running in offline mode. In a production environment, this \
         would be processed by the selected AI model to provide you with accurate, \
         relevant information.",
        prompt
    )
}
