use crate::AppState;
use crate::config::{MAX_TOKENS, TEMPERATURE, TOP_P};
use crate::error::RelayError;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::models::{ChatMessage, ChatRequest, ChatResponse};

#[derive(Debug, Serialize)]
struct CompletionRequest {
    prompt: String,
    max_tokens: u16,
    temperature: f64,
    top_p: f64,
}

impl CompletionRequest {
    fn new(prompt: String) -> Self {
        Self {
            prompt,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    text: String,
}

/// Flatten the conversation into one prompt, contents joined by a single space
fn build_prompt(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_choices(response: CompletionResponse) -> String {
    response
        .choices
        .into_iter()
        .map(|c| c.text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One attempt against the completion service; no retries.
async fn complete(state: &AppState, prompt: String) -> Result<String, RelayError> {
    let response = state
        .http
        .post(&state.config.completions_url)
        .json(&CompletionRequest::new(prompt))
        .send()
        .await
        .map_err(RelayError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(RelayError::Upstream { status });
    }

    let body: CompletionResponse = response.json().await.map_err(RelayError::Decode)?;
    Ok(join_choices(body))
}

pub async fn relay_chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, RelayError> {
    let prompt = build_prompt(&payload.messages);

    let assistant_message = complete(&state, prompt).await.inspect_err(|e| {
        tracing::error!("LLM API request failed: {}", e);
    })?;

    Ok(Json(ChatResponse { assistant_message }))
}
