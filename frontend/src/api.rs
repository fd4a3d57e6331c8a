use gloo_net::http::Request;
use shared::models::*;

const API_BASE: &str = "/api";

/// Sends the assembled prompt through the relay. A non-success status is
/// reported as an error carrying the status text.
pub async fn generate_story(req: &ChatRequest) -> Result<ChatResponse, gloo_net::Error> {
    let resp = Request::post(&format!("{}/chat", API_BASE))
        .json(req)?
        .send()
        .await?;

    if !resp.ok() {
        return Err(gloo_net::Error::GlooError(format!(
            "{} {}",
            resp.status(),
            resp.status_text()
        )));
    }
    resp.json().await
}
