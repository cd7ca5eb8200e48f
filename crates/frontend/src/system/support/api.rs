use contracts::system::support::SupportMessageDto;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::config::ApiConfig;

/// POST /api/send-message
pub async fn send_message(cfg: &ApiConfig, dto: &SupportMessageDto) -> Result<(), String> {
    let response = Request::post(&api_url(cfg, "/send-message"))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to send message: {}", response.status()));
    }
    Ok(())
}
