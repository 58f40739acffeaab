use gloo_net::http::Request;

use blackboard_shared::api::parse_calculate_response;
use blackboard_shared::config::CONFIG_PATH;
use blackboard_shared::{CalculateRequest, ClientConfig};

/// Fetches the host-served config. `None` when the page is served without one.
pub async fn fetch_config() -> Option<ClientConfig> {
    let response = Request::get(CONFIG_PATH).send().await.ok()?;
    if !response.ok() {
        log::debug!("no {CONFIG_PATH} (status {})", response.status());
        return None;
    }
    response.json::<ClientConfig>().await.ok()
}

/// Posts the request and returns the raw response body.
pub async fn post_calculation(url: &str, request: &CalculateRequest) -> Result<String, String> {
    let response = Request::post(url)
        .json(request)
        .map_err(|error| error.to_string())?
        .send()
        .await
        .map_err(|error| error.to_string())?;
    let status = response.status();
    let body = response.text().await.map_err(|error| error.to_string())?;
    if !response.ok() {
        return Err(format!("calculation failed with status {status}: {body}"));
    }
    Ok(body)
}

pub fn log_response(body: &str) {
    match parse_calculate_response(body) {
        Some(items) => {
            for item in items {
                log::info!(
                    "Response: expr={:?} result={:?} assign={}",
                    item.expr,
                    item.result,
                    item.assign
                );
            }
        }
        None => log::info!("Response: {body}"),
    }
}
