use anyhow::anyhow;
use instant::Instant;
use oracle_core::{ask_url, OracleError, OracleResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// POST the question to the inference endpoint and decode its answer.
///
/// Latency is measured here when the service does not report its own.
pub async fn ask_oracle(base_url: &str, question: &str) -> anyhow::Result<OracleResponse> {
    let url = ask_url(base_url, question)?;
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;

    let opts = web::RequestInit::new();
    opts.set_method("POST");
    let request = web::Request::new_with_str_and_init(url.as_str(), &opts)
        .map_err(|e| anyhow!("{:?}", e))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| anyhow!("{:?}", e))?;

    let started = Instant::now();
    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow!("{}", js_message(&e)))?;
    let resp: web::Response = resp.dyn_into().map_err(|e| anyhow!("{:?}", e))?;
    if !resp.ok() {
        return Err(OracleError::Status(resp.status()).into());
    }
    let body = JsFuture::from(resp.text().map_err(|e| anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow!("{:?}", e))?
        .as_string()
        .ok_or_else(|| anyhow!("response body is not text"))?;

    let mut answer = OracleResponse::from_json(&body)?;
    if answer.latency_ms.is_none() {
        answer.latency_ms = Some(started.elapsed().as_secs_f64() * 1000.0);
    }
    log::info!(
        "[oracle] p_yes={:.3} answer={} latency={:.0}ms",
        answer.p_yes,
        answer.answer,
        answer.latency_ms.unwrap_or_default()
    );
    Ok(answer)
}

// fetch rejects with a TypeError whose message is the useful part
fn js_message(err: &wasm_bindgen::JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", err))
}
