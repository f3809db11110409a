// Backend reads. Every call is a plain GET returning JSON.

use anyhow::Context;
use instant::Instant;
use tour_core::node::hotspots_from_json;
use tour_core::{Hotspot, PanoramaCatalog, TourConfig, TourError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::Cors);
    let request = web::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| anyhow::anyhow!("request {}: {:?}", url, e))?;
    _ = request.headers().set("Accept", "application/json");

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| TourError::DataLoad(format!("fetch {}: {:?}", url, e)))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("fetch {}: not a Response", url))?;
    if !resp.ok() {
        return Err(TourError::DataLoad(format!("GET {} returned HTTP {}", url, resp.status())).into());
    }
    let text = JsFuture::from(resp.text().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("read {}: {:?}", url, e))?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("{}: body is not text", url))
}

pub async fn list_panoramas(config: &TourConfig) -> anyhow::Result<PanoramaCatalog> {
    let started = Instant::now();
    let url = config.panoramas_url();
    let body = fetch_text(&url).await?;
    let catalog = PanoramaCatalog::from_json(&body).context("panorama list")?;
    log::info!(
        "[data] {} panoramas in {:?}",
        catalog.len(),
        started.elapsed()
    );
    Ok(catalog)
}

pub async fn list_hotspots(config: &TourConfig, panorama_id: &str) -> anyhow::Result<Vec<Hotspot>> {
    let started = Instant::now();
    let body = fetch_text(&config.hotspots_url(panorama_id)).await?;
    let hotspots = hotspots_from_json(&body).with_context(|| format!("hotspots of {}", panorama_id))?;
    log::info!(
        "[data] {} hotspots for {} in {:?}",
        hotspots.len(),
        panorama_id,
        started.elapsed()
    );
    Ok(hotspots)
}
