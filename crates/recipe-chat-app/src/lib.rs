//! Recipe Chat App: WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It reads the host page's configuration, builds the HTTP adapter and
//! hands the session to the egui UI.

mod app;
mod host_config;
mod session_slot;


use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const CANVAS_ID: &str = "recipe_chat_canvas";

/// WASM entry point: called from index.html
#[wasm_bindgen(start)]
pub async fn main() -> Result<(), JsValue> {
    let (config, config_error) = host_config::load();

    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(host_config::log_level(config.log_level)));
    log::info!("Recipe chat starting (api: {})", config.base_url());
    if let Some(e) = config_error {
        log::warn!("Ignoring host config ({}); using defaults", e);
    }

    let web_options = eframe::WebOptions::default();

    // Get the canvas element by ID
    let canvas = gloo_utils::document()
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str(&format!("No canvas element with id '{}'", CANVAS_ID)))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("Element is not a canvas"))?;

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::RecipeChatApp::new(cc, config)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });

    Ok(())
}
