//! WASM bindings for the sunburst core.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! JavaScript forwards pointer clicks and `requestAnimationFrame` timestamps;
//! everything else happens on the Rust side.

use wasm_bindgen::prelude::*;

use crate::chart::SunburstChart;
use crate::hierarchy::{Hierarchy, NodeId};
use crate::output::ErrorOutput;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

fn error_json(err: &dyn std::error::Error) -> String {
    serde_json::to_string(&ErrorOutput::new(err)).unwrap_or_else(|_| "{\"error\": {}}".to_string())
}

/// Checks a hierarchy document. Returns `{}` when valid, an error payload otherwise.
#[wasm_bindgen]
pub fn validate_hierarchy(input: &str) -> String {
    match Hierarchy::from_json(input) {
        Ok(_) => "{}".to_string(),
        Err(e) => {
            tracing::error!("Invalid hierarchy: {}", e);
            error_json(&e)
        }
    }
}

/// A sunburst chart mounted in one container element.
#[wasm_bindgen]
pub struct SunburstView {
    container_id: String,
    chart: SunburstChart,
}

#[wasm_bindgen]
impl SunburstView {
    /// Throws the error payload as a string when the hierarchy or config is malformed;
    /// the container is left untouched in that case.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str, hierarchy_json: &str, config_json: &str) -> Result<SunburstView, JsValue> {
        match SunburstChart::from_json(hierarchy_json, config_json) {
            Ok(chart) => Ok(SunburstView { container_id: container_id.to_string(), chart }),
            Err(e) => {
                tracing::error!(container = container_id, "Error building chart: {}", e);
                Err(JsValue::from_str(&error_json(&e)))
            }
        }
    }

    /// Returns "zoom", "detail" or "ignored".
    pub fn click(&mut self, node_id: usize, alt_key: bool, now_ms: f64) -> String {
        self.chart.click(NodeId(node_id), alt_key, now_ms).as_str().to_string()
    }

    pub fn click_center(&mut self, alt_key: bool, now_ms: f64) -> String {
        self.chart.click_center(alt_key, now_ms).as_str().to_string()
    }

    /// True while a transition is in flight; keep requesting frames until false.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.chart.tick(now_ms)
    }

    pub fn back(&mut self) -> bool {
        self.chart.back()
    }

    pub fn focus(&self) -> usize {
        self.chart.focus().0
    }

    pub fn frame_json(&self) -> String {
        serde_json::to_string(&self.chart.frame()).unwrap_or_else(|e| error_json(&e))
    }

    pub fn svg(&self) -> String {
        self.chart.svg()
    }

    /// Writes the current frame into the container element. The host maps
    /// clicks on `data-node`, `data-center` and `data-back` elements to
    /// `click`, `click_center` and `back`.
    pub fn mount(&self) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let container = document
            .get_element_by_id(&self.container_id)
            .ok_or_else(|| JsValue::from_str(&format!("container '{}' not found", self.container_id)))?;
        container.set_inner_html(&self.chart.svg());
        Ok(())
    }
}
