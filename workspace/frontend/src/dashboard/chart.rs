use wasm_bindgen::prelude::*;

use super::figure::ForecastFigure;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, js_name = purge, catch)]
    fn purge_plot(div_id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = ["Plotly", "Plots"], js_name = resize, catch)]
    fn resize_plot(div_id: &str) -> Result<JsValue, JsValue>;
}

/// Drawing backend for the forecast chart
pub trait ChartSurface {
    fn plot(&self, target: &str, figure: &ForecastFigure) -> Result<(), String>;
    fn purge(&self, target: &str);
    fn resize(&self, target: &str);
}

/// Plotly.js loaded globally by `index.html`
pub struct PlotlySurface;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| format!("Failed to serialize chart: {}", e))?;
    js_sys::JSON::parse(&json).map_err(|e| format!("Failed to hand chart to Plotly: {:?}", e))
}

impl ChartSurface for PlotlySurface {
    fn plot(&self, target: &str, figure: &ForecastFigure) -> Result<(), String> {
        let data = to_js(&figure.traces)?;
        let layout = to_js(&figure.layout)?;
        let config = to_js(&figure.config)?;

        new_plot(target, data, layout, config)
            .map(|_| ())
            .map_err(|e| format!("Plotly.newPlot failed: {:?}", e))
    }

    fn purge(&self, target: &str) {
        if let Err(e) = purge_plot(target) {
            log::warn!("Plotly.purge failed on #{}: {:?}", target, e);
        }
    }

    fn resize(&self, target: &str) {
        if let Err(e) = resize_plot(target) {
            log::warn!("Plotly.Plots.resize failed on #{}: {:?}", target, e);
        }
    }
}

/// Owner of the one live chart.
///
/// [`ChartHandle::replace`] tears the current chart down before drawing
/// the next, so two charts never coexist.
pub struct ChartHandle<S: ChartSurface> {
    surface: S,
    live: Option<String>,
}

impl<S: ChartSurface> ChartHandle<S> {
    pub fn new(surface: S) -> Self {
        Self { surface, live: None }
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    pub fn replace(&mut self, target: &str, figure: &ForecastFigure) -> Result<(), String> {
        self.destroy();
        log::debug!("Drawing forecast chart into #{}", target);
        self.surface.plot(target, figure)?;
        self.live = Some(target.to_string());
        Ok(())
    }

    /// Re-layout the live chart after its container was hidden
    pub fn refresh(&self) {
        if let Some(target) = &self.live {
            self.surface.resize(target);
        }
    }

    pub fn destroy(&mut self) {
        if let Some(target) = self.live.take() {
            log::trace!("Purging chart #{}", target);
            self.surface.purge(&target);
        }
    }
}
