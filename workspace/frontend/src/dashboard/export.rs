//! Feedback shown on the export button.
//!
//! The download itself is a browser navigation whose completion is not
//! observable, so the labels follow fixed timers. Each click starts a new
//! sequence; timer steps from an older sequence are ignored.

use common::Metric;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::api_client::forecast::export_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportStatus {
    #[default]
    Idle,
    Exporting,
    Exported,
}

impl ExportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExportStatus::Idle => "Export as CSV",
            ExportStatus::Exporting => "Exporting...",
            ExportStatus::Exported => "Exported!",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ExportStatus::Idle => "fas fa-file-csv",
            ExportStatus::Exporting => "fas fa-spinner fa-spin",
            ExportStatus::Exported => "fas fa-check",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportAction {
    /// Click handled, navigation issued
    Started { sequence: u64 },
    /// First delay elapsed
    Completed { sequence: u64 },
    /// Second delay elapsed
    Reset { sequence: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportState {
    pub status: ExportStatus,
    pub sequence: u64,
}

impl Reducible for ExportState {
    type Action = ExportAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            ExportAction::Started { sequence } if sequence > self.sequence => ExportState {
                status: ExportStatus::Exporting,
                sequence,
            },
            ExportAction::Completed { sequence }
                if sequence == self.sequence && self.status == ExportStatus::Exporting =>
            {
                ExportState {
                    status: ExportStatus::Exported,
                    sequence,
                }
            }
            ExportAction::Reset { sequence }
                if sequence == self.sequence && self.status == ExportStatus::Exported =>
            {
                ExportState {
                    status: ExportStatus::Idle,
                    sequence,
                }
            }
            other => {
                log::trace!("Ignoring export step {:?} in {:?}", other, self);
                return self;
            }
        };
        Rc::new(next)
    }
}

/// Full-page navigation, which is what triggers the browser download
pub trait Navigator {
    fn navigate(&self, url: &str) -> Result<(), JsValue>;
}

pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        window.location().set_href(url)
    }
}

/// Handle one export click: navigate to the CSV download exactly once and
/// return the action that starts the label sequence.
pub fn start_export<N: Navigator>(navigator: &N, metric: Metric, sequence: u64) -> ExportAction {
    let url = export_url(metric);
    log::info!("Exporting {} as CSV via {}", metric, url);

    if let Err(e) = navigator.navigate(&url) {
        log::error!("Failed to navigate to {}: {:?}", url, e);
    }
    ExportAction::Started { sequence }
}
