use common::Metric;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::chart::ForecastChart;
use super::controls::ForecastControls;
use super::table::ForecastTable;
use crate::api_client::forecast::get_forecast;
use crate::common::loading::LoadingOverlay;
use crate::common::toast::ToastContext;
use crate::dashboard::export::{start_export, BrowserNavigator, ExportAction, ExportState};
use crate::dashboard::state::{DashboardAction, DashboardState, TicketCounter};
use crate::settings;

/// Dashboard controller: metric selection, predict and export.
#[function_component(Forecast)]
pub fn forecast() -> Html {
    let state = use_reducer(DashboardState::default);
    let export = use_reducer(ExportState::default);
    let tickets = use_mut_ref(TicketCounter::default);
    let export_sequences = use_mut_ref(TicketCounter::default);
    let toast_ctx = use_context::<ToastContext>();

    let on_metric_change = {
        let state = state.clone();
        Callback::from(move |metric: Metric| {
            state.dispatch(DashboardAction::SelectMetric(metric));
        })
    };

    let on_predict = {
        let state = state.clone();
        let tickets = tickets.clone();
        let toast_ctx = toast_ctx.clone();

        Callback::from(move |_: ()| {
            let metric = state.metric;
            let ticket = tickets.borrow_mut().next();
            log::info!("Predict #{} requested for {}", ticket, metric);
            state.dispatch(DashboardAction::PredictStarted { ticket });

            let state = state.clone();
            let tickets = tickets.clone();
            let toast_ctx = toast_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match get_forecast(metric).await {
                    Ok(series) => {
                        state.dispatch(DashboardAction::PredictSucceeded { ticket, metric, series });
                    }
                    Err(error) => {
                        log::error!("Predict #{} for {} failed: {}", ticket, metric, error);
                        if tickets.borrow().is_latest(ticket) {
                            if let Some(toast_ctx) = &toast_ctx {
                                toast_ctx.show_error(format!("Could not load the {} forecast: {}", metric, error));
                            }
                        }
                        state.dispatch(DashboardAction::PredictFailed { ticket, error });
                    }
                }
            });
        })
    };

    let on_export = {
        let export = export.clone();
        let metric = state.metric;

        Callback::from(move |_: ()| {
            let sequence = export_sequences.borrow_mut().next();
            export.dispatch(start_export(&BrowserNavigator, metric, sequence));

            let delay = settings::get_settings().export_feedback_ms;
            let export = export.clone();
            Timeout::new(delay, move || {
                export.dispatch(ExportAction::Completed { sequence });
                let export = export.clone();
                Timeout::new(delay, move || {
                    export.dispatch(ExportAction::Reset { sequence });
                })
                .forget();
            })
            .forget();
        })
    };

    html! {
        <>
            <ForecastControls
                metric={state.metric}
                export_status={export.status}
                loading={state.is_loading()}
                {on_metric_change}
                {on_predict}
                {on_export}
            />
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <LoadingOverlay
                        visible={state.is_loading()}
                        text={Some(format!("Forecasting {}...", state.metric))}
                    />
                    <ForecastChart
                        series={state.series.clone()}
                        metric={state.rendered_metric}
                        revision={state.revision}
                        phase={state.phase}
                    />
                    if state.series.is_none() && !state.is_loading() {
                        <div class="text-center py-8 text-gray-500">
                            <i class="fas fa-chart-area text-4xl mb-4 opacity-50"></i>
                            <p>{"Pick a metric and press Predict to see its forecast."}</p>
                        </div>
                    }
                </div>
            </div>
            if let (Some(series), Some(metric)) = (state.series.clone(), state.rendered_metric) {
                <ForecastTable {series} {metric} />
            }
        </>
    }
}
