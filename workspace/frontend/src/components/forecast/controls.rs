use common::Metric;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::dashboard::export::ExportStatus;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub metric: Metric,
    pub export_status: ExportStatus,
    pub loading: bool,
    pub on_metric_change: Callback<Metric>,
    pub on_predict: Callback<()>,
    pub on_export: Callback<()>,
}

#[function_component(ForecastControls)]
pub fn forecast_controls(props: &Props) -> Html {
    let on_change = {
        let on_metric_change = props.on_metric_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            match value.parse::<Metric>() {
                Ok(metric) => on_metric_change.emit(metric),
                Err(e) => log::warn!("Ignoring selection: {}", e),
            }
        })
    };

    let on_predict = {
        let on_predict = props.on_predict.clone();
        Callback::from(move |_: MouseEvent| on_predict.emit(()))
    };

    let on_export = {
        let on_export = props.on_export.clone();
        Callback::from(move |_: MouseEvent| on_export.emit(()))
    };

    html! {
        <div class="flex flex-wrap justify-between items-end gap-4 mb-6">
            <div class="form-control w-full max-w-xs">
                <label class="label" for="metric-select">
                    <span class="label-text">{"Metric"}</span>
                </label>
                <select id="metric-select" class="select select-bordered" onchange={on_change}>
                    {for Metric::ALL.iter().map(|metric| html! {
                        <option
                            key={metric.as_str()}
                            value={metric.as_str()}
                            selected={*metric == props.metric}
                        >
                            {metric.as_str()}
                        </option>
                    })}
                </select>
            </div>
            <div class="flex gap-2">
                <button id="predict-btn" class="btn btn-primary" onclick={on_predict}>
                    if props.loading {
                        <span class="loading loading-spinner loading-sm"></span>
                    } else {
                        <i class="fas fa-magic"></i>
                    }
                    {"Predict"}
                </button>
                <button id="export-csv-btn" class="btn btn-outline" onclick={on_export}>
                    <i class={props.export_status.icon()}></i>
                    {props.export_status.label()}
                </button>
            </div>
        </div>
    }
}
