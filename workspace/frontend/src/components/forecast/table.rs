use common::{ForecastSeries, Metric};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub series: Rc<ForecastSeries>,
    pub metric: Metric,
}

/// Table cell text; nulls render as empty cells
pub fn format_cell(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

#[function_component(ForecastTable)]
pub fn forecast_table(props: &Props) -> Html {
    let metric = props.metric;

    html! {
        <div class="overflow-x-auto bg-base-100 shadow rounded-box mt-6">
            <table class="table table-zebra table-sm">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th class="text-right">{format!("Real {}", metric)}</th>
                        <th class="text-right">{format!("Predicted {}", metric)}</th>
                        <th class="text-right">{"Upper Bound"}</th>
                        <th class="text-right">{"Lower Bound"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.series.points().map(|p| html! {
                        <tr class="hover">
                            <td class="whitespace-nowrap">{&p.date}</td>
                            <td class="font-mono text-right">{format_cell(p.real)}</td>
                            <td class="font-mono text-right">{format_cell(p.predicted)}</td>
                            <td class="font-mono text-right">{format_cell(p.upper)}</td>
                            <td class="font-mono text-right">{format_cell(p.lower)}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
