use common::{ForecastSeries, Metric};
use std::rc::Rc;
use yew::prelude::*;

use crate::dashboard::chart::{ChartHandle, PlotlySurface};
use crate::dashboard::figure::ForecastFigure;
use crate::dashboard::state::Phase;

pub const CHART_ID: &str = "forecast-chart";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub series: Option<Rc<ForecastSeries>>,
    pub metric: Option<Metric>,
    pub revision: u64,
    pub phase: Phase,
}

#[function_component(ForecastChart)]
pub fn forecast_chart(props: &Props) -> Html {
    let handle = use_mut_ref(|| ChartHandle::new(PlotlySurface));

    // Redraw once per successful predict
    {
        let handle = handle.clone();
        let series = props.series.clone();
        let metric = props.metric;
        use_effect_with(props.revision, move |revision| {
            if let (Some(series), Some(metric)) = (series, metric) {
                log::debug!("Rendering forecast revision {} for {}", revision, metric);
                let drawn = ForecastFigure::build(&series)
                    .and_then(|figure| handle.borrow_mut().replace(CHART_ID, &figure));
                if let Err(e) = drawn {
                    log::error!("Failed to render forecast chart: {}", e);
                }
            }
            || ()
        });
    }

    // The surface was hidden during the request; re-layout the chart it kept
    {
        let handle = handle.clone();
        use_effect_with(props.phase, move |phase| {
            if *phase == Phase::Failed {
                handle.borrow().refresh();
            }
            || ()
        });
    }

    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            move || handle.borrow_mut().destroy()
        });
    }

    let hidden = props.phase == Phase::Loading;

    html! {
        <div
            id={CHART_ID}
            class={classes!("w-full", hidden.then_some("hidden"))}
            style="min-height: 450px;"
        ></div>
    }
}
