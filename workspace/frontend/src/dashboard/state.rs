//! Predict lifecycle of the dashboard.
//!
//! Every predict click takes a ticket from [`TicketCounter`]. Only the
//! completion carrying the most recent ticket is applied; completions of
//! superseded requests are dropped, so the final chart always reflects the
//! last click regardless of the order responses arrive in.

use common::{ForecastSeries, Metric};
use std::rc::Rc;
use yew::prelude::*;

/// Where the dashboard is in the predict cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A forecast request is in flight
    Loading,
    /// The latest request succeeded and its series is on screen
    Rendered,
    /// The latest request failed; any earlier chart stays on screen
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    SelectMetric(Metric),
    PredictStarted { ticket: u64 },
    PredictSucceeded {
        ticket: u64,
        metric: Metric,
        series: ForecastSeries,
    },
    PredictFailed { ticket: u64, error: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub metric: Metric,
    pub phase: Phase,
    /// Series currently drawn, kept across failures
    pub series: Option<Rc<ForecastSeries>>,
    /// Metric the drawn series belongs to
    pub rendered_metric: Option<Metric>,
    /// Bumped on every successful render; the chart effect keys on it
    pub revision: u64,
    /// Ticket of the request whose completion will be applied
    pub in_flight: Option<u64>,
    pub last_error: Option<String>,
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// The chart surface is hidden only while a request is in flight
    pub fn chart_visible(&self) -> bool {
        !self.is_loading()
    }

    fn accepts(&self, ticket: u64) -> bool {
        self.in_flight == Some(ticket)
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DashboardAction::SelectMetric(metric) => {
                log::debug!("Metric selected: {}", metric);
                Rc::new(Self {
                    metric,
                    ..(*self).clone()
                })
            }
            DashboardAction::PredictStarted { ticket } => {
                if let Some(previous) = self.in_flight {
                    log::debug!("Predict #{} supersedes #{}", ticket, previous);
                }
                Rc::new(Self {
                    phase: Phase::Loading,
                    in_flight: Some(ticket),
                    last_error: None,
                    ..(*self).clone()
                })
            }
            DashboardAction::PredictSucceeded { ticket, metric, series } => {
                if !self.accepts(ticket) {
                    log::debug!("Dropping stale forecast from predict #{}", ticket);
                    return self;
                }
                Rc::new(Self {
                    phase: Phase::Rendered,
                    series: Some(Rc::new(series)),
                    rendered_metric: Some(metric),
                    revision: self.revision + 1,
                    in_flight: None,
                    last_error: None,
                    ..(*self).clone()
                })
            }
            DashboardAction::PredictFailed { ticket, error } => {
                if !self.accepts(ticket) {
                    log::debug!("Dropping stale failure from predict #{}: {}", ticket, error);
                    return self;
                }
                Rc::new(Self {
                    phase: Phase::Failed,
                    in_flight: None,
                    last_error: Some(error),
                    ..(*self).clone()
                })
            }
        }
    }
}

/// Hands out predict tickets, strictly increasing
#[derive(Debug, Default)]
pub struct TicketCounter {
    last: u64,
}

impl TicketCounter {
    pub fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// Whether no ticket was handed out after `ticket`
    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.last
    }
}
