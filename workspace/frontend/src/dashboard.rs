//! Dashboard controller: predict lifecycle, export feedback and the chart
//! handle, kept free of markup so they can be driven directly in tests.

pub mod chart;
pub mod export;
pub mod figure;
pub mod state;
