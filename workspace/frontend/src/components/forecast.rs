pub mod chart;
pub mod controls;
pub mod table;
pub mod view;

pub use view::Forecast;
