mod allocation;
mod chart;
pub mod fmt;

pub use crate::allocation::{wallet_key, Allocation};
pub use crate::chart::{
    distribution_chart, AxisRange, AxisSide, ChartDescription, LogAxis, MarkerFill, MarkerStyle,
    ScatterSeries, SECONDARY_X_OFFSET,
};
