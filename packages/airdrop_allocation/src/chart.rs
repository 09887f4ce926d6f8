use cosmwasm_std::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::allocation::Allocation;
use crate::fmt::format_amount;

/// Constant horizontal shift of the secondary series so the two series
/// occupy visibly separate x-ranges instead of overlaying each other.
pub const SECONDARY_X_OFFSET: u64 = 25;

const CHART_TITLE: &str = "Distribution of Rewards (Log Scale)";
const X_AXIS_TITLE: &str = "Rank";
const PRIMARY_SERIES_NAME: &str = "Drop";
const SECONDARY_SERIES_NAME: &str = "Shards";

const PRIMARY_MARKER_SIZE: u32 = 6;
const SECONDARY_MARKER_SIZE: u32 = 4;
const HIGHLIGHT_LINE_WIDTH: u32 = 2;
const HIGHLIGHT_LINE_COLOR: &str = "#00ff00";
const DEFAULT_LINE_COLOR: &str = "white";
const PRIMARY_COLORSCALE: &str = "Viridis";
const SECONDARY_FILL: &str = "rgba(255, 0, 0, 0.5)";
const SECONDARY_HIGHLIGHT_FILL: &str = "rgba(255, 0, 0, 0.8)";

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub enum AxisSide {
    Left,
    Right,
}

/// Axis bounds in data units. The renderer applies the log scale, so the
/// builder only guarantees the range never starts at or below zero.
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct AxisRange {
    pub min: Decimal,
    pub max: Decimal,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct LogAxis {
    pub title: String,
    pub side: AxisSide,
    pub range: AxisRange,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub enum MarkerFill {
    /// per-point fill sampled from a continuous colorscale keyed on `values`
    Gradient {
        values: Vec<Decimal>,
        colorscale: String,
    },
    /// per-point fixed css colors
    Flat { colors: Vec<String> },
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct MarkerStyle {
    pub sizes: Vec<u32>,
    pub fill: MarkerFill,
    pub line_widths: Vec<u32>,
    pub line_colors: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct ScatterSeries {
    pub name: String,
    pub y_axis: AxisSide,
    pub x: Vec<u64>,
    pub y: Vec<Decimal>,
    pub hover_text: Vec<String>,
    pub marker: MarkerStyle,
}

/// Declarative chart layout: two scatter series over a shared rank axis
/// with two independent log-scaled vertical axes. Rendered as-is by the
/// consumer.
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct ChartDescription {
    pub title: String,
    pub x_axis_title: String,
    pub primary: ScatterSeries,
    pub secondary: ScatterSeries,
    pub primary_axis: LogAxis,
    pub secondary_axis: LogAxis,
}

/// Builds the reward distribution chart for the given allocation sequence,
/// optionally emphasizing the point at `highlight` in both series. Pure:
/// the same inputs always produce the same description, and highlighting
/// only restyles markers, it never changes point counts, values or axes.
pub fn distribution_chart(
    allocations: &[Allocation],
    highlight: Option<usize>,
) -> ChartDescription {
    // an out-of-range position degrades to no highlight
    let highlight = highlight.filter(|position| *position < allocations.len());
    let count = allocations.len();

    let drop_amounts: Vec<Decimal> = allocations.iter().map(|a| a.drop_amount).collect();
    let shard_counts: Vec<Decimal> = allocations.iter().map(|a| a.shard_count).collect();

    let primary = ScatterSeries {
        name: PRIMARY_SERIES_NAME.to_string(),
        y_axis: AxisSide::Left,
        x: (0..count as u64).collect(),
        y: drop_amounts.clone(),
        hover_text: allocations
            .iter()
            .enumerate()
            .map(|(position, allocation)| primary_hover(position, allocation))
            .collect(),
        marker: MarkerStyle {
            sizes: marker_sizes(count, highlight, PRIMARY_MARKER_SIZE),
            fill: MarkerFill::Gradient {
                values: drop_amounts.clone(),
                colorscale: PRIMARY_COLORSCALE.to_string(),
            },
            line_widths: line_widths(count, highlight),
            line_colors: line_colors(count, highlight),
        },
    };

    let secondary = ScatterSeries {
        name: SECONDARY_SERIES_NAME.to_string(),
        y_axis: AxisSide::Right,
        x: (0..count as u64).map(|p| p + SECONDARY_X_OFFSET).collect(),
        y: shard_counts.clone(),
        hover_text: allocations
            .iter()
            .enumerate()
            .map(|(position, allocation)| secondary_hover(position, allocation))
            .collect(),
        marker: MarkerStyle {
            sizes: marker_sizes(count, highlight, SECONDARY_MARKER_SIZE),
            fill: MarkerFill::Flat {
                colors: secondary_fills(count, highlight),
            },
            line_widths: line_widths(count, highlight),
            line_colors: line_colors(count, highlight),
        },
    };

    ChartDescription {
        title: CHART_TITLE.to_string(),
        x_axis_title: X_AXIS_TITLE.to_string(),
        primary,
        secondary,
        primary_axis: log_axis(PRIMARY_SERIES_NAME, AxisSide::Left, &drop_amounts),
        secondary_axis: log_axis(SECONDARY_SERIES_NAME, AxisSide::Right, &shard_counts),
    }
}

fn marker_sizes(count: usize, highlight: Option<usize>, base: u32) -> Vec<u32> {
    (0..count)
        .map(|position| {
            if Some(position) == highlight {
                base * 2
            } else {
                base
            }
        })
        .collect()
}

fn line_widths(count: usize, highlight: Option<usize>) -> Vec<u32> {
    (0..count)
        .map(|position| {
            if Some(position) == highlight {
                HIGHLIGHT_LINE_WIDTH
            } else {
                0
            }
        })
        .collect()
}

fn line_colors(count: usize, highlight: Option<usize>) -> Vec<String> {
    (0..count)
        .map(|position| {
            if Some(position) == highlight {
                HIGHLIGHT_LINE_COLOR.to_string()
            } else {
                DEFAULT_LINE_COLOR.to_string()
            }
        })
        .collect()
}

fn secondary_fills(count: usize, highlight: Option<usize>) -> Vec<String> {
    (0..count)
        .map(|position| {
            if Some(position) == highlight {
                SECONDARY_HIGHLIGHT_FILL.to_string()
            } else {
                SECONDARY_FILL.to_string()
            }
        })
        .collect()
}

/// Range `[1, max]` in data units. An empty or all-zero series resolves to
/// `[1, 1]` so the renderer never takes a logarithm of zero.
fn log_axis(title: &str, side: AxisSide, values: &[Decimal]) -> LogAxis {
    let max = values.iter().copied().max().unwrap_or_default();
    LogAxis {
        title: title.to_string(),
        side,
        range: AxisRange {
            min: Decimal::one(),
            max: max.max(Decimal::one()),
        },
    }
}

fn primary_hover(position: usize, allocation: &Allocation) -> String {
    format!(
        "Rank: {}<br>Name: {}<br>Wallet: {}<br>Drop: {}<br>Shards: {}",
        position + 1,
        allocation.name,
        allocation.wallet_address,
        format_amount(allocation.drop_amount, 2),
        format_amount(allocation.shard_count, 0),
    )
}

fn secondary_hover(position: usize, allocation: &Allocation) -> String {
    format!(
        "Rank: {}<br>Shards: {}",
        position + 1,
        format_amount(allocation.shard_count, 0),
    )
}
