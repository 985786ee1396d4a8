//! The fixed set of charts shown on the dashboard, in display order.

use crate::aggregate::{Aggregation, MetricPair};

/// How segment annotations are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Averages, two decimals.
    Decimal,
    /// Counts, no decimals.
    Count,
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            ValueFormat::Decimal => format!("{value:.2}"),
            ValueFormat::Count => format!("{value:.0}"),
        }
    }
}

/// Labels and aggregation for one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub lower_label: &'static str,
    pub upper_label: &'static str,
    pub aggregation: Aggregation,
    pub value_format: ValueFormat,
}

pub const SCORES: ChartSpec = ChartSpec {
    id: "scores",
    title: "Scores Collected per Level",
    x_label: "Levels",
    y_label: "Average Score Props Collected",
    lower_label: "Left Screen",
    upper_label: "Right Screen",
    aggregation: Aggregation::Average(MetricPair::new("scoreLeft", "scoreRight")),
    value_format: ValueFormat::Decimal,
};

pub const COMPLETION_REASON: ChartSpec = ChartSpec {
    id: "completion-reason",
    title: "Level Completion Reason",
    x_label: "Levels",
    y_label: "Total Number of Game Completions",
    lower_label: "Collision",
    upper_label: "Time Up",
    aggregation: Aggregation::CompletionReason,
    value_format: ValueFormat::Count,
};

pub const PROP_USAGE: ChartSpec = ChartSpec {
    id: "prop-usage",
    title: "Usage of Control-Flipping Props",
    x_label: "Levels",
    y_label: "Average Control-Flipping Props",
    lower_label: "Props Left",
    upper_label: "Props Right",
    aggregation: Aggregation::Average(MetricPair::new(
        "totalCtrlSwitchPropCollectedLeft",
        "totalCtrlSwitchPropCollectedRight",
    )),
    value_format: ValueFormat::Decimal,
};

pub const FLIP_COLLISIONS: ChartSpec = ChartSpec {
    id: "flip-collisions",
    title: "Collisions after Control-Flip per Level",
    x_label: "Levels",
    y_label: "Average Number of Obstacle Collisions",
    lower_label: "Collisions Left",
    upper_label: "Collisions Right",
    aggregation: Aggregation::Average(MetricPair::new(
        "collisionDueToCtrlFlipLeft",
        "collisionDueToCtrlFlipRight",
    )),
    value_format: ValueFormat::Decimal,
};

pub const DASHBOARD_CHARTS: [ChartSpec; 4] = [SCORES, COMPLETION_REASON, PROP_USAGE, FLIP_COLLISIONS];
