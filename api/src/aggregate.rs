//! Per-level aggregation of player telemetry.
//!
//! One entry point, [`aggregate`], covers both flavours the dashboard needs:
//! averaging a left/right pair of numeric fields, and counting completion
//! reasons. Levels come out sorted and unique because the running totals live
//! in a `BTreeMap`.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
    error::FieldError,
    telemetry::{PlayerRecord, Snapshot},
};

pub const COMPLETION_REASON_FIELD: &str = "reasonforFinshingLevel";

/// Two numeric fields compared left/right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricPair {
    pub left: &'static str,
    pub right: &'static str,
}

impl MetricPair {
    pub const fn new(left: &'static str, right: &'static str) -> Self {
        Self { left, right }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// Per-level mean of both fields of the pair.
    Average(MetricPair),
    /// Per-level count of `reasonforFinshingLevel` codes: collisions below, time-ups on top.
    CompletionReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionReason {
    Collision,
    TimeUp,
}

impl CompletionReason {
    /// Code 1 is a collision, code 2 a time-up; anything else is not counted.
    pub fn from_code(value: &Value) -> Option<Self> {
        match value.as_f64() {
            Some(code) if code == 1.0 => Some(Self::Collision),
            Some(code) if code == 2.0 => Some(Self::TimeUp),
            _ => None,
        }
    }
}

/// A record left out of an aggregate, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    pub player_id: String,
    pub error: FieldError,
}

/// Aggregated series, parallel to `levels`.
///
/// `lower` is the bottom segment of each stacked bar and `upper` sits on it.
/// For [`Aggregation::Average`] these are the left and right means, for
/// [`Aggregation::CompletionReason`] the collision and time-up counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelSeries {
    pub levels: Vec<i64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    pub skipped: Vec<SkippedRecord>,
}

impl LevelSeries {
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// `(level, lower, upper)` triples in level order.
    pub fn rows(&self) -> impl Iterator<Item = (i64, f64, f64)> + '_ {
        self.levels
            .iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .map(|(level, (lower, upper))| (*level, *lower, *upper))
    }

    /// Height of the tallest stacked bar.
    pub fn max_stack(&self) -> f64 {
        self.rows()
            .map(|(_, lower, upper)| lower + upper)
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct LevelTotals {
    lower: f64,
    upper: f64,
    count: u32,
}

pub fn aggregate(snapshot: &Snapshot, aggregation: Aggregation) -> LevelSeries {
    let mut totals: BTreeMap<i64, LevelTotals> = BTreeMap::new();
    let mut skipped = Vec::new();

    for (player_id, record) in snapshot.records() {
        match record.and_then(|record| contribution(&record, aggregation)) {
            Ok((level, lower, upper)) => {
                let entry = totals.entry(level).or_default();
                entry.lower += lower;
                entry.upper += upper;
                entry.count = entry.count.saturating_add(1);
            }
            Err(error) => {
                tracing::warn!(player = player_id, %error, ?aggregation, "skipping telemetry record");
                skipped.push(SkippedRecord {
                    player_id: player_id.to_string(),
                    error,
                });
            }
        }
    }

    let mut series = LevelSeries {
        levels: Vec::with_capacity(totals.len()),
        lower: Vec::with_capacity(totals.len()),
        upper: Vec::with_capacity(totals.len()),
        skipped,
    };

    for (level, level_totals) in totals {
        let (lower, upper) = match aggregation {
            // count >= 1: an entry only exists once a record contributed to it.
            Aggregation::Average(_) => {
                let count = f64::from(level_totals.count);
                (level_totals.lower / count, level_totals.upper / count)
            }
            Aggregation::CompletionReason => (level_totals.lower, level_totals.upper),
        };
        series.levels.push(level);
        series.lower.push(lower);
        series.upper.push(upper);
    }

    series
}

fn contribution(
    record: &PlayerRecord<'_>,
    aggregation: Aggregation,
) -> Result<(i64, f64, f64), FieldError> {
    let level = record.level()?;
    match aggregation {
        Aggregation::Average(pair) => {
            let left = record.number(pair.left)?;
            let right = record.number(pair.right)?;
            Ok((level, left, right))
        }
        Aggregation::CompletionReason => {
            let code = record.field(COMPLETION_REASON_FIELD)?;
            Ok(match CompletionReason::from_code(code) {
                Some(CompletionReason::Collision) => (level, 1.0, 0.0),
                Some(CompletionReason::TimeUp) => (level, 0.0, 1.0),
                None => (level, 0.0, 0.0),
            })
        }
    }
}
