//! Geometry of a stacked bar chart, in SVG pixel coordinates.

use crate::aggregate::LevelSeries;

pub const WIDTH: f64 = 640.0;
pub const HEIGHT: f64 = 480.0;

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 52.0;
const MARGIN_BOTTOM: f64 = 64.0;

/// Bar width in level units; bars are centred on their level.
pub const BAR_WIDTH: f64 = 0.3;

/// Upper bound on y intervals before the tick step grows.
const MAX_Y_INTERVALS: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

/// One segment of a stacked bar. `value` is the raw series value; `y` and
/// `height` are clamped so negative values draw nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub value: f64,
    pub y: f64,
    pub height: f64,
}

impl Segment {
    pub fn is_visible(&self) -> bool {
        self.value > 0.0
    }

    pub fn label_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub level: i64,
    pub x: f64,
    pub width: f64,
    pub lower: Segment,
    pub upper: Segment,
}

impl Bar {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Axis tick: a level on the x axis, a whole-number value on the y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick<T> {
    pub value: T,
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub plot: PlotArea,
    pub x_ticks: Vec<Tick<i64>>,
    pub y_ticks: Vec<Tick<f64>>,
    pub bars: Vec<Bar>,
}

impl ChartLayout {
    pub fn compute(series: &LevelSeries) -> Self {
        let plot = PlotArea {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            right: WIDTH - MARGIN_RIGHT,
            bottom: HEIGHT - MARGIN_BOTTOM,
        };

        let tick_values = integer_ticks(series.max_stack());
        let y_max = tick_values.last().copied().unwrap_or(1.0).max(1.0);
        let y_at = |value: f64| plot.bottom - (value.max(0.0) / y_max) * plot.height();

        let y_ticks = tick_values
            .iter()
            .map(|&value| Tick {
                value,
                position: y_at(value),
            })
            .collect();

        let (first, last) = match (series.levels.first(), series.levels.last()) {
            (Some(first), Some(last)) => (*first as f64, *last as f64),
            _ => {
                return Self {
                    plot,
                    x_ticks: Vec::new(),
                    y_ticks,
                    bars: Vec::new(),
                }
            }
        };

        let x_min = first - 0.5;
        let x_span = (last + 0.5) - x_min;
        let x_at = |level: f64| plot.left + (level - x_min) / x_span * plot.width();
        let bar_px = BAR_WIDTH / x_span * plot.width();

        let mut x_ticks = Vec::with_capacity(series.levels.len());
        let mut bars = Vec::with_capacity(series.levels.len());

        for (level, lower, upper) in series.rows() {
            let center = x_at(level as f64);
            x_ticks.push(Tick {
                value: level,
                position: center,
            });

            let lower_base = lower.max(0.0);
            let lower_top = y_at(lower_base);
            let upper_top = y_at(lower_base + upper.max(0.0));

            bars.push(Bar {
                level,
                x: center - bar_px / 2.0,
                width: bar_px,
                lower: Segment {
                    value: lower,
                    y: lower_top,
                    height: plot.bottom - lower_top,
                },
                upper: Segment {
                    value: upper,
                    y: upper_top,
                    height: lower_top - upper_top,
                },
            });
        }

        Self {
            plot,
            x_ticks,
            y_ticks,
            bars,
        }
    }
}

/// Whole-number ticks from 0 covering `max`, using steps of 1, 2 or 5 times a
/// power of ten so that there are at most eight intervals.
///
/// Worked out in `f64` so values beyond the integer types still get an
/// ascending axis; the last tick is never below `max`.
pub fn integer_ticks(max: f64) -> Vec<f64> {
    let top = if max.is_finite() && max > 0.0 {
        max.ceil()
    } else {
        1.0
    };
    let step = integer_step(top);
    let intervals = (top / step).ceil().clamp(1.0, MAX_Y_INTERVALS) as u32;

    let mut ticks: Vec<f64> = (0..=intervals)
        .map(|i| f64::from(i) * step)
        .take_while(|tick| tick.is_finite())
        .collect();
    // Near f64::MAX the last whole step overflows; close the axis at `top` instead.
    if ticks.len() == intervals as usize + 1 {
        if let Some(last) = ticks.last_mut() {
            *last = last.max(top);
        }
    } else {
        ticks.push(top);
    }
    ticks
}

fn integer_step(top: f64) -> f64 {
    let mut magnitude = 1.0_f64;
    loop {
        for factor in [1.0, 2.0, 5.0] {
            let step = factor * magnitude;
            if !step.is_finite() {
                return top;
            }
            if (top / step).ceil() <= MAX_Y_INTERVALS {
                return step;
            }
        }
        magnitude *= 10.0;
    }
}
