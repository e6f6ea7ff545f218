use super::{error::AppError, series::Value};
use crate::config::Config;
use serde::{Deserialize, Serialize};

/// Rendering strategy for a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Area,
    Bar,
}

impl ChartType {
    /// Returns the identifier used in configuration and storage.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Bar => "bar",
        }
    }

    /// Returns a human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Area => "Area",
            Self::Bar => "Bar",
        }
    }

    /// Bars occupy a band per category; area points sit on the ticks.
    pub const fn boundary_gap(&self) -> bool {
        matches!(self, Self::Bar)
    }

    /// All available chart types.
    pub const fn all() -> &'static [Self] {
        &[Self::Area, Self::Bar]
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for ChartType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "area" => Ok(Self::Area),
            "bar" => Ok(Self::Bar),
            _ => Err(AppError::ConfigError(format!("Invalid chart type: {s}"))),
        }
    }
}

/// Caller-supplied display options for a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub chart_type: ChartType,
    pub limit: usize,
    pub reverse: bool,
    pub show_x_axis: bool,
    pub show_y_axis: bool,
    pub start_end_only: bool,
}

impl ChartOptions {
    pub const fn chart_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = chart_type;
        self
    }

    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub const fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub const fn show_x_axis(mut self, show: bool) -> Self {
        self.show_x_axis = show;
        self
    }

    pub const fn show_y_axis(mut self, show: bool) -> Self {
        self.show_y_axis = show;
        self
    }

    pub const fn start_end_only(mut self, start_end_only: bool) -> Self {
        self.start_end_only = start_end_only;
        self
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            chart_type: ChartType::default(),
            limit: Config::DEFAULT_LIMIT,
            reverse: false,
            show_x_axis: true,
            show_y_axis: true,
            start_end_only: false,
        }
    }
}

/// Plot area insets as percentages of the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridInsets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

pub const GRID: GridInsets = GridInsets {
    left: 10.0,
    right: 4.0,
    top: 8.0,
    bottom: 14.0,
};

impl GridInsets {
    pub fn css(value: f64) -> String {
        format!("{value}%")
    }

    /// Width of the plot area as a fraction of the container.
    pub fn plot_width(&self) -> f64 {
        (100.0 - self.left - self.right) / 100.0
    }

    /// Height of the plot area as a fraction of the container.
    pub fn plot_height(&self) -> f64 {
        (100.0 - self.top - self.bottom) / 100.0
    }
}

/// Category labels for the X axis.
///
/// With `start_end_only` every label but the first and last is blanked, so
/// the axis keeps one slot per point.
pub fn axis_labels(series: &[Value], format: &str, start_end_only: bool) -> Vec<String> {
    let last = series.len().saturating_sub(1);
    series
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if !start_end_only || i == 0 || i == last {
                v.timestamp.format(format).to_string()
            } else {
                String::new()
            }
        })
        .collect()
}

const MAX_TICKS: usize = 32;

/// A value axis scale with evenly spaced, rounded ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueTicks {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ValueTicks {
    /// Builds a scale covering zero and every value with roughly `target` steps.
    pub fn for_values(values: impl IntoIterator<Item = f64>, target: usize) -> Self {
        let (lo, hi) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let hi = if hi - lo < f64::EPSILON { lo + 1.0 } else { hi };

        let target = target.max(1);
        let step = nice_step((hi - lo) / target as f64);
        let min = round_to_step((lo / step).floor() * step, step);
        let max = round_to_step((hi / step).ceil() * step, step);

        // Rounding outward can overflow near f64::MAX; keep the raw bounds
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Self {
                min: lo,
                max: hi,
                step: hi / target as f64 - lo / target as f64,
            };
        }

        Self { min, max, step }
    }

    /// Tick values from `min` to `max`, inclusive.
    pub fn values(&self) -> Vec<f64> {
        if !(self.step > 0.0 && self.step.is_finite()) {
            return vec![self.min, self.max];
        }

        let span = self.max / self.step - self.min / self.step;
        let count = if span.is_finite() {
            (span.round() as usize).clamp(1, MAX_TICKS)
        } else {
            MAX_TICKS
        };
        (0..=count)
            .map(|i| {
                // Interpolated so no intermediate sum can overflow
                let t = i as f64 / count as f64;
                round_to_step(self.min * (1.0 - t) + self.max * t, self.step)
            })
            .collect()
    }

    /// Position of `value` on the scale, 0.0 at `min` and 1.0 at `max`.
    pub fn fraction(&self, value: f64) -> f64 {
        // Halved so the differences stay finite across the whole f64 range
        let span = self.max / 2.0 - self.min / 2.0;
        if span <= 0.0 {
            0.0
        } else {
            ((value / 2.0 - self.min / 2.0) / span).clamp(0.0, 1.0)
        }
    }
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10_f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

// Strips float noise such as 0.6000000000000001 from tick labels.
fn round_to_step(value: f64, step: f64) -> f64 {
    let decimals = (-step.log10().floor()).max(0.0) as i32;
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Maps a pointer offset inside the chart container to the nearest point.
///
/// Returns `None` outside the plot area or for an empty series.
pub fn hover_index(offset_x: f64, width: f64, len: usize, boundary_gap: bool) -> Option<usize> {
    if len == 0 || width <= 0.0 {
        return None;
    }

    let left = width * GRID.left / 100.0;
    let fraction = (offset_x - left) / (width * GRID.plot_width());
    if !(0.0..=1.0).contains(&fraction) {
        return None;
    }

    let index = if boundary_gap {
        (fraction * len as f64).floor()
    } else {
        (fraction * len.saturating_sub(1) as f64).round()
    };

    Some((index as usize).min(len - 1))
}

/// Horizontal position of a point, as a percentage of the container width.
pub fn point_offset(index: usize, len: usize, boundary_gap: bool) -> f64 {
    let fraction = if boundary_gap {
        (index as f64 + 0.5) / len.max(1) as f64
    } else if len <= 1 {
        0.0
    } else {
        index as f64 / (len - 1) as f64
    };
    GRID.left + fraction * GRID.plot_width() * 100.0
}
