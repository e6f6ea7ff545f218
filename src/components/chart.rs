use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid},
    element::{
        AreaStyle, AxisLabel, AxisType, Color, ColorStop, ItemStyle, LineStyle, LineStyleType,
        SplitLine,
    },
    renderer::WasmRenderer,
    series::{Bar, Line, Series},
};
use std::rc::Rc;
use web_sys::HtmlElement;

use crate::config::Config;
use crate::models::chart::{ChartOptions, ChartType, GRID, GridInsets, ValueTicks, axis_labels};
use crate::models::series::Value;

const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";

/// Stroke and gradient stops for one chart style.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Palette {
    stroke: &'static str,
    top: &'static str,
    bottom: &'static str,
}

// Placeholder frames are drawn grey so they never read as real data
const PLACEHOLDER: Palette = Palette {
    stroke: "#9ca3af",
    top: "rgba(156, 163, 175, 0.45)",
    bottom: "rgba(156, 163, 175, 0.05)",
};

impl ChartType {
    const fn palette(self) -> Palette {
        match self {
            Self::Area => Palette {
                stroke: "#648fff",
                top: "rgba(100, 143, 255, 0.45)",
                bottom: "rgba(100, 143, 255, 0.02)",
            },
            Self::Bar => Palette {
                stroke: "#785ef0",
                top: "#785ef0",
                bottom: "rgba(120, 94, 240, 0.35)",
            },
        }
    }

    fn gradient(palette: Palette) -> Color {
        Color::LinearGradient {
            x: 0.,
            y: 0.,
            x2: 0.,
            y2: 1.,
            color_stops: vec![
                ColorStop::new(0, palette.top),
                ColorStop::new(1, palette.bottom),
            ],
        }
    }

    /// Builds the charming series for this strategy.
    fn series(self, values: Vec<f64>, placeholder: bool) -> Series {
        let palette = if placeholder {
            PLACEHOLDER
        } else {
            self.palette()
        };

        match self {
            Self::Area => Line::new()
                .data(values)
                .smooth(true)
                .show_symbol(false)
                .line_style(LineStyle::new().color(palette.stroke).width(2))
                .area_style(AreaStyle::new().color(Self::gradient(palette)))
                .into(),
            Self::Bar => Bar::new()
                .data(values)
                .bar_width("60%")
                .item_style(ItemStyle::new().color(Self::gradient(palette)))
                .into(),
        }
    }
}

/// Everything needed to draw one frame of a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub series: Rc<Vec<Value>>,
    pub options: ChartOptions,
    pub ticks: ValueTicks,
    pub placeholder: bool,
}

impl ChartFrame {
    pub fn build(&self) -> CharmingChart {
        let options = &self.options;
        let chart_type = options.chart_type;

        let x_labels = axis_labels(
            &self.series,
            Config::AXIS_DATE_FORMAT,
            options.start_end_only,
        );
        let values: Vec<f64> = self.series.iter().map(|v| v.value).collect();

        let mut x_label = AxisLabel::new().color(AXIS_COLOR);
        if options.start_end_only {
            // Blank labels hold the middle slots, so every slot must be drawn
            x_label = x_label.interval(0);
        }

        CharmingChart::new()
            .grid(
                Grid::new()
                    .left(GridInsets::css(GRID.left).as_str())
                    .right(GridInsets::css(GRID.right).as_str())
                    .top(GridInsets::css(GRID.top).as_str())
                    .bottom(GridInsets::css(GRID.bottom).as_str()),
            )
            .x_axis(
                Axis::new()
                    .type_(AxisType::Category)
                    .show(options.show_x_axis)
                    .boundary_gap(chart_type.boundary_gap())
                    .data(x_labels)
                    .axis_label(x_label),
            )
            .y_axis(
                // Labels come from the overlay so they go through the formatter
                Axis::new()
                    .type_(AxisType::Value)
                    .min(self.ticks.min)
                    .max(self.ticks.max)
                    .interval(self.ticks.step)
                    .axis_label(AxisLabel::new().show(false))
                    .split_line(
                        SplitLine::new().show(options.show_y_axis).line_style(
                            LineStyle::new()
                                .color(GRID_COLOR)
                                .type_(LineStyleType::Dashed),
                        ),
                    ),
            )
            .series(chart_type.series(values, self.placeholder))
    }
}

/// Draws `frame` into the element `chart_id`, sized to `container`.
pub fn render_chart(container: &HtmlElement, chart_id: &str, frame: &ChartFrame) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(chart_id, &frame.build()) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}
