pub mod chart;
pub mod chart_type_selector;
pub mod graph;
pub mod tooltip;

pub use chart_type_selector::ChartTypeSelector;
pub use graph::{Graph, GraphProps};
pub use tooltip::{GraphTooltip, TooltipProps};
