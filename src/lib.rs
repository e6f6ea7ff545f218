pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod utils;

pub use components::{Graph, GraphProps, TooltipProps};
pub use models::chart::{ChartOptions, ChartType};
pub use models::series::{QueryData, QueryState, Value};
