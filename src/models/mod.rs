pub mod chart;
pub mod error;
pub mod placeholder;
pub mod series;
