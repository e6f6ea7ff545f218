pub mod use_chart_type;
pub mod use_placeholder;
pub mod use_series_query;
