/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Interval between placeholder regenerations while a query is loading
    pub const PLACEHOLDER_INTERVAL_MS: u32 = 1_500;

    /// Number of points a graph shows when no limit is given
    pub const DEFAULT_LIMIT: usize = 7;

    /// Enable automatic data refresh polling
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Polling interval in milliseconds (5 minutes = 300,000ms)
    pub const POLLING_INTERVAL_MS: u32 = 300_000;

    /// Delay before re-rendering charts after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Attempts made when the series endpoint rate-limits us
    pub const MAX_FETCH_ATTEMPTS: u32 = 3;

    /// X-axis tick label format
    pub const AXIS_DATE_FORMAT: &'static str = "%d %b";

    /// Tooltip date row format
    pub const TOOLTIP_DATE_FORMAT: &'static str = "%Y-%m-%d %H:%M";
}
