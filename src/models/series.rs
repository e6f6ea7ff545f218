use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// A single sample of a time series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Value {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Value {
    pub const fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Payload delivered by a query once it resolves.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryData {
    #[serde(default)]
    pub result: Vec<Value>,
}

impl QueryData {
    pub const fn new(result: Vec<Value>) -> Self {
        Self { result }
    }
}

/// What the graph observes from whoever owns the query.
///
/// `data` may still hold the previous result while a refetch is in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState {
    pub is_loading: bool,
    pub data: Option<Rc<QueryData>>,
}

impl QueryState {
    /// A query that has not resolved yet.
    pub const fn loading() -> Self {
        Self {
            is_loading: true,
            data: None,
        }
    }

    /// A resolved query.
    pub fn loaded(data: QueryData) -> Self {
        Self {
            is_loading: false,
            data: Some(Rc::new(data)),
        }
    }

    /// The resolved samples, if any.
    pub fn result(&self) -> Option<&[Value]> {
        self.data.as_deref().map(|data| data.result.as_slice())
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::loading()
    }
}

/// Whether the graph is drawing synthetic data this frame.
///
/// True while the placeholder animation is still in its loading phase (the
/// first render included), while the query is loading, and whenever there is
/// no real result to show, such as after a failed first fetch.
pub fn shows_placeholder(query: &QueryState, animating: bool) -> bool {
    animating || query.is_loading || query.data.is_none()
}

/// Picks the series to display.
///
/// While loading, or when no real data exists, the placeholder is returned
/// as-is (it is generated at `limit` already). Otherwise the first `limit`
/// real samples are copied out and optionally reversed; `real` is never
/// touched.
pub fn select(
    is_loading: bool,
    placeholder: &[Value],
    real: Option<&[Value]>,
    limit: usize,
    reverse: bool,
) -> Vec<Value> {
    match real {
        Some(real) if !is_loading => {
            let mut window = real[..limit.min(real.len())].to_vec();
            if reverse {
                window.reverse();
            }
            window
        }
        _ => placeholder.to_vec(),
    }
}
