use chrono::{DateTime, Utc};
use yew::prelude::*;

use crate::config::Config;
use crate::models::series::Value;

/// Formats a value for display, `f(value)` or the raw number.
pub type ValueFormatter = Callback<f64, String>;

/// Caller-supplied tooltip settings.
#[derive(Clone, PartialEq)]
pub struct TooltipProps {
    pub value_label: AttrValue,
    /// Also applied to Y-axis tick labels.
    pub value_formatter: Option<ValueFormatter>,
}

impl TooltipProps {
    pub fn new(value_label: impl Into<AttrValue>) -> Self {
        Self {
            value_label: value_label.into(),
            value_formatter: None,
        }
    }

    pub fn value_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(f64) -> String + 'static,
    {
        self.value_formatter = Some(Callback::from(formatter));
        self
    }

    pub fn format_value(&self, value: f64) -> String {
        format_value(value, self.value_formatter.as_ref())
    }
}

impl Default for TooltipProps {
    fn default() -> Self {
        Self::new("Value")
    }
}

pub fn format_value(value: f64, formatter: Option<&ValueFormatter>) -> String {
    formatter.map_or_else(|| value.to_string(), |f| f.emit(value))
}

/// The hovered point as reported by the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPayload {
    pub timestamp: Option<DateTime<Utc>>,
    pub value: f64,
}

impl From<&Value> for TooltipPayload {
    fn from(v: &Value) -> Self {
        Self {
            timestamp: Some(v.timestamp),
            value: v.value,
        }
    }
}

/// Text shown by the tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub date: Option<String>,
    pub label: AttrValue,
    pub value: String,
}

impl TooltipContent {
    /// Formats the first payload entry. Nothing is shown when the tooltip is
    /// inactive or the payload is empty.
    pub fn from_payload(
        active: bool,
        payload: &[TooltipPayload],
        props: &TooltipProps,
    ) -> Option<Self> {
        if !active {
            return None;
        }

        payload.first().map(|point| Self {
            date: point
                .timestamp
                .map(|ts| ts.format(Config::TOOLTIP_DATE_FORMAT).to_string()),
            label: props.value_label.clone(),
            value: props.format_value(point.value),
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct GraphTooltipProps {
    pub content: Option<TooltipContent>,
    /// Horizontal anchor, percent of the graph width
    #[prop_or_default]
    pub left: f64,
}

#[function_component(GraphTooltip)]
pub fn graph_tooltip(props: &GraphTooltipProps) -> Html {
    let Some(content) = &props.content else {
        return html! {};
    };

    html! {
        <div class="graph-tooltip" style={format!("left: {:.2}%;", props.left)}>
            if let Some(date) = &content.date {
                <p class="graph-tooltip-date">{date}</p>
            }
            <p class="graph-tooltip-row">
                <span class="graph-tooltip-label">{&content.label}</span>
                <span class="graph-tooltip-value">{&content.value}</span>
            </p>
        </div>
    }
}
