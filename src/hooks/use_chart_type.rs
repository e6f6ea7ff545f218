use gloo_storage::Storage;
use yew::prelude::*;

use crate::models::chart::ChartType;

const STORAGE_KEY: &str = "chart-type";

/// Handle returned by `use_chart_type` hook
#[derive(Clone, PartialEq)]
pub struct ChartTypeHandle {
    pub chart_type: ChartType,
    pub set_chart_type: Callback<ChartType>,
}

/// Custom hook for the selected chart type with localStorage persistence
#[hook]
pub fn use_chart_type() -> ChartTypeHandle {
    let chart_type = use_state(|| load_chart_type().unwrap_or_default());

    // Effect: Persist chart type to localStorage on change
    {
        let chart_type_value = *chart_type;
        use_effect_with(chart_type_value, move |chart_type| {
            save_chart_type(*chart_type);
            || ()
        });
    }

    let set_chart_type = {
        let chart_type = chart_type.clone();
        Callback::from(move |next| chart_type.set(next))
    };

    ChartTypeHandle {
        chart_type: *chart_type,
        set_chart_type,
    }
}

/// Load chart type from localStorage
fn load_chart_type() -> Option<ChartType> {
    gloo_storage::LocalStorage::get(STORAGE_KEY).ok()
}

/// Save chart type to localStorage
fn save_chart_type(chart_type: ChartType) {
    if let Err(e) = gloo_storage::LocalStorage::set(STORAGE_KEY, chart_type) {
        gloo::console::warn!(&format!("Failed to save chart type: {e:?}"));
    }
}
