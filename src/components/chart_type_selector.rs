use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::chart::ChartType;

#[derive(Properties, PartialEq)]
pub struct ChartTypeSelectorProps {
    pub chart_type: ChartType,
    pub on_change: Callback<ChartType>,
}

/// Chart type dropdown component
#[function_component(ChartTypeSelector)]
pub fn chart_type_selector(props: &ChartTypeSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(chart_type) = target.value().parse::<ChartType>() {
                callback.emit(chart_type);
            }
        })
    };

    html! {
        <select
            class="chart-type-selector"
            onchange={on_change}
            aria-label="Select chart type"
            title="Select chart type"
        >
            {
                ChartType::all().iter().map(|t| {
                    let selected = *t == props.chart_type;
                    html! {
                        <option value={t.code()} {selected}>{t.label()}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
