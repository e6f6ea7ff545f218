use timeseries_graph::components::{ChartTypeSelector, Graph};
use timeseries_graph::hooks::use_chart_type::use_chart_type;
use timeseries_graph::hooks::use_series_query::use_series_query;
use timeseries_graph::services::api::ApiConfig;
use timeseries_graph::{ChartOptions, ChartType, TooltipProps};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let chart_type = use_chart_type();
    let query = use_series_query(ApiConfig::default());

    // The endpoint lists newest samples first
    let weekly = ChartOptions::default()
        .chart_type(chart_type.chart_type)
        .reverse(true);
    let recent = ChartOptions::default()
        .chart_type(ChartType::Bar)
        .limit(30)
        .reverse(true)
        .show_y_axis(false)
        .start_end_only(true);

    let requests = TooltipProps::new("Requests").value_formatter(|v| format!("{v:.0} req"));
    let latency = TooltipProps::new("Latency").value_formatter(|v| format!("{v:.1} ms"));

    let onclick = {
        let refetch = query.refetch.clone();
        Callback::from(move |_| refetch.emit(()))
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Traffic Overview"}</h1>
                <div class="app-controls">
                    <ChartTypeSelector
                        chart_type={chart_type.chart_type}
                        on_change={chart_type.set_chart_type.clone()}
                    />
                    <button class="refresh-button" {onclick} disabled={query.state.is_loading}>
                        {"Refresh"}
                    </button>
                </div>
            </header>

            <main class="app-main">
                <section class="chart-section">
                    <Graph
                        title="Last 7 days"
                        query={query.state.clone()}
                        options={weekly}
                        tooltip={requests}
                    />
                </section>

                <section class="chart-section">
                    <Graph
                        title="Recent samples"
                        query={query.state.clone()}
                        options={recent}
                        tooltip={latency}
                    />
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
