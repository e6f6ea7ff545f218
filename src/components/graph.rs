use std::sync::atomic::{AtomicUsize, Ordering};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::chart::{ChartFrame, render_chart};
use super::tooltip::{GraphTooltip, TooltipContent, TooltipPayload, TooltipProps};
use crate::hooks::use_placeholder::use_placeholder;
use crate::models::chart::{ChartOptions, GRID, ValueTicks, hover_index, point_offset};
use crate::models::series::{QueryState, select, shows_placeholder};
use crate::utils::debounce::on_resize_settled;

const Y_TICK_TARGET: usize = 4;

static NEXT_CHART_ID: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq)]
pub struct GraphProps {
    pub query: QueryState,
    #[prop_or_default]
    pub options: ChartOptions,
    #[prop_or_default]
    pub tooltip: TooltipProps,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

/// Time-series chart that animates a placeholder until its query resolves.
#[function_component(Graph)]
pub fn graph(props: &GraphProps) -> Html {
    let options = &props.options;
    let container_ref = use_node_ref();
    let chart_id = use_state(|| {
        format!("graph-{}", NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed))
    });
    let hovered = use_state_eq(|| None::<usize>);

    let placeholder = use_placeholder(props.query.is_loading, options.limit);
    let showing_placeholder = shows_placeholder(&props.query, placeholder.is_showing());

    let series = use_memo(
        (
            showing_placeholder,
            placeholder.series.clone(),
            props.query.data.clone(),
            options.limit,
            options.reverse,
        ),
        |(showing_placeholder, placeholder, data, limit, reverse)| {
            select(
                *showing_placeholder,
                placeholder,
                data.as_deref().map(|d| d.result.as_slice()),
                *limit,
                *reverse,
            )
        },
    );

    let ticks = ValueTicks::for_values(series.iter().map(|v| v.value), Y_TICK_TARGET);

    {
        let frame = ChartFrame {
            series: series.clone(),
            options: options.clone(),
            ticks,
            placeholder: showing_placeholder,
        };
        let chart_id = (*chart_id).clone();
        let container_ref = container_ref.clone();

        use_effect_with(
            (frame, chart_id, container_ref),
            |(frame, chart_id, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, chart_id, frame);

                    let frame = frame.clone();
                    let chart_id = chart_id.clone();
                    on_resize_settled(move || render_chart(&container, &chart_id, &frame))
                });

                move || drop(listener)
            },
        );
    }

    let boundary_gap = options.chart_type.boundary_gap();

    let onmousemove = {
        let hovered = hovered.clone();
        let len = series.len();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = e
                .current_target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            let offset_x = f64::from(e.client_x()) - rect.left();
            hovered.set(hover_index(offset_x, rect.width(), len, boundary_gap));
        })
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    // Synthetic points never get a tooltip
    let hovered_point = (*hovered)
        .filter(|_| !showing_placeholder)
        .and_then(|i| series.get(i).map(|v| (i, TooltipPayload::from(v))));
    let tooltip_left = hovered_point
        .as_ref()
        .map_or(0.0, |(i, _)| point_offset(*i, series.len(), boundary_gap));
    let payload: Vec<TooltipPayload> = hovered_point.into_iter().map(|(_, p)| p).collect();
    let tooltip = TooltipContent::from_payload(!payload.is_empty(), &payload, &props.tooltip);

    let body_class = if showing_placeholder {
        "graph-body loading"
    } else {
        "graph-body"
    };

    html! {
        <div class="graph">
            if let Some(title) = &props.title {
                <h3 class="graph-title">{title}</h3>
            }
            <div
                class={body_class}
                ref={container_ref}
                {onmousemove}
                {onmouseleave}
                aria-busy={showing_placeholder.to_string()}
            >
                <div id={(*chart_id).clone()} class="graph-canvas" />
                if options.show_y_axis {
                    <div class="graph-y-axis">
                        {
                            ticks.values().into_iter().map(|tick| {
                                let bottom = GRID.bottom + ticks.fraction(tick) * GRID.plot_height() * 100.0;
                                html! {
                                    <span class="graph-y-tick" style={format!("bottom: {bottom:.2}%;")}>
                                        {props.tooltip.format_value(tick)}
                                    </span>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                }
                <GraphTooltip content={tooltip} left={tooltip_left} />
            </div>
        </div>
    }
}
