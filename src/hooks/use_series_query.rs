use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::series::QueryState;
use crate::services::api::{ApiConfig, fetch_series};

/// Handle returned by `use_series_query` hook
#[derive(Clone, PartialEq)]
pub struct SeriesQueryHandle {
    pub state: QueryState,
    pub refetch: Callback<()>,
}

/// Fetches a series and keeps it fresh.
///
/// Every fetch (initial, poll or manual refetch) flips `is_loading` on while
/// keeping the last result. Failures are logged and leave the last result in
/// place.
#[hook]
pub fn use_series_query(config: ApiConfig) -> SeriesQueryHandle {
    let state = use_state(QueryState::loading);
    let trigger = use_state(|| 0u32); // Polling trigger

    {
        let state = state.clone();
        let trigger = trigger.clone();
        let trigger_value = *trigger;

        use_effect_with((trigger_value, config), move |(_, config)| {
            let config = config.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();
            let previous = state.data.clone();

            if !state.is_loading {
                state.set(QueryState {
                    is_loading: true,
                    data: previous.clone(),
                });
            }

            spawn_local(async move {
                let data = match fetch_series(config).await {
                    Ok(data) => Some(Rc::new(data)),
                    Err(e) => {
                        gloo::console::error!(&format!("Series fetch failed: {e}"));
                        previous
                    }
                };

                if aborted_check.get() {
                    return; // Unmounted or superseded, drop the result
                }
                state.set(QueryState {
                    is_loading: false,
                    data,
                });

                // Schedule next poll if enabled
                if Config::ENABLE_AUTO_REFRESH {
                    TimeoutFuture::new(Config::POLLING_INTERVAL_MS).await;
                    if !aborted_check.get() {
                        trigger.set(*trigger + 1); // Trigger next fetch
                    }
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    let refetch = {
        let trigger = trigger.clone();
        Callback::from(move |()| trigger.set(*trigger + 1))
    };

    SeriesQueryHandle {
        state: (*state).clone(),
        refetch,
    }
}
