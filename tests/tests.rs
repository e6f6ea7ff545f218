#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use timeseries_graph::components::tooltip::{TooltipContent, TooltipPayload, TooltipProps};
    use timeseries_graph::config::Config;
    use timeseries_graph::models::{
        chart::{ChartOptions, ChartType, axis_labels},
        error::AppError,
        series::{QueryData, QueryState, Value, select, shows_placeholder},
    };
    use timeseries_graph::utils::animation::{LoadingPhase, PlaceholderAnimation, PlaceholderTimer};
    use timeseries_graph::utils::scheduler::Scheduler;

    const TICK: u32 = Config::PLACEHOLDER_INTERVAL_MS;

    // Simulated clock: tasks only run when the test advances time
    struct ManualTask {
        period_ms: u32,
        elapsed_ms: u32,
        cancelled: Rc<Cell<bool>>,
        task: Box<dyn FnMut()>,
    }

    #[derive(Clone, Default)]
    struct ManualScheduler {
        tasks: Rc<RefCell<Vec<ManualTask>>>,
    }

    struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.tasks.borrow_mut().push(ManualTask {
                period_ms,
                elapsed_ms: 0,
                cancelled: cancelled.clone(),
                task,
            });
            ManualHandle { cancelled }
        }
    }

    impl ManualScheduler {
        fn advance(&self, ms: u32) {
            let mut tasks = self.tasks.borrow_mut();
            tasks.retain(|t| !t.cancelled.get());
            for t in tasks.iter_mut() {
                t.elapsed_ms += ms;
                while t.elapsed_ms >= t.period_ms {
                    t.elapsed_ms -= t.period_ms;
                    (t.task)();
                }
            }
        }

        fn active(&self) -> usize {
            self.tasks
                .borrow()
                .iter()
                .filter(|t| !t.cancelled.get())
                .count()
        }
    }

    // Collects every series a timer or animation emits
    fn recorder() -> (Rc<RefCell<Vec<Vec<Value>>>>, impl Fn(Vec<Value>) + 'static) {
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = emitted.clone();
        (emitted, move |series| sink.borrow_mut().push(series))
    }

    fn create_test_series(n: usize) -> Vec<Value> {
        let start = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap();
        (0..n)
            .map(|i| Value::new(start + Duration::days(i as i64), 100.0 + i as f64))
            .collect()
    }

    // ===== Data Selector Tests =====

    #[test]
    fn test_select_length_is_min_of_limit_and_len() {
        for len in 0..10 {
            let real = create_test_series(len);
            for limit in 0..12 {
                for reverse in [false, true] {
                    let selected = select(false, &[], Some(&real), limit, reverse);
                    assert_eq!(selected.len(), limit.min(len), "limit={limit} len={len}");
                }
            }
        }
    }

    #[test]
    fn test_select_takes_leading_window() {
        let real = create_test_series(10);
        let selected = select(false, &[], Some(&real), 3, false);
        assert_eq!(selected, real[..3].to_vec());
    }

    #[test]
    fn test_select_reverse_is_exact_reverse() {
        let real = create_test_series(10);
        let before = real.clone();

        let forward = select(false, &[], Some(&real), 6, false);
        let mut backward = select(false, &[], Some(&real), 6, true);
        backward.reverse();

        assert_eq!(forward, backward);
        assert_eq!(real, before);
    }

    #[test]
    fn test_select_loading_ignores_real_data() {
        let placeholder = timeseries_graph::models::placeholder::generate(0, 7);
        let real = create_test_series(20);

        let selected = select(true, &placeholder, Some(&real), 7, false);
        assert_eq!(selected.len(), 7);
        assert_eq!(selected, placeholder);

        let selected = select(true, &placeholder, None, 7, true);
        assert_eq!(selected, placeholder);
    }

    #[test]
    fn test_select_missing_data_falls_back_to_placeholder() {
        let placeholder = timeseries_graph::models::placeholder::generate(1, 4);
        let selected = select(false, &placeholder, None, 4, false);
        assert_eq!(selected, placeholder);
    }

    // ===== Placeholder Timer Tests =====

    #[test]
    fn test_timer_regenerates_once_per_tick() {
        let scheduler = ManualScheduler::default();
        let (emitted, sink) = recorder();
        let timer = PlaceholderTimer::start(&scheduler, 5, Rc::new(sink));

        scheduler.advance(TICK - 1);
        assert!(emitted.borrow().is_empty());

        scheduler.advance(1);
        scheduler.advance(TICK * 3);
        assert_eq!(emitted.borrow().len(), 4);
        assert_eq!(timer.iteration(), 4);
        assert!(emitted.borrow().iter().all(|series| series.len() == 5));
    }

    #[test]
    fn test_dropped_timer_never_fires() {
        let scheduler = ManualScheduler::default();
        let (emitted, sink) = recorder();
        let timer = PlaceholderTimer::start(&scheduler, 3, Rc::new(sink));

        scheduler.advance(TICK * 2);
        drop(timer);

        scheduler.advance(TICK * 10);
        assert_eq!(emitted.borrow().len(), 2);
        assert_eq!(scheduler.active(), 0);
    }

    // ===== Loading State Machine Tests =====

    #[test]
    fn test_animation_starts_in_loading() {
        let (emitted, sink) = recorder();
        let animation = PlaceholderAnimation::new(ManualScheduler::default(), 7, sink);

        assert_eq!(animation.phase(), LoadingPhase::Loading);
        assert!(!animation.is_running());
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn test_animation_stops_when_loaded() {
        let scheduler = ManualScheduler::default();
        let (emitted, sink) = recorder();
        let mut animation = PlaceholderAnimation::new(scheduler.clone(), 7, sink);

        animation.update(true, 7);
        assert!(animation.is_running());
        assert_eq!(emitted.borrow().len(), 1);

        scheduler.advance(TICK * 2);
        assert_eq!(emitted.borrow().len(), 3);

        animation.update(false, 7);
        assert_eq!(animation.phase(), LoadingPhase::Loaded);
        assert!(!animation.is_running());

        scheduler.advance(TICK * 5);
        assert_eq!(emitted.borrow().len(), 3);
        assert_eq!(scheduler.active(), 0);
    }

    #[test]
    fn test_animation_restarts_at_iteration_zero() {
        let scheduler = ManualScheduler::default();
        let (emitted, sink) = recorder();
        let mut animation = PlaceholderAnimation::new(scheduler.clone(), 4, sink);

        animation.update(true, 4);
        scheduler.advance(TICK * 3);
        assert_eq!(animation.iteration(), Some(3));

        animation.update(false, 4);
        assert_eq!(animation.iteration(), None);

        animation.update(true, 4);
        assert_eq!(animation.phase(), LoadingPhase::Loading);
        assert_eq!(animation.iteration(), Some(0));
        assert_eq!(emitted.borrow().len(), 5);
        assert_eq!(scheduler.active(), 1);
    }

    #[test]
    fn test_animation_repeated_loading_keeps_one_timer() {
        let scheduler = ManualScheduler::default();
        let (emitted, sink) = recorder();
        let mut animation = PlaceholderAnimation::new(scheduler.clone(), 4, sink);

        animation.update(true, 4);
        animation.update(true, 4);
        assert_eq!(scheduler.active(), 1);

        scheduler.advance(TICK);
        assert_eq!(emitted.borrow().len(), 2);
    }

    #[test]
    fn test_animation_resize_while_loading() {
        let scheduler = ManualScheduler::default();
        let (emitted, sink) = recorder();
        let mut animation = PlaceholderAnimation::new(scheduler.clone(), 4, sink);

        animation.update(true, 4);
        animation.update(true, 10);
        assert_eq!(scheduler.active(), 1);

        scheduler.advance(TICK);
        let emitted = emitted.borrow();
        assert_eq!(emitted.last().map(Vec::len), Some(10));
    }

    #[test]
    fn test_animation_teardown_cancels_timer() {
        let scheduler = ManualScheduler::default();
        let (emitted, sink) = recorder();
        let mut animation = PlaceholderAnimation::new(scheduler.clone(), 4, sink);

        animation.update(true, 4);
        animation.stop();
        scheduler.advance(TICK * 4);
        assert_eq!(emitted.borrow().len(), 1);

        // Dropping a running animation releases its timer too
        animation.update(true, 4);
        drop(animation);
        scheduler.advance(TICK * 4);
        assert_eq!(emitted.borrow().len(), 2);
        assert_eq!(scheduler.active(), 0);
    }

    // ===== Tooltip Tests =====

    fn payload(value: f64) -> Vec<TooltipPayload> {
        vec![TooltipPayload {
            timestamp: Some(Utc.with_ymd_and_hms(2025, 10, 4, 9, 30, 0).unwrap()),
            value,
        }]
    }

    #[test]
    fn test_tooltip_inactive_renders_nothing() {
        let props = TooltipProps::default();
        assert!(TooltipContent::from_payload(false, &payload(3.0), &props).is_none());
        assert!(TooltipContent::from_payload(true, &[], &props).is_none());
    }

    #[test]
    fn test_tooltip_applies_formatter() {
        let props = TooltipProps::new("Spend").value_formatter(|v| format!("${v:.2}"));
        let content = TooltipContent::from_payload(true, &payload(12.5), &props).unwrap();

        assert_eq!(content.value, "$12.50");
        assert_eq!(content.label.as_str(), "Spend");
        assert_eq!(content.date.as_deref(), Some("2025-10-04 09:30"));
    }

    #[test]
    fn test_tooltip_raw_value() {
        let props = TooltipProps::new("Requests");

        let content = TooltipContent::from_payload(true, &payload(42.0), &props).unwrap();
        assert_eq!(content.value, "42");

        let content = TooltipContent::from_payload(true, &payload(0.25), &props).unwrap();
        assert_eq!(content.value, "0.25");
    }

    #[test]
    fn test_tooltip_without_timestamp_omits_date() {
        let props = TooltipProps::default();
        let points = [TooltipPayload {
            timestamp: None,
            value: 7.0,
        }];

        let content = TooltipContent::from_payload(true, &points, &props).unwrap();
        assert!(content.date.is_none());
        assert_eq!(content.value, "7");
    }

    // ===== Options & Parsing Tests =====

    #[test]
    fn test_chart_type_error_display() {
        let err = "donut".parse::<ChartType>().unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: Invalid chart type: donut");
    }

    #[test]
    fn test_app_error_display() {
        assert_eq!(AppError::RateLimited.to_string(), "Rate limited");
        assert_eq!(
            AppError::DataError("bad".to_string()).to_string(),
            "Data error: bad"
        );
    }

    #[test]
    fn test_options_builder() {
        let options = ChartOptions::default()
            .chart_type(ChartType::Bar)
            .limit(30)
            .reverse(true)
            .show_x_axis(false)
            .start_end_only(true);

        assert_eq!(options.chart_type, ChartType::Bar);
        assert_eq!(options.limit, 30);
        assert!(options.reverse && options.start_end_only);
        assert!(!options.show_x_axis && options.show_y_axis);
    }

    #[test]
    fn test_start_end_only_labels() {
        let series = create_test_series(5);
        let labels = axis_labels(&series, "%d %b", true);

        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0], "01 Oct");
        assert_eq!(labels[4], "05 Oct");
        assert!(labels[1..4].iter().all(String::is_empty));

        let labels = axis_labels(&series, "%d %b", false);
        assert_eq!(labels[2], "03 Oct");
    }

    #[test]
    fn test_query_data_deserialization() {
        let json = r#"{"result": [
            {"timestamp": "2025-10-04T00:00:00Z", "value": 15.5},
            {"timestamp": "2025-10-04T00:30:00Z", "value": 20.3}
        ]}"#;

        let data: QueryData = serde_json::from_str(json).unwrap();
        assert_eq!(data.result.len(), 2);
        assert_eq!(data.result[0].value, 15.5);
        assert_eq!(
            data.result[1].timestamp,
            Utc.with_ymd_and_hms(2025, 10, 4, 0, 30, 0).unwrap()
        );
    }

    // ===== End-to-End Scenario =====

    #[test]
    fn test_weekly_area_graph_loads_then_resolves() {
        let options = ChartOptions::default().chart_type(ChartType::Area).limit(7);
        let scheduler = ManualScheduler::default();
        let placeholder = Rc::new(RefCell::new(Vec::new()));
        let redraws = Rc::new(Cell::new(0));

        let mut animation = {
            let placeholder = placeholder.clone();
            let redraws = redraws.clone();
            PlaceholderAnimation::new(scheduler.clone(), options.limit, move |series| {
                *placeholder.borrow_mut() = series;
                redraws.set(redraws.get() + 1);
            })
        };

        let displayed = |query: &QueryState, animation: &PlaceholderAnimation<ManualScheduler>| {
            let synthetic = shows_placeholder(query, animation.phase() == LoadingPhase::Loading);
            select(
                synthetic,
                &placeholder.borrow(),
                query.result(),
                options.limit,
                options.reverse,
            )
        };

        // Pending query: seven synthetic points, redrawn every tick
        let query = QueryState::loading();
        animation.update(query.is_loading, options.limit);
        let first = displayed(&query, &animation);
        assert_eq!(first.len(), 7);

        scheduler.advance(TICK);
        assert_eq!(redraws.get(), 2);
        assert_eq!(displayed(&query, &animation).len(), 7);

        scheduler.advance(TICK);
        assert_eq!(redraws.get(), 3);

        // Resolved query: exactly the real points, no more redraws
        let real = create_test_series(7);
        let query = QueryState::loaded(QueryData::new(real.clone()));
        animation.update(query.is_loading, options.limit);

        assert_eq!(displayed(&query, &animation), real);

        scheduler.advance(TICK * 4);
        assert_eq!(redraws.get(), 3);
        assert_eq!(scheduler.active(), 0);
    }

    #[test]
    fn test_failed_first_fetch_keeps_synthetic_frame() {
        let scheduler = ManualScheduler::default();
        let placeholder = Rc::new(RefCell::new(Vec::new()));
        let mut animation = {
            let placeholder = placeholder.clone();
            PlaceholderAnimation::new(scheduler.clone(), 7, move |series| {
                *placeholder.borrow_mut() = series;
            })
        };

        // Before the first effect run the component still counts as animating
        let query = QueryState::loading();
        assert!(shows_placeholder(&query, animation.phase() == LoadingPhase::Loading));

        animation.update(query.is_loading, 7);
        assert!(shows_placeholder(&query, animation.phase() == LoadingPhase::Loading));

        // Fetch failed: adapter stops loading but has nothing to show
        let failed = QueryState {
            is_loading: false,
            data: None,
        };
        animation.update(failed.is_loading, 7);
        assert_eq!(animation.phase(), LoadingPhase::Loaded);
        assert_eq!(scheduler.active(), 0);
        assert!(shows_placeholder(&failed, animation.phase() == LoadingPhase::Loading));

        let frame = select(
            shows_placeholder(&failed, animation.phase() == LoadingPhase::Loading),
            &placeholder.borrow(),
            failed.result(),
            7,
            false,
        );
        assert_eq!(frame, *placeholder.borrow());

        // A later successful refetch replaces the synthetic frame
        let real = create_test_series(7);
        let query = QueryState::loaded(QueryData::new(real.clone()));
        animation.update(query.is_loading, 7);
        assert!(!shows_placeholder(&query, animation.phase() == LoadingPhase::Loading));
    }
}
