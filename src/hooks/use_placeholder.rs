use std::rc::Rc;
use yew::prelude::*;

use crate::models::series::Value;
use crate::utils::animation::{LoadingPhase, PlaceholderAnimation};
use crate::utils::scheduler::IntervalScheduler;

/// Synthetic series plus the phase it belongs to.
#[derive(Clone, PartialEq, Debug)]
pub struct Placeholder {
    pub series: Rc<Vec<Value>>,
    pub phase: LoadingPhase,
}

impl Placeholder {
    /// Returns true while synthetic data should be displayed
    pub fn is_showing(&self) -> bool {
        self.phase == LoadingPhase::Loading
    }
}

/// Drives the loading animation of a single graph.
///
/// The first render always reports `Loading`; the phase follows
/// `is_loading` from the first effect run onwards.
#[hook]
pub fn use_placeholder(is_loading: bool, limit: usize) -> Placeholder {
    // The first effect run emits the iteration-zero frame
    let series = use_state(|| Rc::new(Vec::new()));
    let phase = use_state_eq(|| LoadingPhase::Loading);

    let animation = {
        let setter = series.setter();
        use_mut_ref(move || {
            PlaceholderAnimation::new(IntervalScheduler, limit, move |next| {
                setter.set(Rc::new(next));
            })
        })
    };

    {
        let animation = animation.clone();
        let phase = phase.clone();

        use_effect_with((is_loading, limit), move |&(is_loading, limit)| {
            let mut animation = animation.borrow_mut();
            animation.update(is_loading, limit);
            phase.set(animation.phase());
            || ()
        });
    }

    // Unmount: make sure no tick outlives the component
    use_effect_with((), move |_| move || animation.borrow_mut().stop());

    Placeholder {
        series: (*series).clone(),
        phase: *phase,
    }
}
