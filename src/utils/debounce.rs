use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::window;

use crate::config::Config;

/// Listens for window resizes and runs `callback` once resizing has been
/// quiet for [`Config::RESIZE_DEBOUNCE_MS`].
///
/// Returns `None` outside a browser window. The listener and any pending
/// timeout are released when the returned value is dropped.
///
/// # Example
///
/// ```rust,ignore
/// use_effect_with(container_ref.clone(), move |container_ref| {
///     let listener = on_resize_settled(move || redraw());
///     move || drop(listener)
/// });
/// ```
pub fn on_resize_settled<F>(callback: F) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        // Replacing the timeout drops, and so clears, the previous one
        let cb = callback.clone();
        *pending.borrow_mut() = Some(Timeout::new(Config::RESIZE_DEBOUNCE_MS, move || cb()));
    }))
}
