use crate::app::global_state::GlobalState;
use leptos::*;
use leptos_use::{use_event_listener, use_window};
use tracing::{debug, trace};

/// Keeps `GlobalState::compact_nav` in sync with the window scroll offset for
/// the lifetime of the calling component.
pub fn use_scroll_monitor() {
    let global_state = expect_context::<GlobalState>();

    // removed by leptos-use when the owning scope is disposed
    let _ = use_event_listener(use_window(), ev::scroll, move |_: web_sys::Event| {
        let offset = window().scroll_y().unwrap_or_default();
        let notified = global_state.emit_scroll(offset);
        trace!("scroll y={} notified={}", offset, notified);
    });

    let subscription = global_state.attach_scroll_monitor();
    debug!("scroll monitor attached: {}", subscription.id());

    on_cleanup(move || {
        debug!("scroll monitor detached: {}", subscription.id());
        drop(subscription);
    });
}
