use greenhaven_state::content::SiteContent;
use greenhaven_state::menu::MenuToggle;
use greenhaven_state::scroll::{ScrollEvents, ScrollMonitor, ScrollSubscription};
use leptos::{
    create_rw_signal, RwSignal, SignalGetUntracked, SignalSet, SignalUpdate, SignalWith,
    SignalWithUntracked, StoredValue,
};
use tracing::trace;

#[derive(Copy, Clone, Debug)]
pub struct GlobalState {
    pub content: StoredValue<SiteContent>,
    pub compact_nav: RwSignal<bool>,
    pub menu: RwSignal<MenuToggle>,
    pub scroll_events: StoredValue<ScrollEvents>,
}

impl GlobalState {
    pub fn new(content: SiteContent) -> Self {
        Self {
            content: StoredValue::new(content),
            compact_nav: create_rw_signal(false),
            menu: create_rw_signal(MenuToggle::new()),
            scroll_events: StoredValue::new(ScrollEvents::new()),
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu.with(|menu| menu.is_open())
    }

    pub fn toggle_menu(&self) {
        self.menu.update(|menu| {
            menu.toggle();
        });
    }

    pub fn close_menu(&self) {
        if self.menu.with_untracked(|menu| menu.is_open()) {
            self.menu.update(|menu| {
                menu.close();
            });
        }
    }

    /// Subscribes a scroll monitor that keeps `compact_nav` in sync until the
    /// returned subscription is dropped.
    pub fn attach_scroll_monitor(&self) -> ScrollSubscription {
        let compact_nav = self.compact_nav;
        let monitor = ScrollMonitor::default().with_compact(compact_nav.get_untracked());
        self.scroll_events.with_value(|events| {
            monitor.attach(events, move |compact| {
                trace!("nav compact: {}", compact);
                compact_nav.set(compact);
            })
        })
    }

    pub fn emit_scroll(&self, offset: f64) -> usize {
        self.scroll_events.with_value(|events| events.emit(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::GlobalState;
    use greenhaven_state::content::SiteContent;
    use leptos::{create_runtime, SignalGetUntracked};

    #[test]
    fn menu_flag() {
        let runtime = create_runtime();
        let state = GlobalState::new(SiteContent::embedded().unwrap());

        assert!(!state.menu.get_untracked().is_open());
        state.toggle_menu();
        assert!(state.menu.get_untracked().is_open());
        state.toggle_menu();
        assert!(!state.menu.get_untracked().is_open());

        state.close_menu();
        assert!(!state.menu.get_untracked().is_open());
        state.toggle_menu();
        state.close_menu();
        assert!(!state.menu.get_untracked().is_open());

        runtime.dispose();
    }

    #[test]
    fn scroll_drives_compact_nav_until_detached() {
        let runtime = create_runtime();
        let state = GlobalState::new(SiteContent::embedded().unwrap());

        let subscription = state.attach_scroll_monitor();
        assert!(!state.compact_nav.get_untracked());

        assert_eq!(state.emit_scroll(21.0), 1);
        assert!(state.compact_nav.get_untracked());
        state.emit_scroll(20.0);
        assert!(!state.compact_nav.get_untracked());
        state.emit_scroll(90.0);
        assert!(state.compact_nav.get_untracked());

        drop(subscription);
        assert_eq!(state.emit_scroll(0.0), 0);
        assert!(state.compact_nav.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn reattached_monitor_starts_from_current_flag() {
        let runtime = create_runtime();
        let state = GlobalState::new(SiteContent::embedded().unwrap());

        let first = state.attach_scroll_monitor();
        state.emit_scroll(200.0);
        drop(first);

        let _second = state.attach_scroll_monitor();
        state.emit_scroll(0.0);
        assert!(!state.compact_nav.get_untracked());

        runtime.dispose();
    }
}
