use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

/// Vertical offset in pixels past which the navigation bar turns compact.
pub const COMPACT_NAV_THRESHOLD: f64 = 20.0;

type ScrollListener = Rc<RefCell<dyn FnMut(f64)>>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: IndexMap<u64, ScrollListener>,
}

/// Fans one source of scroll offsets out to scoped listeners.
///
/// Clones share the same registry. Listeners are called in subscription order
/// and stay registered for as long as their [`ScrollSubscription`] lives.
#[derive(Clone, Default)]
pub struct ScrollEvents {
    listeners: Rc<RefCell<Listeners>>,
}

impl std::fmt::Debug for ScrollEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollEvents")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ScrollEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl FnMut(f64) + 'static) -> ScrollSubscription {
        let listener: ScrollListener = Rc::new(RefCell::new(listener));
        let id = {
            let listeners = &mut *self.listeners.borrow_mut();
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.insert(id, listener);
            id
        };
        debug!("scroll listener {} subscribed", id);

        ScrollSubscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Delivers `offset` to every live listener and returns how many were called.
    pub fn emit(&self, offset: f64) -> usize {
        let snapshot: Vec<(u64, ScrollListener)> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(id, listener)| (*id, listener.clone()))
            .collect();

        let mut notified = 0;
        for (id, listener) in snapshot {
            // an earlier listener may have dropped this one
            if !self.listeners.borrow().entries.contains_key(&id) {
                continue;
            }
            let Ok(mut listener) = listener.try_borrow_mut() else {
                trace!("scroll listener {} is already running, skipping", id);
                continue;
            };
            (&mut *listener)(offset);
            notified += 1;
        }

        notified
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }
}

/// Keeps a scroll listener registered. Dropping it detaches the listener.
#[must_use = "dropping the subscription detaches the listener immediately"]
pub struct ScrollSubscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl ScrollSubscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_attached(&self) -> bool {
        self.listeners
            .upgrade()
            .map(|listeners| listeners.borrow().entries.contains_key(&self.id))
            .unwrap_or(false)
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        let removed = listeners.borrow_mut().entries.shift_remove(&self.id);
        if removed.is_some() {
            debug!("scroll listener {} detached", self.id);
        }
        // the listener itself may own subscriptions, drop it outside the borrow
        drop(removed);
    }
}

/// Derives the compact navigation flag from the scroll offset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollMonitor {
    threshold: f64,
    compact: bool,
}

impl Default for ScrollMonitor {
    fn default() -> Self {
        Self::new(COMPACT_NAV_THRESHOLD)
    }
}

impl ScrollMonitor {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            compact: false,
        }
    }

    /// Seeds the last known flag, for monitors attached after the page has scrolled.
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Recomputes the flag for `offset`. Returns the new value only when it changed.
    pub fn on_scroll(&mut self, offset: f64) -> Option<bool> {
        let compact = offset > self.threshold;
        if compact == self.compact {
            return None;
        }
        trace!(
            "compact nav {} -> {} at offset {}",
            self.compact,
            compact,
            offset
        );
        self.compact = compact;
        Some(compact)
    }

    /// Moves the monitor into a listener on `events`; `on_change` runs on every flip.
    pub fn attach(
        mut self,
        events: &ScrollEvents,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> ScrollSubscription {
        events.subscribe(move |offset| {
            if let Some(compact) = self.on_scroll(offset) {
                on_change(compact);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrollEvents, ScrollMonitor, COMPACT_NAV_THRESHOLD};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::str::FromStr;

    #[test]
    fn compact_iff_past_threshold() {
        init_logger();

        for offset in [0.0, 1.0, 19.0, 19.999, 20.0] {
            let mut monitor = ScrollMonitor::default();
            monitor.on_scroll(offset);
            assert!(!monitor.is_compact(), "offset {} should not be compact", offset);
        }
        for offset in [20.001, 21.0, 500.0, 1e9] {
            let mut monitor = ScrollMonitor::default();
            monitor.on_scroll(offset);
            assert!(monitor.is_compact(), "offset {} should be compact", offset);
        }
        assert_eq!(ScrollMonitor::default().threshold(), COMPACT_NAV_THRESHOLD);
    }

    #[test]
    fn crossing_the_threshold_flips_once() {
        init_logger();

        let mut monitor = ScrollMonitor::default();
        assert_eq!(monitor.on_scroll(5.0), None);
        assert_eq!(monitor.on_scroll(25.0), Some(true));
        assert_eq!(monitor.on_scroll(25.0), None);
        assert_eq!(monitor.on_scroll(300.0), None);
        assert_eq!(monitor.on_scroll(20.0), Some(false));
        assert_eq!(monitor.on_scroll(0.0), None);
    }

    #[test]
    fn seeded_monitor_reports_the_way_back() {
        let mut monitor = ScrollMonitor::default().with_compact(true);
        assert!(monitor.is_compact());
        assert_eq!(monitor.on_scroll(400.0), None);
        assert_eq!(monitor.on_scroll(0.0), Some(false));
    }

    #[test]
    fn attached_monitor_reports_changes_only() {
        init_logger();

        let events = ScrollEvents::new();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let _subscription = ScrollMonitor::default().attach(&events, {
            let changes = changes.clone();
            move |compact| changes.borrow_mut().push(compact)
        });

        for offset in [0.0, 10.0, 30.0, 30.0, 30.0, 45.0, 15.0, 15.0, 21.0] {
            events.emit(offset);
        }

        assert_eq!(*changes.borrow(), vec![true, false, true]);
    }

    #[test]
    fn dropped_subscription_stops_updates() {
        init_logger();

        let events = ScrollEvents::new();
        let compact = Rc::new(Cell::new(false));
        let subscription = ScrollMonitor::default().attach(&events, {
            let compact = compact.clone();
            move |value| compact.set(value)
        });
        assert!(subscription.is_attached());
        assert_eq!(events.listener_count(), 1);

        assert_eq!(events.emit(50.0), 1);
        assert!(compact.get());

        drop(subscription);
        assert_eq!(events.listener_count(), 0);
        assert_eq!(events.emit(0.0), 0);
        assert!(compact.get());
    }

    #[test]
    fn listeners_run_in_subscription_order() {
        let events = ScrollEvents::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let subscriptions: Vec<_> = (0..3)
            .map(|i| {
                let order = order.clone();
                events.subscribe(move |_| order.borrow_mut().push(i))
            })
            .collect();

        assert_eq!(events.emit(1.0), 3);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        assert_eq!(subscriptions[2].id(), 2);
    }

    #[test]
    fn listener_can_detach_another_during_emit() {
        init_logger();

        let events = ScrollEvents::new();
        let hits = Rc::new(Cell::new(0));
        let victim = Rc::new(RefCell::new(None));

        let _first = events.subscribe({
            let victim = victim.clone();
            move |_| {
                victim.borrow_mut().take();
            }
        });
        *victim.borrow_mut() = Some(events.subscribe({
            let hits = hits.clone();
            move |_| hits.set(hits.get() + 1)
        }));

        assert_eq!(events.listener_count(), 2);
        assert_eq!(events.emit(10.0), 1);
        assert_eq!(hits.get(), 0);
        assert_eq!(events.listener_count(), 1);
    }

    #[test]
    fn subscription_outliving_the_hub() {
        let events = ScrollEvents::new();
        let subscription = events.subscribe(|_| {});
        drop(events);
        assert!(!subscription.is_attached());
        drop(subscription);
    }

    #[test]
    fn clones_share_listeners() {
        let events = ScrollEvents::new();
        let clone = events.clone();
        let hits = Rc::new(Cell::new(0));
        let _subscription = clone.subscribe({
            let hits = hits.clone();
            move |_| hits.set(hits.get() + 1)
        });
        events.emit(3.0);
        clone.emit(4.0);
        assert_eq!(hits.get(), 2);
    }

    fn init_logger() {
        let _ = tracing_subscriber::fmt()
            .event_format(
                tracing_subscriber::fmt::format()
                    .with_file(true)
                    .with_line_number(true),
            )
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or(
                    tracing_subscriber::EnvFilter::from_str("greenhaven_state=trace").unwrap(),
                ),
            )
            .try_init();
    }
}
