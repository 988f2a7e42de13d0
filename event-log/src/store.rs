use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use calendar_date::DateValue;

static NO_EVENT: BTreeSet<String> = BTreeSet::new();

/// Sets of distinct event names, indexed by date.
///
/// Dates are kept sorted, and so are events under a single date. Note that
/// a date whose events were all deleted one by one remains in the store with
/// an empty set, until it is removed with [`EventStore::delete_date`].
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct EventStore {
    events: BTreeMap<DateValue, BTreeSet<String>>,
}

impl EventStore {
    /// Create a new store that doesn't hold any event.
    pub const fn new() -> Self {
        Self { events: BTreeMap::new() }
    }

    /// Add an event under a date, returns `false` if this event was already
    /// registered for this date.
    ///
    /// ```
    /// use event_log::{DateValue, EventStore};
    ///
    /// let date = DateValue::new(2017, 1, 1).unwrap();
    /// let mut store = EventStore::new();
    /// assert!(store.add_event(date, "new year"));
    /// assert!(!store.add_event(date, "new year"));
    /// assert_eq!(store.find(date).len(), 1);
    /// ```
    pub fn add_event(&mut self, date: DateValue, event: impl Into<String>) -> bool {
        let event = event.into();

        #[cfg(feature = "log")]
        log::trace!("add event `{event}` on {date}");

        self.events.entry(date).or_default().insert(event)
    }

    /// Remove a single event from a date, returns `true` if it was found.
    ///
    /// This never creates an entry for `date`.
    ///
    /// ```
    /// use event_log::{DateValue, EventStore};
    ///
    /// let date = DateValue::new(2017, 1, 1).unwrap();
    /// let mut store = EventStore::new();
    /// store.add_event(date, "x");
    /// assert!(store.delete_event(date, "x"));
    /// assert!(!store.delete_event(date, "x"));
    /// ```
    pub fn delete_event(&mut self, date: DateValue, event: &str) -> bool {
        #[cfg(feature = "log")]
        log::trace!("delete event `{event}` on {date}");

        self.events
            .get_mut(&date)
            .is_some_and(|events| events.remove(event))
    }

    /// Remove a date and all of its events, returns the number of events
    /// that were removed.
    ///
    /// ```
    /// use event_log::{DateValue, EventStore};
    ///
    /// let date = DateValue::new(2017, 1, 1).unwrap();
    /// let mut store = EventStore::new();
    /// store.add_event(date, "a");
    /// store.add_event(date, "b");
    /// assert_eq!(store.delete_date(date), 2);
    /// assert_eq!(store.delete_date(date), 0);
    /// assert!(store.find(date).is_empty());
    /// ```
    pub fn delete_date(&mut self, date: DateValue) -> usize {
        #[cfg(feature = "log")]
        log::trace!("delete all events on {date}");

        self.events.remove(&date).map_or(0, |events| events.len())
    }

    /// Get the events registered for a date, sorted by name.
    #[inline]
    pub fn find(&self, date: DateValue) -> &BTreeSet<String> {
        self.events.get(&date).unwrap_or(&NO_EVENT)
    }

    /// Iterate over all pairs of date and event, sorted by date and then by
    /// event name.
    ///
    /// ```
    /// use event_log::{DateValue, EventStore};
    ///
    /// let d1 = DateValue::new(2017, 1, 1).unwrap();
    /// let d2 = DateValue::new(2016, 5, 4).unwrap();
    ///
    /// let mut store = EventStore::new();
    /// store.add_event(d1, "b");
    /// store.add_event(d1, "a");
    /// store.add_event(d2, "c");
    ///
    /// let dump: Vec<_> = store.dump().collect();
    /// assert_eq!(dump, [(d2, "c"), (d1, "a"), (d1, "b")]);
    /// ```
    pub fn dump(&self) -> impl Iterator<Item = (DateValue, &str)> + '_ {
        self.events
            .iter()
            .flat_map(|(date, events)| events.iter().map(|event| (*date, event.as_str())))
    }

    /// Iterate over dates that have an entry in the store, including the ones
    /// left with no event.
    pub fn dates(&self) -> impl Iterator<Item = DateValue> + '_ {
        self.events.keys().copied()
    }

    /// Number of dates that have an entry in the store.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if no date has an entry in the store.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Display for EventStore {
    /// Write one line per event, formatted as `YYYY-MM-DD event`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (date, event) in self.dump() {
            writeln!(f, "{date} {event}")?;
        }

        Ok(())
    }
}
