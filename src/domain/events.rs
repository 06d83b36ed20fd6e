use std::cell::RefCell;
use std::fmt::Debug;

use derive_more::Display;

use crate::domain::rates::SummaryQuery;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
}

/// The two independent request flows of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Flow {
    #[display(fmt = "series")]
    Series,
    #[display(fmt = "live-rate")]
    LiveRate,
}

/// Session state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    DraftRejected { message: String },
    SeriesRequested { query: SummaryQuery, seq: u64 },
    SeriesLoaded { seq: u64, day_count: usize, source: String },
    SeriesFailed { seq: u64, message: String },
    StaleResponseDiscarded { flow: Flow, seq: u64, latest: u64 },
    PageChanged { page_index: usize },
    HoverChanged { index: Option<usize> },
    LiveRateRequested { seq: u64 },
    LiveRateUpdated { rate: Option<f64> },
    LiveRateFailed,
}

impl DomainEvent for DashboardEvent {
    fn event_type(&self) -> &'static str {
        match self {
            DashboardEvent::DraftRejected { .. } => "DraftRejected",
            DashboardEvent::SeriesRequested { .. } => "SeriesRequested",
            DashboardEvent::SeriesLoaded { .. } => "SeriesLoaded",
            DashboardEvent::SeriesFailed { .. } => "SeriesFailed",
            DashboardEvent::StaleResponseDiscarded { .. } => "StaleResponseDiscarded",
            DashboardEvent::PageChanged { .. } => "PageChanged",
            DashboardEvent::HoverChanged { .. } => "HoverChanged",
            DashboardEvent::LiveRateRequested { .. } => "LiveRateRequested",
            DashboardEvent::LiveRateUpdated { .. } => "LiveRateUpdated",
            DashboardEvent::LiveRateFailed => "LiveRateFailed",
        }
    }
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish(&self, event: DashboardEvent);
}

/// Simple in-memory event dispatcher.
///
/// Handlers run synchronously in subscription order. A handler must not
/// subscribe from inside a dispatch.
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    handlers: RefCell<Vec<Box<dyn Fn(&DashboardEvent)>>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, handler: F)
    where
        F: Fn(&DashboardEvent) + 'static,
    {
        self.handlers.borrow_mut().push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish(&self, event: DashboardEvent) {
        for handler in self.handlers.borrow().iter() {
            handler(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn handlers_receive_events_in_order() {
        let dispatcher = InMemoryEventDispatcher::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        dispatcher.subscribe(move |e| sink.borrow_mut().push(e.event_type()));

        dispatcher.publish(DashboardEvent::PageChanged { page_index: 2 });
        dispatcher.publish(DashboardEvent::LiveRateFailed);

        assert_eq!(*seen.borrow(), vec!["PageChanged", "LiveRateFailed"]);
    }
}
