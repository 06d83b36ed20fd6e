#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::{DateTime, Local, TimeZone};
use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;

use fx_rate_dashboard::application::DashboardController;
use fx_rate_dashboard::config::DashboardConfig;
use fx_rate_dashboard::domain::clock::Clock;
use fx_rate_dashboard::domain::errors::RequestError;
use fx_rate_dashboard::domain::events::DashboardEvent;
use fx_rate_dashboard::domain::rates::{SummaryTransport, TransportResponse};

pub const THREE_DAYS: &str = r#"{
    "source": "frankfurter",
    "breakdown": "day",
    "cache_status": "miss",
    "totals": {"start_rate": 1.08, "end_rate": 1.0795, "total_pct_change": -0.0463, "mean_rate": 1.0805},
    "days": [
        {"date": "2025-07-01", "rate": 1.0800, "pct_change": null},
        {"date": "2025-07-02", "rate": 1.0820, "pct_change": 0.1852},
        {"date": "2025-07-03", "rate": 1.0795, "pct_change": -0.2311}
    ]
}"#;

pub fn live_body(rate: f64) -> String {
    format!(r#"{{"source":"cache","totals":{{"start_rate":{rate},"end_rate":{rate},"total_pct_change":0.0,"mean_rate":{rate}}},"days":null}}"#)
}

type Reply = Result<TransportResponse, RequestError>;

#[derive(Default)]
struct Script {
    canned: Vec<(String, Reply)>,
    pending: Vec<(String, oneshot::Sender<Reply>)>,
    requests: Vec<String>,
}

/// Transport whose replies are queued or released by the test.
///
/// A request matching a queued reply (by URL fragment) completes at once;
/// anything else stays pending until `resolve` is called.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, fragment: &str, status: u16, body: impl Into<String>) {
        self.script
            .borrow_mut()
            .canned
            .push((fragment.to_string(), Ok(TransportResponse::new(status, body))));
    }

    pub fn fail(&self, fragment: &str, message: &str) {
        self.script.borrow_mut().canned.push((fragment.to_string(), Err(RequestError::new(message))));
    }

    /// Release the oldest pending request whose URL contains `fragment`
    pub fn resolve(&self, fragment: &str, status: u16, body: impl Into<String>) {
        let sender = {
            let mut script = self.script.borrow_mut();
            let pos = script
                .pending
                .iter()
                .position(|(url, _)| url.contains(fragment))
                .expect("no pending request matches");
            script.pending.remove(pos).1
        };
        let _ = sender.send(Ok(TransportResponse::new(status, body)));
    }

    pub fn requests(&self) -> Vec<String> {
        self.script.borrow().requests.clone()
    }

    pub fn pending_count(&self) -> usize {
        self.script.borrow().pending.len()
    }
}

impl SummaryTransport for ScriptedTransport {
    fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, Result<TransportResponse, RequestError>> {
        let mut script = self.script.borrow_mut();
        script.requests.push(url.to_string());

        if let Some(pos) = script.canned.iter().position(|(fragment, _)| url.contains(fragment.as_str())) {
            let (_, reply) = script.canned.remove(pos);
            return async move { reply }.boxed_local();
        }

        let (tx, rx) = oneshot::channel();
        script.pending.push((url.to_string(), tx));
        async move { rx.await.unwrap_or_else(|_| Err(RequestError::new("request dropped"))) }.boxed_local()
    }
}

/// Clock pinned to a settable local time
#[derive(Clone)]
pub struct FixedClock {
    now: Rc<Cell<DateTime<Local>>>,
}

impl FixedClock {
    pub fn at(h: u32, m: u32, s: u32) -> Self {
        Self { now: Rc::new(Cell::new(local(h, m, s))) }
    }

    pub fn set(&self, h: u32, m: u32, s: u32) {
        self.now.set(local(h, m, s));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}

pub fn local(h: u32, m: u32, s: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 7, 3, h, m, s).single().unwrap()
}

pub type TestDashboard = DashboardController<ScriptedTransport, FixedClock>;

/// Same-origin defaults, independent of `FX_API_BASE` at build time
pub fn dashboard(transport: &ScriptedTransport, clock: &FixedClock) -> TestDashboard {
    dashboard_with(DashboardConfig::default().with_api_base(""), transport, clock)
}

pub fn dashboard_with(config: DashboardConfig, transport: &ScriptedTransport, clock: &FixedClock) -> TestDashboard {
    DashboardController::new(config, transport.clone(), clock.clone())
}

/// Records every published event
pub fn record_events(dashboard: &TestDashboard) -> Rc<RefCell<Vec<DashboardEvent>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    dashboard.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    seen
}
