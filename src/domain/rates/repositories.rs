use futures::future::LocalBoxFuture;

use crate::domain::errors::RequestError;

/// Raw reply from the summary provider before status handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Port for issuing GET requests against the summary provider.
///
/// Futures are `!Send`: everything runs on the single browser event loop.
/// A failure of the call itself (no response at all) is reported as a
/// `RequestError`.
pub trait SummaryTransport {
    fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, Result<TransportResponse, RequestError>>;
}

impl<T: SummaryTransport + ?Sized> SummaryTransport for std::rc::Rc<T> {
    fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, Result<TransportResponse, RequestError>> {
        (**self).get(url)
    }
}
