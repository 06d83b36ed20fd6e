use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gloo::net::http::Request;

use crate::domain::{
    errors::{RequestError, RequestResult},
    logging::{LogComponent, get_logger},
    rates::{BreakdownMode, DateRange, SummaryResult, SummaryTransport, TransportResponse},
};
use crate::infrastructure::dto::SummaryResponseDto;

/// Summary provider client.
///
/// Stateless: every call is an independent request/response mapping. All
/// failures, including an undecodable success body, come back as a single
/// [`RequestError`].
#[derive(Clone)]
pub struct SummaryClient<T> {
    base_url: String,
    transport: T,
}

impl<T: SummaryTransport> SummaryClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self { base_url: base_url.into(), transport }
    }

    /// `{base}/summary?start_date=..&end_date=..&breakdown=day|none`
    pub fn summary_url(&self, range: &DateRange, mode: BreakdownMode) -> String {
        format!(
            "{}/summary?start_date={}&end_date={}&breakdown={}",
            self.base_url.trim_end_matches('/'),
            range.start,
            range.end,
            mode.as_query_value()
        )
    }

    pub async fn fetch_summary(&self, range: &DateRange, mode: BreakdownMode) -> RequestResult<SummaryResult> {
        let url = self.summary_url(range, mode);
        get_logger().debug(LogComponent::Infrastructure("SummaryClient"), &format!("GET {}", url));

        let response = self.transport.get(&url).await.inspect_err(|e| {
            crate::log_error!(LogComponent::Infrastructure("SummaryClient"), "Request to {} failed: {}", url, e);
        })?;

        if !response.is_success() {
            let error = RequestError::from_status(response.status, &response.body);
            get_logger().log_with_metadata(
                crate::domain::logging::LogLevel::Error,
                LogComponent::Infrastructure("SummaryClient"),
                &format!("Summary request rejected with status {}", response.status),
                &error.message,
            );
            return Err(error);
        }

        let dto: SummaryResponseDto = serde_json::from_str(&response.body)
            .map_err(|e| RequestError::new(format!("Invalid summary response: {}", e)))?;
        let result = dto.into_domain();

        get_logger().debug(
            LogComponent::Infrastructure("SummaryClient"),
            &format!("Fetched {} days for {} (source: {})", result.days.len(), range, result.source),
        );
        Ok(result)
    }
}

/// Browser `fetch` transport built on gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl GlooTransport {
    pub fn new() -> Self {
        Self
    }
}

impl SummaryTransport for GlooTransport {
    fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, Result<TransportResponse, RequestError>> {
        async move {
            let response = Request::get(url)
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| RequestError::new(format!("Failed to send request: {}", e)))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| RequestError::new(format!("Failed to read response: {}", e)))?;

            Ok(TransportResponse::new(status, body))
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct CannedTransport {
        reply: Result<TransportResponse, RequestError>,
        urls: RefCell<Vec<String>>,
    }

    impl SummaryTransport for CannedTransport {
        fn get<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, Result<TransportResponse, RequestError>> {
            self.urls.borrow_mut().push(url.to_string());
            let reply = self.reply.clone();
            async move { reply }.boxed_local()
        }
    }

    fn client(reply: Result<TransportResponse, RequestError>) -> SummaryClient<CannedTransport> {
        SummaryClient::new("http://fx.local/", CannedTransport { reply, urls: RefCell::new(Vec::new()) })
    }

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 3).unwrap(),
        )
    }

    #[test]
    fn builds_query_string() {
        let client = client(Ok(TransportResponse::new(200, r#"{"source":"network"}"#)));
        block_on(client.fetch_summary(&range(), BreakdownMode::None)).unwrap();
        assert_eq!(
            client.transport.urls.borrow()[0],
            "http://fx.local/summary?start_date=2025-07-01&end_date=2025-07-03&breakdown=none"
        );
    }

    #[test]
    fn non_success_uses_body_as_message() {
        let client = client(Ok(TransportResponse::new(503, "rate limited")));
        let err = block_on(client.fetch_summary(&range(), BreakdownMode::Day)).unwrap_err();
        assert_eq!(err.message, "rate limited");
    }

    #[test]
    fn non_success_without_body_reports_status() {
        let client = client(Ok(TransportResponse::new(502, "")));
        let err = block_on(client.fetch_summary(&range(), BreakdownMode::Day)).unwrap_err();
        assert_eq!(err.message, "Request failed with status 502");
    }

    #[test]
    fn transport_failure_passes_through() {
        let client = client(Err(RequestError::new("Failed to send request: offline")));
        let err = block_on(client.fetch_summary(&range(), BreakdownMode::Day)).unwrap_err();
        assert_eq!(err.message, "Failed to send request: offline");
    }

    #[test]
    fn undecodable_body_is_a_request_error() {
        let client = client(Ok(TransportResponse::new(200, "<html>")));
        let err = block_on(client.fetch_summary(&range(), BreakdownMode::Day)).unwrap_err();
        assert!(err.message.starts_with("Invalid summary response"), "{}", err.message);
    }
}
