use derive_more::Display;

/// Failure of a summary request: transport error, non-success status or an
/// undecodable body. The message is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}", message)]
pub struct RequestError {
    pub message: String,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Error for a non-success response. A non-empty body is taken verbatim.
    pub fn from_status(status: u16, body: &str) -> Self {
        if body.is_empty() {
            Self::new(format!("Request failed with status {}", status))
        } else {
            Self::new(body)
        }
    }
}

impl std::error::Error for RequestError {}

/// Rejected query input; no request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ValidationError {
    #[display(fmt = "{} is required.", _0)]
    MissingField(&'static str),
    #[display(fmt = "{} must be a date in YYYY-MM-DD format.", _0)]
    InvalidDate(&'static str),
}

impl std::error::Error for ValidationError {}

/// Live-rate failure as shown to the user. The underlying request error is
/// logged, never carried.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}", display_message)]
pub struct LiveRateError {
    pub display_message: String,
}

impl std::error::Error for LiveRateError {}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AppError {
    #[display(fmt = "Request Error: {}", _0)]
    Request(RequestError),
    #[display(fmt = "Validation Error: {}", _0)]
    Validation(ValidationError),
}

impl std::error::Error for AppError {}

impl From<RequestError> for AppError {
    fn from(error: RequestError) -> Self {
        AppError::Request(error)
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Validation(error)
    }
}

impl AppError {
    /// Text for the main error slot
    pub fn user_message(&self) -> String {
        match self {
            AppError::Request(e) => e.message.clone(),
            AppError::Validation(e) => e.to_string(),
        }
    }
}

pub type RequestResult<T> = Result<T, RequestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_body() {
        assert_eq!(RequestError::from_status(503, "rate limited").message, "rate limited");
    }

    #[test]
    fn status_error_synthesizes_message_for_empty_body() {
        assert_eq!(
            RequestError::from_status(500, "").message,
            "Request failed with status 500"
        );
    }

    #[test]
    fn validation_message_names_field() {
        let err = AppError::from(ValidationError::MissingField("Start date"));
        assert_eq!(err.user_message(), "Start date is required.");
    }
}
