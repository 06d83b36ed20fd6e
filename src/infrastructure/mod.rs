pub mod dto;
pub mod http;
pub mod services;

pub use http::{GlooTransport, SummaryClient};
pub use services::{ConsoleLogger, SystemClock};
