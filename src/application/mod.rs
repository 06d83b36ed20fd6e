pub mod dashboard;
pub mod live_rate;

pub use dashboard::*;
pub use live_rate::*;
