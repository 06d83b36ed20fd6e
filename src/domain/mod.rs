pub mod chart;
pub mod clock;
pub mod errors;
pub mod events;
pub mod interaction;
pub mod live_rate;
pub mod logging;
pub mod pagination;
pub mod rates;
pub mod state;
