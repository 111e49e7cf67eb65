mod indodax;
mod rate_limiter;

pub use indodax::{parse_tickers_response, IndodaxClient};
pub use rate_limiter::RateLimiter;
