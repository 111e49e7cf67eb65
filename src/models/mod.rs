mod signal;
mod ticker;

pub use signal::{CoinSignal, PricePhase, PumpStatus, Signal, SwingLevels};
pub use ticker::RawTicker;
