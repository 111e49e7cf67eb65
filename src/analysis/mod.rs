mod levels;
mod phase;
mod pipeline;
mod pump;
mod rationale;
mod signal;

pub use levels::compute_swing_levels;
pub use phase::price_phase;
pub use pipeline::build_coin_signals;
pub use pump::pump_status;
pub use rationale::build_reasons;
pub use signal::{classify_signal, SignalInputs};
