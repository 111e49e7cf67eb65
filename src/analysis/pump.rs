use crate::config::SignalThresholds;
use crate::models::PumpStatus;

/// Detect pump-like momentum: price in the mid-to-upper band of a wide
/// 24h range, a sizeable but not exhausted climb off the low, and heavy
/// IDR volume. Degenerate input classifies as `None`, never an error.
pub fn pump_status(last: f64, high: f64, low: f64, vol_idr: f64, t: &SignalThresholds) -> PumpStatus {
    if !last.is_finite()
        || !high.is_finite()
        || !low.is_finite()
        || last <= 0.0
        || high <= 0.0
        || low <= 0.0
        || high <= low
    {
        return PumpStatus::None;
    }

    let range = high - low;
    let pos_in_range = (last - low) / range;
    let move_from_low_pct = (last - low) / low * 100.0;

    let not_too_high = pos_in_range <= t.pump_pos_max && move_from_low_pct <= t.pump_move_max_pct;

    if not_too_high
        && pos_in_range >= t.pump_pos_min
        && move_from_low_pct >= t.pump_move_min_pct
        && vol_idr >= t.pump_min_vol_idr
        // A near-flat range makes any move look dramatic; demand real width.
        && range / last >= t.pump_min_range_ratio
    {
        return PumpStatus::PotentialPump;
    }

    PumpStatus::None
}
