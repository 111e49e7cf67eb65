use crate::models::SwingLevels;

/// Derive entry / take-profit / stop-loss from one quote's 24h range.
///
/// The entry anchors to the low end of the range (`low + range * factor`)
/// rather than to the current price, so a coin that already moved is bought
/// on a pullback instead of chased. Returns `None` on degenerate input
/// (non-positive prices, zero risk, non-convergent take-profit); the caller
/// drops the quote from the scan, it never aborts the whole list.
pub fn compute_swing_levels(
    last: f64,
    high: f64,
    low: f64,
    pos_in_range: f64,
    move_from_low_pct: f64,
) -> Option<SwingLevels> {
    if !last.is_finite() || last <= 0.0 || !high.is_finite() || !low.is_finite() {
        return None;
    }
    if high <= 0.0 || low <= 0.0 {
        return None;
    }

    // Synthetic 3% range when the pair traded flat, to keep the math sane.
    let base_range = if high > low { high - low } else { last * 0.03 };
    if !base_range.is_finite() || base_range <= 0.0 {
        return None;
    }

    // The further the price has already run off the low, the tighter the
    // pullback we are willing to wait for.
    let pullback_factor = if move_from_low_pct >= 18.0 {
        0.16
    } else if move_from_low_pct >= 10.0 {
        0.22
    } else {
        0.30
    };

    let base_entry = low + base_range * pullback_factor;
    // While price is still in the lower third of its range, never place the
    // entry above the current price.
    let should_stay_near = pos_in_range <= 0.35;
    let mut entry = if should_stay_near {
        last.min(base_entry)
    } else {
        base_entry
    };
    if entry < low * 1.01 {
        entry = low * 1.01;
    }
    if entry <= 0.0 {
        entry = last * 0.99;
    }

    // Stop just under the 24h low, or 3% under entry, whichever is tighter.
    let mut stop_loss = (entry * 0.97).min(low * 0.985);
    if stop_loss <= 0.0 {
        stop_loss = entry * 0.95;
    }

    let risk = entry - stop_loss;
    if !risk.is_finite() || risk <= 0.0 {
        return None;
    }

    // Target the mid-upper range, with a 2.6x reward multiple as a floor.
    let tp_from_range = entry + base_range * 0.65;
    let tp_from_risk = entry + risk * 2.6;
    let mut take_profit = tp_from_range.max(tp_from_risk);
    if take_profit <= entry {
        take_profit = entry + (risk * 2.6).max(base_range * 0.5);
    }

    if !take_profit.is_finite() || take_profit <= entry {
        return None;
    }

    let reward_pct = (take_profit - entry) / entry * 100.0;
    let risk_pct = (entry - stop_loss) / entry * 100.0;
    let risk_reward = (take_profit - entry) / risk;

    Some(SwingLevels {
        entry,
        take_profit,
        stop_loss,
        reward_pct,
        risk_pct,
        risk_reward,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        let levels = compute_swing_levels(100.0, 120.0, 90.0, 1.0 / 3.0, 100.0 / 9.0).unwrap();

        assert!(levels.stop_loss < levels.entry);
        assert!(levels.entry < levels.take_profit);
        assert!(levels.risk_reward > 0.0);
        assert!(levels.entry >= 90.0 && levels.entry <= 100.0);
    }

    #[test]
    fn test_entry_capped_at_last_while_cheap() {
        // pos_in_range 0.1: price barely off the low, entry must not sit
        // above the current price.
        let levels = compute_swing_levels(92.0, 110.0, 90.0, 0.1, 2.0).unwrap();
        assert!(levels.entry <= 92.0);
    }

    #[test]
    fn test_pullback_entry_below_extended_price() {
        // pos_in_range 0.8: the entry waits for a pullback near the low.
        let levels = compute_swing_levels(106.0, 110.0, 90.0, 0.8, 17.8).unwrap();
        assert!(levels.entry < 106.0);
    }

    #[test]
    fn test_zero_range_uses_synthetic_fallback() {
        // high == low: a 3% synthetic range keeps the levels well ordered.
        let levels = compute_swing_levels(50.0, 50.0, 50.0, 0.5, 0.0).unwrap();

        assert!(levels.stop_loss < levels.entry);
        assert!(levels.entry < levels.take_profit);
        // Entry floors at low * 1.01.
        assert!((levels.entry - 50.5).abs() < 1e-9);
    }

    #[test]
    fn test_min_reward_multiple() {
        let levels = compute_swing_levels(100.0, 120.0, 90.0, 1.0 / 3.0, 100.0 / 9.0).unwrap();
        let risk = levels.entry - levels.stop_loss;
        assert!(levels.take_profit - levels.entry >= risk * 2.6 - 1e-9);
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        assert!(compute_swing_levels(0.0, 10.0, 5.0, 0.5, 0.0).is_none());
        assert!(compute_swing_levels(-5.0, 10.0, 5.0, 0.5, 0.0).is_none());
        assert!(compute_swing_levels(10.0, f64::NAN, 5.0, 0.5, 0.0).is_none());
        assert!(compute_swing_levels(10.0, 12.0, f64::INFINITY, 0.5, 0.0).is_none());
        assert!(compute_swing_levels(10.0, 12.0, -1.0, 0.5, 0.0).is_none());
    }
}
