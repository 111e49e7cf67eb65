use crate::config::SignalThresholds;
use crate::models::PricePhase;

/// Classify where the price sits in its 24h swing. Band cutoffs come from
/// `SignalThresholds` and are inclusive; boundary values land inside the
/// band.
///
/// Never fails: any degenerate input (non-finite, non-positive, or a
/// collapsed range) classifies as `Normal`.
pub fn price_phase(last: f64, high: f64, low: f64, t: &SignalThresholds) -> PricePhase {
    if !last.is_finite()
        || !high.is_finite()
        || !low.is_finite()
        || last <= 0.0
        || high <= 0.0
        || low <= 0.0
        || high <= low
    {
        return PricePhase::Normal;
    }

    let range = high - low;
    let pos_in_range = (last - low) / range;
    let move_from_low_pct = (last - low) / low * 100.0;

    if pos_in_range >= t.run_up_min_pos && move_from_low_pct >= t.run_up_min_move_pct {
        return PricePhase::AlreadyRunUp;
    }

    if pos_in_range >= t.rise_min_pos
        && pos_in_range <= t.rise_max_pos
        && move_from_low_pct >= t.rise_min_move_pct
        && move_from_low_pct <= t.rise_max_move_pct
    {
        return PricePhase::StartingToRise;
    }

    PricePhase::Normal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> SignalThresholds {
        SignalThresholds::default()
    }

    #[test]
    fn test_starting_to_rise() {
        // pos = 10/30 = 0.333, move = 11.1%
        assert_eq!(
            price_phase(100.0, 120.0, 90.0, &thresholds()),
            PricePhase::StartingToRise
        );
    }

    #[test]
    fn test_already_run_up() {
        // pos = 0.96, move = 92%
        assert_eq!(
            price_phase(96.0, 100.0, 50.0, &thresholds()),
            PricePhase::AlreadyRunUp
        );
    }

    #[test]
    fn test_run_up_boundary_is_inclusive() {
        // pos exactly 0.85 (165 of the 80..180 range), move = 106.25%
        assert_eq!(
            price_phase(165.0, 180.0, 80.0, &thresholds()),
            PricePhase::AlreadyRunUp
        );
    }

    #[test]
    fn test_move_boundary_exactly_twenty() {
        // pos = 0.976, move = exactly 20% -> run-up (inclusive)
        assert_eq!(
            price_phase(120.0, 120.5, 100.0, &thresholds()),
            PricePhase::AlreadyRunUp
        );
        // pos = 0.5, move = exactly 20% -> still inside the rise band
        assert_eq!(
            price_phase(120.0, 140.0, 100.0, &thresholds()),
            PricePhase::StartingToRise
        );
    }

    #[test]
    fn test_rise_band_lower_bounds() {
        // pos exactly 0.25, move = 5% -> starting_to_rise
        assert_eq!(
            price_phase(105.0, 120.0, 100.0, &thresholds()),
            PricePhase::StartingToRise
        );
        // move exactly 3% with pos mid-band -> starting_to_rise (inclusive)
        assert_eq!(
            price_phase(103.0, 106.0, 100.0, &thresholds()),
            PricePhase::StartingToRise
        );
        // move below 3% -> normal even with pos in band
        assert_eq!(
            price_phase(101.0, 104.0, 100.0, &thresholds()),
            PricePhase::Normal
        );
    }

    #[test]
    fn test_bands_follow_configuration() {
        // pos = 0.7, move = 14%: normal with the default bands...
        let mut t = thresholds();
        assert_eq!(price_phase(114.0, 120.0, 100.0, &t), PricePhase::Normal);

        // ...already a run-up once the band is widened...
        t.run_up_min_pos = 0.65;
        t.run_up_min_move_pct = 10.0;
        assert_eq!(price_phase(114.0, 120.0, 100.0, &t), PricePhase::AlreadyRunUp);

        // ...and a starting rise when the rise band is stretched instead.
        let mut t = thresholds();
        t.rise_max_pos = 0.75;
        assert_eq!(
            price_phase(114.0, 120.0, 100.0, &t),
            PricePhase::StartingToRise
        );
    }

    #[test]
    fn test_degenerate_inputs_are_normal() {
        let t = thresholds();
        assert_eq!(price_phase(100.0, 100.0, 100.0, &t), PricePhase::Normal);
        assert_eq!(price_phase(100.0, 90.0, 95.0, &t), PricePhase::Normal);
        assert_eq!(price_phase(f64::NAN, 120.0, 90.0, &t), PricePhase::Normal);
        assert_eq!(price_phase(-1.0, 120.0, 90.0, &t), PricePhase::Normal);
    }
}
