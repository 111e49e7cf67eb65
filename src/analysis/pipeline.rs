use crate::config::SignalThresholds;
use crate::models::{CoinSignal, PricePhase, PumpStatus, RawTicker, Signal};

use super::{build_reasons, classify_signal, compute_swing_levels, price_phase, pump_status};
use super::SignalInputs;

/// Run the full scan over one ticker snapshot.
///
/// Only IDR-quoted pairs are considered. A quote that is malformed, has
/// degenerate levels, or classifies as `none` is silently skipped; one bad
/// instrument never aborts the list. Output is sorted by signal strength,
/// then phase, then 24h volume, so ordering is fully determined by the
/// snapshot and never by input order.
pub fn build_coin_signals(tickers: &[RawTicker], t: &SignalThresholds) -> Vec<CoinSignal> {
    let mut coins: Vec<CoinSignal> = Vec::new();

    for ticker in tickers {
        if !ticker.is_idr_pair() {
            continue;
        }

        let (last, high, low) = (ticker.last, ticker.high, ticker.low);
        let vol_idr = ticker.vol_idr;

        if !last.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || last <= 0.0
            || high <= 0.0
            || low <= 0.0
        {
            continue;
        }

        let range = if high > low { high - low } else { last * 0.03 };
        let pos_in_range = if high > low {
            (last - low) / (high - low)
        } else {
            0.5
        };
        let move_from_low_pct = (last - low) / low * 100.0;
        let move_from_high_pct = (high - last) / high * 100.0;

        let swing = match compute_swing_levels(last, high, low, pos_in_range, move_from_low_pct) {
            Some(levels) => levels,
            None => continue,
        };

        let phase = price_phase(last, high, low, t);
        let pump = pump_status(last, high, low, vol_idr, t);

        let mut signal = classify_signal(
            &SignalInputs {
                vol_idr,
                pos_in_range,
                move_from_low_pct,
                risk_reward: swing.risk_reward,
                reward_pct: swing.reward_pct,
                phase,
                pump_status: pump,
            },
            t,
        );

        if signal == Signal::None {
            // A hot-but-extended mover still gets surfaced on the watchlist
            // instead of disappearing from the scan.
            let allow_late_watch = pump == PumpStatus::PotentialPump
                && phase == PricePhase::AlreadyRunUp
                && vol_idr >= t.watch_min_vol_idr;
            if allow_late_watch {
                signal = Signal::Watch;
            } else {
                continue;
            }
        }

        let entry = swing.entry.round();
        let take_profit = swing.take_profit.round();
        let stop_loss = swing.stop_loss.round();
        // Whole-IDR rounding can collapse the legs of a micro-priced pair
        // (entry minus stop under half a rupiah). The surfaced levels must
        // stay strictly ordered, so such quotes are skipped like any other
        // degenerate level set.
        if !(stop_loss < entry && entry < take_profit) {
            continue;
        }

        let mut coin = CoinSignal {
            pair: ticker.pair.clone(),
            last,
            high,
            low,
            buy: ticker.buy,
            sell: ticker.sell,
            vol_idr,
            range,
            pos_in_range,
            move_from_low_pct,
            move_from_high_pct,
            entry,
            take_profit,
            stop_loss,
            reward_pct: swing.reward_pct,
            risk_pct: swing.risk_pct,
            risk_reward: swing.risk_reward,
            signal,
            phase,
            pump_status: pump,
            reasons: Vec::new(),
        };
        coin.reasons = build_reasons(&coin);

        coins.push(coin);
    }

    coins.sort_by(|a, b| {
        b.signal
            .rank()
            .cmp(&a.signal.rank())
            .then(b.phase.rank().cmp(&a.phase.rank()))
            .then(b.vol_idr.total_cmp(&a.vol_idr))
    });

    coins
}
