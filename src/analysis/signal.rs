use crate::config::SignalThresholds;
use crate::models::{PricePhase, PumpStatus, Signal};

/// Per-quote metrics feeding the composite signal decision.
#[derive(Debug, Clone, Copy)]
pub struct SignalInputs {
    pub vol_idr: f64,
    pub pos_in_range: f64,
    pub move_from_low_pct: f64,
    pub risk_reward: f64,
    pub reward_pct: f64,
    pub phase: PricePhase,
    pub pump_status: PumpStatus,
}

/// Compose the final signal tier from one quote's derived metrics.
///
/// All gates of a tier must hold simultaneously. Hard gates first: the
/// risk-reward must be worth taking at all, the pair must be liquid, and a
/// price that has already run up is never chased into a buy tier. The
/// late-watch exception for hot-but-extended movers lives in the pipeline,
/// not here.
pub fn classify_signal(inputs: &SignalInputs, t: &SignalThresholds) -> Signal {
    let SignalInputs {
        vol_idr,
        pos_in_range,
        move_from_low_pct,
        risk_reward,
        reward_pct,
        phase,
        pump_status,
    } = *inputs;

    if !risk_reward.is_finite() || risk_reward <= 1.0 {
        return Signal::None;
    }
    if vol_idr < t.min_vol_idr {
        return Signal::None;
    }
    if phase == PricePhase::AlreadyRunUp {
        return Signal::None;
    }

    let reward_ok = reward_pct >= t.min_reward_pct;
    let near_low = pos_in_range <= t.strong_max_pos;
    let not_too_high = pos_in_range <= t.buy_max_pos;
    let move_healthy =
        move_from_low_pct >= t.healthy_move_min_pct && move_from_low_pct <= t.healthy_move_max_pct;

    if vol_idr >= t.strong_vol_idr
        && risk_reward >= t.strong_min_rr
        && reward_ok
        && near_low
        && move_healthy
    {
        return Signal::StrongBuy;
    }

    if vol_idr >= t.strong_vol_idr * t.buy_vol_factor
        && risk_reward >= t.buy_min_rr
        && reward_ok
        && not_too_high
    {
        return Signal::Buy;
    }

    if vol_idr >= t.watch_min_vol_idr
        && (phase == PricePhase::StartingToRise || pump_status == PumpStatus::PotentialPump)
        && reward_pct >= t.watch_min_reward_pct
        && risk_reward >= t.watch_min_rr
    {
        return Signal::Watch;
    }

    Signal::None
}
