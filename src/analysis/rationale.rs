use crate::models::{CoinSignal, PricePhase, PumpStatus, Signal};

/// Render the already-computed metrics of one scan result into explanation
/// sentences. Purely descriptive: every number shown here is the same value
/// the classifiers used, never recomputed.
pub fn build_reasons(coin: &CoinSignal) -> Vec<String> {
    let mut reasons = Vec::new();

    let rr_text = format!("{:.2}", coin.risk_reward);
    let reward_text = format!("{:.1}", coin.reward_pct);
    let risk_text = format!("{:.1}", coin.risk_pct);

    match coin.signal {
        Signal::StrongBuy => reasons.push(format!(
            "STRONG BUY swing signal: take-profit potential around {reward_text}% \
             against roughly {risk_text}% risk (R:R \u{2248} {rr_text})."
        )),
        Signal::Buy => reasons.push(format!(
            "BUY swing signal: take-profit potential around {reward_text}% \
             against roughly {risk_text}% risk (R:R \u{2248} {rr_text})."
        )),
        Signal::Watch => reasons.push(format!(
            "Watchlist candidate (get ready to BUY): take-profit potential around \
             {reward_text}% against roughly {risk_text}% risk (R:R \u{2248} {rr_text})."
        )),
        Signal::None => {}
    }

    let pos_pct = format!("{:.1}", coin.pos_in_range * 100.0);
    let move_low_pct = format!("{:.1}", coin.move_from_low_pct);
    let range_pct = if coin.last > 0.0 {
        format!("{:.1}", coin.range / coin.last * 100.0)
    } else {
        "0".to_string()
    };

    match coin.phase {
        PricePhase::StartingToRise => reasons.push(format!(
            "Price sits in the lower-to-middle part of its 24h range (~{pos_pct}% \
             from low to high) and has climbed about {move_low_pct}% off the low, \
             suggesting the move is just getting started."
        )),
        PricePhase::AlreadyRunUp => reasons.push(format!(
            "Price is already near its 24h high (~{pos_pct}% from low to high) \
             after climbing about {move_low_pct}% off the low; do not chase. A safer \
             entry waits for a pullback toward the base."
        )),
        PricePhase::Normal => reasons.push(format!(
            "Price currently sits mid-range over 24h (~{pos_pct}% from low to \
             high), a broadly neutral position."
        )),
    }

    if coin.pump_status == PumpStatus::PotentialPump {
        let vol_m = format!("{:.1}", coin.vol_idr / 1_000_000.0);
        reasons.push(format!(
            "24h volume is heavy (~{vol_m} M IDR) and the climb off the 24h low is \
             sizeable (~{move_low_pct}%), indicating pump potential / strong momentum."
        ));
    }

    reasons.push(format!(
        "The daily high-low range is about {range_pct}% of the current price, \
         wide enough for a multi-day swing target (not scalping)."
    ));

    reasons.push(format!(
        "Suggested trade levels: entry near {} IDR, take-profit at {} IDR, \
         stop-loss at {} IDR.",
        format_idr(coin.entry),
        format_idr(coin.take_profit),
        format_idr(coin.stop_loss),
    ));

    reasons
}

/// Format a price as whole IDR with id-ID thousands grouping (dots).
pub fn format_idr(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let mut digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    while digits.len() > 3 {
        let rest = digits.split_off(digits.len() - 3);
        grouped.insert_str(0, &rest);
        grouped.insert(0, '.');
    }
    grouped.insert_str(0, &digits);

    if negative {
        grouped.insert(0, '-');
    }
    grouped
}
