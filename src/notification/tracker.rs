use crate::models::{CoinSignal, PumpStatus, Signal};
use std::collections::HashSet;

/// Cross-poll alert de-duplication.
///
/// The scan itself is stateless and rebuilds its full output every poll, so
/// alerting needs a small stateful layer on top: remember which pairs were
/// already alert-worthy last cycle and only surface the new ones. A pair
/// that drops off the list is forgotten and may alert again on re-entry.
#[derive(Debug, Default)]
pub struct AlertTracker {
    active: HashSet<String>,
}

impl AlertTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_alertable(coin: &CoinSignal) -> bool {
        coin.signal == Signal::StrongBuy || coin.pump_status == PumpStatus::PotentialPump
    }

    /// Diff this poll's output against the previous one and return the pairs
    /// that just became alert-worthy.
    pub fn fresh_alerts<'a>(&mut self, coins: &'a [CoinSignal]) -> Vec<&'a CoinSignal> {
        let current: HashSet<String> = coins
            .iter()
            .filter(|c| Self::is_alertable(c))
            .map(|c| c.pair.clone())
            .collect();

        let fresh: Vec<&CoinSignal> = coins
            .iter()
            .filter(|c| Self::is_alertable(c) && !self.active.contains(&c.pair))
            .collect();

        self.active = current;
        fresh
    }
}
