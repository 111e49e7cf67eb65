use serde::{Deserialize, Serialize};

/// Composite trade signal for one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    StrongBuy,
    Buy,
    Watch,
    None,
}

impl Signal {
    /// Sort rank, higher is stronger. `None` never appears in pipeline output.
    pub fn rank(self) -> i8 {
        match self {
            Signal::StrongBuy => 2,
            Signal::Buy => 1,
            Signal::Watch => 0,
            Signal::None => -1,
        }
    }
}

/// Where the price sits in its 24h swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePhase {
    StartingToRise,
    AlreadyRunUp,
    Normal,
}

impl PricePhase {
    /// Sort rank: an early riser beats neutral beats an extended move.
    pub fn rank(self) -> i8 {
        match self {
            PricePhase::StartingToRise => 2,
            PricePhase::Normal => 1,
            PricePhase::AlreadyRunUp => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PumpStatus {
    PotentialPump,
    None,
}

/// Suggested trade levels derived from the 24h range.
///
/// Invariant on construction: `stop_loss < entry < take_profit` and
/// `risk_reward` finite and positive.
#[derive(Debug, Clone)]
pub struct SwingLevels {
    pub entry: f64,
    pub take_profit: f64,
    pub stop_loss: f64,
    pub reward_pct: f64,
    pub risk_pct: f64,
    pub risk_reward: f64,
}

/// Full scan result for one pair: the normalized quote plus every derived
/// metric, the classification, and the human-readable rationale.
///
/// Built fresh on every poll; consumers treat the output list as a full
/// replacement, never an incremental update.
#[derive(Debug, Clone, Serialize)]
pub struct CoinSignal {
    pub pair: String,
    pub last: f64,
    pub high: f64,
    pub low: f64,
    pub buy: f64,
    pub sell: f64,
    pub vol_idr: f64,
    pub range: f64,
    pub pos_in_range: f64,
    pub move_from_low_pct: f64,
    pub move_from_high_pct: f64,
    /// Rounded to whole IDR.
    pub entry: f64,
    /// Rounded to whole IDR.
    pub take_profit: f64,
    /// Rounded to whole IDR.
    pub stop_loss: f64,
    pub reward_pct: f64,
    pub risk_pct: f64,
    pub risk_reward: f64,
    pub signal: Signal,
    pub phase: PricePhase,
    pub pump_status: PumpStatus,
    pub reasons: Vec<String>,
}
