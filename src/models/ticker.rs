use serde::{Deserialize, Serialize};

/// One normalized ticker entry from the Indodax `/api/tickers` response.
///
/// All prices are in IDR. `vol_idr` is the 24h traded volume in IDR.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTicker {
    pub pair: String,
    pub last: f64,
    pub high: f64,
    pub low: f64,
    pub buy: f64,
    pub sell: f64,
    pub vol_idr: f64,
}

impl RawTicker {
    /// Only IDR-quoted pairs are scanned.
    pub fn is_idr_pair(&self) -> bool {
        self.pair.ends_with("_idr")
    }
}
