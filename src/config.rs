use crate::error::Result;
use config::{Config, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub indodax: IndodaxConfig,
    pub thresholds: SignalThresholds,
    pub scheduler: SchedulerConfig,
    #[serde(skip)]
    pub telegram: Option<TelegramConfig>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct IndodaxConfig {
    pub base_url: String,
    pub requests_per_minute: u32,
}

impl Default for IndodaxConfig {
    fn default() -> Self {
        Self {
            base_url: "https://indodax.com".to_string(),
            requests_per_minute: 120,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SchedulerConfig {
    pub interval_seconds: u64,
    /// How many rows of the result list to print each cycle.
    pub display_top: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 15,
            display_top: 15,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

/// Classifier thresholds. The defaults are the canonical rule set; every
/// value can be overridden from the config file because the cutoffs are
/// tuning parameters, not fixed business rules.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SignalThresholds {
    /// Minimum 24h volume (IDR) for any buy-tier signal.
    pub min_vol_idr: f64,
    /// Minimum 24h volume (IDR) for the watch tier.
    pub watch_min_vol_idr: f64,
    /// Volume floor for strong_buy; buy uses `buy_vol_factor` of this.
    pub strong_vol_idr: f64,
    pub buy_vol_factor: f64,

    pub strong_min_rr: f64,
    pub buy_min_rr: f64,
    pub watch_min_rr: f64,
    pub min_reward_pct: f64,
    pub watch_min_reward_pct: f64,

    /// strong_buy requires price still in the lower part of its range.
    pub strong_max_pos: f64,
    pub buy_max_pos: f64,
    /// Healthy move-from-low band for strong_buy (percent).
    pub healthy_move_min_pct: f64,
    pub healthy_move_max_pct: f64,

    /// Phase bands, all cutoffs inclusive: a price past `run_up_min_pos`
    /// with `run_up_min_move_pct` behind it has already run up; the
    /// rise bands bound the starting_to_rise classification.
    pub run_up_min_pos: f64,
    pub run_up_min_move_pct: f64,
    pub rise_min_pos: f64,
    pub rise_max_pos: f64,
    pub rise_min_move_pct: f64,
    pub rise_max_move_pct: f64,

    /// Pump detection: position-in-range band, move band, volume floor,
    /// and minimum range width relative to price.
    pub pump_pos_min: f64,
    pub pump_pos_max: f64,
    pub pump_move_min_pct: f64,
    pub pump_move_max_pct: f64,
    pub pump_min_vol_idr: f64,
    pub pump_min_range_ratio: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            min_vol_idr: 30_000_000.0,
            watch_min_vol_idr: 20_000_000.0,
            strong_vol_idr: 100_000_000.0,
            buy_vol_factor: 0.7,

            strong_min_rr: 2.0,
            buy_min_rr: 1.6,
            watch_min_rr: 1.3,
            min_reward_pct: 8.0,
            watch_min_reward_pct: 5.0,

            strong_max_pos: 0.6,
            buy_max_pos: 0.72,
            healthy_move_min_pct: 3.0,
            healthy_move_max_pct: 28.0,

            run_up_min_pos: 0.85,
            run_up_min_move_pct: 20.0,
            rise_min_pos: 0.25,
            rise_max_pos: 0.6,
            rise_min_move_pct: 3.0,
            rise_max_move_pct: 20.0,

            pump_pos_min: 0.55,
            pump_pos_max: 0.72,
            pump_move_min_pct: 8.0,
            pump_move_max_pct: 32.0,
            pump_min_vol_idr: 150_000_000.0,
            pump_min_range_ratio: 0.05,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .build()?;

        let mut settings: Settings = config.try_deserialize()?;

        // Telegram is optional: both variables present enables alerting.
        settings.telegram = match (env::var("TELEGRAM_BOT_TOKEN"), env::var("TELEGRAM_CHAT_ID")) {
            (Ok(bot_token), Ok(chat_id)) if !bot_token.is_empty() && !chat_id.is_empty() => {
                Some(TelegramConfig { bot_token, chat_id })
            }
            _ => None,
        };

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_defaults_are_canonical() {
        let t = SignalThresholds::default();
        assert_eq!(t.min_vol_idr, 30_000_000.0);
        assert_eq!(t.strong_vol_idr, 100_000_000.0);
        assert_eq!(t.run_up_min_pos, 0.85);
        assert_eq!(t.run_up_min_move_pct, 20.0);
        assert_eq!(t.rise_min_pos, 0.25);
        assert_eq!(t.rise_max_pos, 0.6);
        assert_eq!(t.pump_pos_max, 0.72);
    }

    #[test]
    fn test_load_yields_usable_settings() {
        // File and env are both optional; load falls back to the defaults
        // and reports failures through the crate error type.
        let settings = Settings::load().expect("settings should load");
        assert!(settings.scheduler.interval_seconds > 0);
        assert!(settings.thresholds.watch_min_vol_idr <= settings.thresholds.min_vol_idr);
    }
}
