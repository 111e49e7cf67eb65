use crate::config::TelegramConfig;
use crate::error::{AppError, Result};
use crate::models::{CoinSignal, PumpStatus, Signal};

use chrono::Local;
use serde_json::json;

pub struct TelegramNotifier {
    client: reqwest::Client,
    config: TelegramConfig,
}

impl TelegramNotifier {
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Send a plain-text message through the Bot API.
    pub async fn send_message(&self, message: &str) -> Result<()> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::TelegramApi("empty message".to_string()));
        }

        let url = format!(
            "https://api.telegram.org/bot{}/sendMessage",
            self.config.bot_token
        );

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "chat_id": self.config.chat_id,
                "text": message,
                "disable_web_page_preview": true,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::TelegramApi(format!("Status {status}: {text}")));
        }

        Ok(())
    }

    /// Push an alert for freshly surfaced coins (new strong_buy or pump).
    pub async fn send_signal_alert(&self, coins: &[&CoinSignal]) -> Result<()> {
        if coins.is_empty() {
            return Ok(());
        }

        let mut lines = vec![format!(
            "SINTA scan {} - {} new signal(s)",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            coins.len()
        )];

        for coin in coins {
            let tag = match coin.signal {
                Signal::StrongBuy => "STRONG BUY",
                Signal::Buy => "BUY",
                Signal::Watch => "WATCH",
                Signal::None => continue,
            };
            let pump = if coin.pump_status == PumpStatus::PotentialPump {
                " [PUMP?]"
            } else {
                ""
            };
            lines.push(format!(
                "{} {}{} | last {:.0} | entry {:.0} | TP {:.0} | SL {:.0} | R:R {:.2}",
                tag,
                coin.pair.to_uppercase(),
                pump,
                coin.last,
                coin.entry,
                coin.take_profit,
                coin.stop_loss,
                coin.risk_reward,
            ));
        }

        self.send_message(&lines.join("\n")).await
    }
}
