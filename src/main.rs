use sinta::analysis::build_coin_signals;
use sinta::api::IndodaxClient;
use sinta::config::Settings;
use sinta::models::{CoinSignal, PricePhase, PumpStatus, Signal};
use sinta::notification::{AlertTracker, TelegramNotifier};

use std::time::Duration;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sinta=info".parse().unwrap()),
        )
        .init();

    info!("Sinta starting - Indodax swing-signal scanner");

    // Load configuration
    let settings = Settings::load()?;
    info!("Configuration loaded successfully");

    let indodax = IndodaxClient::new(settings.indodax.clone());
    let notifier = settings.telegram.clone().map(TelegramNotifier::new);
    if notifier.is_none() {
        warn!("TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID not set, alerting disabled");
    }

    let mut tracker = AlertTracker::new();
    let interval = Duration::from_secs(settings.scheduler.interval_seconds);

    loop {
        match run_scan(&indodax, &settings).await {
            Ok(coins) => {
                info!("Scan complete: {} pairs with a signal", coins.len());
                print_results(&coins, settings.scheduler.display_top);

                let fresh = tracker.fresh_alerts(&coins);
                if !fresh.is_empty() {
                    info!("{} newly alert-worthy pair(s)", fresh.len());
                    if let Some(notifier) = &notifier {
                        match notifier.send_signal_alert(&fresh).await {
                            Ok(_) => info!("Telegram alert sent"),
                            Err(e) => error!("Telegram alert failed: {}", e),
                        }
                    }
                }
            }
            Err(e) => {
                error!("Scan failed: {}", e);
            }
        }

        tokio::time::sleep(interval).await;
    }
}

async fn run_scan(indodax: &IndodaxClient, settings: &Settings) -> anyhow::Result<Vec<CoinSignal>> {
    let tickers = indodax.get_tickers().await?;
    info!("Fetched {} tickers", tickers.len());

    Ok(build_coin_signals(&tickers, &settings.thresholds))
}

fn print_results(coins: &[CoinSignal], top: usize) {
    if coins.is_empty() {
        return;
    }

    println!("\n================================ SINTA SCAN ================================");
    println!(
        "{:<12} {:<11} {:<16} {:>12} {:>12} {:>12} {:>6}",
        "Pair", "Signal", "Phase", "Entry", "TP", "SL", "R:R"
    );
    println!("{}", "-".repeat(76));
    for coin in coins.iter().take(top) {
        let signal = match coin.signal {
            Signal::StrongBuy => "STRONG BUY",
            Signal::Buy => "BUY",
            Signal::Watch => "WATCH",
            Signal::None => continue,
        };
        let phase = match coin.phase {
            PricePhase::StartingToRise => "starting",
            PricePhase::AlreadyRunUp => "run up",
            PricePhase::Normal => "normal",
        };
        let pump = if coin.pump_status == PumpStatus::PotentialPump {
            " PUMP?"
        } else {
            ""
        };
        println!(
            "{:<12} {:<11} {:<16} {:>12.0} {:>12.0} {:>12.0} {:>6.2}",
            coin.pair,
            signal,
            format!("{phase}{pump}"),
            coin.entry,
            coin.take_profit,
            coin.stop_loss,
            coin.risk_reward,
        );
    }
    println!("============================================================================\n");
}
