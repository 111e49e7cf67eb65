mod telegram;
mod tracker;

pub use telegram::TelegramNotifier;
pub use tracker::AlertTracker;
