//! apology 固有のアダプタ

pub mod kv_history_repository;
pub mod logging_history_repository;
pub mod settings;

pub use kv_history_repository::{KvHistoryRepository, HISTORY_KEY};
pub use logging_history_repository::LoggingHistoryRepository;
pub use settings::load_settings;
