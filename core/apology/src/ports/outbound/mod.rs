//! Outbound ポート: アプリが外界（履歴の保存先）を使うための trait

pub mod history_repository;

pub use history_repository::HistoryRepository;
