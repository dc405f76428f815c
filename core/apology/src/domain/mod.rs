//! ドメイン型（スタイル、生成リクエスト、履歴、統計、コマンド）

pub mod command;
pub mod history;
pub mod request;
pub mod settings;
pub mod stats;
pub mod style;

pub use command::{Command, GenerateArgs, OutputTarget, RemoveTarget};
pub use history::{HistoryEntry, HistoryList, HISTORY_LIMIT};
pub use request::GenerationRequest;
pub use settings::Settings;
pub use stats::TextStats;
pub use style::{Style, HEART_EMOJIS};
