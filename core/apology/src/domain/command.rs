//! apology コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、main の match でディスパッチする。

use std::path::PathBuf;

/// generate の出力先
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// 標準出力のみ
    #[default]
    Stdout,
    /// 既定のファイル名（apology-YYYY-MM-DD.txt）でカレントディレクトリに保存
    DefaultFile,
    /// 指定パスに保存
    File(PathBuf),
}

/// generate の引数。count / style / emojis / timestamp が None なら設定の既定値を使う。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerateArgs {
    pub name: String,
    pub message: String,
    pub count: Option<i64>,
    pub style: Option<String>,
    pub emojis: Option<bool>,
    pub timestamp: Option<bool>,
    pub output: OutputTarget,
    pub stats: bool,
    /// false なら履歴に記録しない
    pub record: bool,
}

/// 履歴削除の対象
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveTarget {
    Id(u64),
    /// timestamp 完全一致（同じ timestamp のものはすべて消える）
    Timestamp(String),
}

/// apology のサブコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Generate(GenerateArgs),
    /// 名前を番号付きで count 回並べる（簡易版）
    Repeat { name: String, count: i64 },
    Styles,
    HistoryList,
    HistoryReplay {
        id: u64,
        emojis: Option<bool>,
        timestamp: Option<bool>,
    },
    HistoryRemove(RemoveTarget),
}

impl Command {
    /// ログ用の短い名前
    pub fn name(&self) -> &'static str {
        match self {
            Command::Generate(_) => "generate",
            Command::Repeat { .. } => "repeat",
            Command::Styles => "styles",
            Command::HistoryList => "history-list",
            Command::HistoryReplay { .. } => "history-replay",
            Command::HistoryRemove(_) => "history-rm",
        }
    }
}
