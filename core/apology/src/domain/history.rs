//! 生成履歴のドメイン型
//!
//! 新しい順に最大 HISTORY_LIMIT 件を保持する。永続化形式は
//! `{"version":1,"entries":[...]}`。version の無い素の配列は version 0 として読む。

use common::error::Error;
use serde::{Deserialize, Serialize};

use super::request::GenerationRequest;
use super::style::Style;

/// 保持する履歴の上限
pub const HISTORY_LIMIT: usize = 10;

/// 現在の永続化スキーマ
pub const SCHEMA_VERSION: u32 = 1;

/// 過去の生成リクエスト 1 件。作成後は変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub name: String,
    pub message: String,
    pub count: u32,
    pub style: Style,
    /// ISO-8601（UTC、ミリ秒付き）
    pub timestamp: String,
    pub id: u64,
}

impl HistoryEntry {
    /// 記録済みリクエストを再生成用のリクエストに戻す（絵文字・日時の指定は保存されていない）
    pub fn to_request(&self, add_emojis: bool, add_timestamp: bool) -> Result<GenerationRequest, Error> {
        GenerationRequest::new(
            &self.name,
            &self.message,
            i64::from(self.count),
            self.style.name(),
            add_emojis,
            add_timestamp,
        )
    }
}

#[derive(Serialize)]
struct StoredHistoryRef<'a> {
    version: u32,
    entries: &'a [HistoryEntry],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredHistory {
    Versioned { version: u32, entries: Vec<HistoryEntry> },
    Legacy(Vec<HistoryEntry>),
}

/// 新しい順・最大 HISTORY_LIMIT 件の履歴
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryList {
    entries: Vec<HistoryEntry>,
}

impl HistoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 先頭から HISTORY_LIMIT 件までを採用する
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(HISTORY_LIMIT);
        Self { entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn find(&self, id: u64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// 次に使う id。時刻（ms）を基本にし、既存の最大 id 以下なら +1 して単調増加を保つ。
    pub fn next_id(&self, now_ms: u64) -> u64 {
        let max = self.entries.iter().map(|e| e.id).max().unwrap_or(0);
        now_ms.max(max.saturating_add(1))
    }

    /// 先頭に追加し、上限を超えた古いものを落とす
    pub fn prepend(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
    }

    /// timestamp が一致するものをすべて取り除く。取り除いた件数を返す。
    pub fn remove_by_timestamp(&mut self, timestamp: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.timestamp != timestamp);
        before - self.entries.len()
    }

    pub fn remove_by_id(&mut self, id: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        before - self.entries.len()
    }

    pub fn to_json(&self) -> Result<String, Error> {
        let stored = StoredHistoryRef {
            version: SCHEMA_VERSION,
            entries: &self.entries,
        };
        Ok(serde_json::to_string(&stored)?)
    }

    /// 永続化された文字列を読む。壊れている・未知の version・形式違いはエラー。
    pub fn from_json(s: &str) -> Result<Self, Error> {
        match serde_json::from_str::<StoredHistory>(s)? {
            StoredHistory::Legacy(entries) => Ok(Self::from_entries(entries)),
            StoredHistory::Versioned { version, entries } if version <= SCHEMA_VERSION => {
                Ok(Self::from_entries(entries))
            }
            StoredHistory::Versioned { version, .. } => Err(Error::Json(format!(
                "unsupported history version {} (supported: <= {})",
                version, SCHEMA_VERSION
            ))),
        }
    }
}
