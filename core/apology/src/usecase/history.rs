//! 履歴ストア（メモリ上の一覧 + 永続化）
//!
//! 起動時に一度読み込み、record / remove のたびに全体を上書き保存する。
//! 保存に失敗してもメモリ上の一覧は更新済みのまま Persistence エラーを返す。

use chrono::{DateTime, SecondsFormat, Utc};
use common::error::Error;
use std::sync::Arc;

use crate::domain::{GenerationRequest, HistoryEntry, HistoryList};
use crate::ports::outbound::HistoryRepository;

pub struct HistoryStore {
    repo: Arc<dyn HistoryRepository>,
    list: HistoryList,
}

/// 読めない・壊れている場合は空の一覧
fn load_or_empty(repo: &dyn HistoryRepository) -> HistoryList {
    repo.load().unwrap_or_default()
}

impl HistoryStore {
    /// 保存済みの履歴を読み込んで開く
    pub fn open(repo: Arc<dyn HistoryRepository>) -> Self {
        let mut store = Self {
            repo,
            list: HistoryList::new(),
        };
        store.load();
        store
    }

    /// 保存先から読み直す（失敗しない）
    pub fn load(&mut self) -> &HistoryList {
        self.list = load_or_empty(self.repo.as_ref());
        &self.list
    }

    pub fn list(&self) -> &HistoryList {
        &self.list
    }

    /// 新しい履歴を先頭に追加して保存し、作成したエントリを返す。
    ///
    /// 保存に失敗した場合もエントリは `list().first()` に残っている。
    pub fn record(&mut self, request: &GenerationRequest, now: DateTime<Utc>) -> Result<HistoryEntry, Error> {
        let now_ms = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let entry = HistoryEntry {
            name: request.name().to_string(),
            message: request.message().to_string(),
            count: request.count(),
            style: request.style(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            id: self.list.next_id(now_ms),
        };
        self.list.prepend(entry.clone());
        self.repo.save(&self.list)?;
        Ok(entry)
    }

    /// timestamp が完全一致するエントリをすべて削除して保存する
    pub fn remove(&mut self, timestamp: &str) -> Result<HistoryList, Error> {
        self.list.remove_by_timestamp(timestamp);
        self.repo.save(&self.list)?;
        Ok(self.list.clone())
    }

    pub fn remove_by_id(&mut self, id: u64) -> Result<HistoryList, Error> {
        self.list.remove_by_id(id);
        self.repo.save(&self.list)?;
        Ok(self.list.clone())
    }
}
