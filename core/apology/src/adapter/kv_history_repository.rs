//! KeyValueStore の 1 キーに履歴を JSON で保存する HistoryRepository

use crate::domain::HistoryList;
use crate::ports::outbound::HistoryRepository;
use common::error::Error;
use common::ports::outbound::KeyValueStore;
use std::sync::Arc;

/// 履歴を保存するキー
pub const HISTORY_KEY: &str = "apologyHistory";

pub struct KvHistoryRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvHistoryRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl HistoryRepository for KvHistoryRepository {
    /// 読み込み失敗は Persistence、値が壊れていれば Json エラー
    fn load(&self) -> Result<HistoryList, Error> {
        match self.store.get(HISTORY_KEY)? {
            None => Ok(HistoryList::new()),
            Some(s) => HistoryList::from_json(&s),
        }
    }

    fn save(&self, list: &HistoryList) -> Result<(), Error> {
        let json = list.to_json()?;
        self.store.set(HISTORY_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HistoryEntry, Style};
    use common::adapter::MemoryKeyValueStore;

    #[test]
    fn test_missing_key_is_empty() {
        let repo = KvHistoryRepository::new(Arc::new(MemoryKeyValueStore::new()));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = Arc::new(MemoryKeyValueStore::new());
        let repo = KvHistoryRepository::new(store.clone());
        let list = HistoryList::from_entries(vec![HistoryEntry {
            name: "Alex".to_string(),
            message: "Sorry!".to_string(),
            count: 3,
            style: Style::Sincere,
            timestamp: "2026-10-19T12:00:00.000Z".to_string(),
            id: 1,
        }]);
        repo.save(&list).unwrap();
        assert!(store.get(HISTORY_KEY).unwrap().unwrap().starts_with("{\"version\":1"));
        assert_eq!(repo.load().unwrap(), list);
    }

    #[test]
    fn test_corrupt_value_is_error() {
        let repo = KvHistoryRepository::new(Arc::new(MemoryKeyValueStore::with_value(HISTORY_KEY, "{oops")));
        assert!(matches!(repo.load(), Err(Error::Json(_))));
    }
}
