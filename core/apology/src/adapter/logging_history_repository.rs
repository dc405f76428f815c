//! 履歴の読み書きをログに記録する HistoryRepository のラッパ

use crate::domain::HistoryList;
use crate::ports::outbound::HistoryRepository;
use common::error::Error;
use common::ports::outbound::{Log, LogRecord};
use std::sync::Arc;

pub struct LoggingHistoryRepository {
    inner: Arc<dyn HistoryRepository>,
    log: Arc<dyn Log>,
}

impl LoggingHistoryRepository {
    pub fn new(inner: Arc<dyn HistoryRepository>, log: Arc<dyn Log>) -> Self {
        Self { inner, log }
    }

    fn emit(&self, record: LogRecord) {
        let _ = self.log.log(&record.layer("adapter").kind("history"));
    }
}

impl HistoryRepository for LoggingHistoryRepository {
    fn load(&self) -> Result<HistoryList, Error> {
        match self.inner.load() {
            Ok(list) => {
                self.emit(
                    LogRecord::info("history read")
                        .field("operation", "load")
                        .field("count", list.len()),
                );
                Ok(list)
            }
            Err(e) => {
                self.emit(
                    LogRecord::warn("history read failed")
                        .field("operation", "load")
                        .field("error", e.to_string()),
                );
                Err(e)
            }
        }
    }

    fn save(&self, list: &HistoryList) -> Result<(), Error> {
        match self.inner.save(list) {
            Ok(()) => {
                self.emit(
                    LogRecord::info("history write")
                        .field("operation", "save")
                        .field("count", list.len()),
                );
                Ok(())
            }
            Err(e) => {
                self.emit(
                    LogRecord::error("history write failed")
                        .field("operation", "save")
                        .field("error", e.to_string()),
                );
                Err(e)
            }
        }
    }
}
