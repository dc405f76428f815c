//! 履歴の読み書き Outbound ポート
//!
//! 履歴は常に全体を上書き保存する（追記はしない）。

use crate::domain::HistoryList;
use common::error::Error;

pub trait HistoryRepository: Send + Sync {
    /// 保存済みの履歴を読む。未保存なら空。壊れたデータの扱いは実装が決める。
    fn load(&self) -> Result<HistoryList, Error>;

    /// 履歴全体を上書き保存する
    fn save(&self, list: &HistoryList) -> Result<(), Error>;
}
