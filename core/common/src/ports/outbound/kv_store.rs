//! キー・値ストア Outbound ポート
//!
//! 永続化の唯一の窓口。値は文字列（JSON）で、書き込みは常に全体上書き。

use crate::error::Error;

/// キー・値ストア抽象
///
/// 実装は `common::adapter::FileKeyValueStore`（ファイル）や `MemoryKeyValueStore`（テスト用）。
/// 読み書きの失敗は `Error::Persistence` で返す。
pub trait KeyValueStore: Send + Sync {
    /// 値を取得する。キーが存在しなければ `Ok(None)`。
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// 値を上書きで保存する
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}
