//! 時刻取得 Outbound ポート
//!
//! usecase はこの trait 経由でのみ「現在時刻」を得る。テストでは固定時刻を注入する。

use chrono::{DateTime, Local, Utc};

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の `FixedClock` など。
pub trait Clock: Send + Sync {
    /// 現在時刻をミリ秒（Unix epoch）で返す
    fn now_ms(&self) -> u64;

    fn now_utc(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(self.now_ms() as i64).unwrap_or_default()
    }

    /// ローカルタイムゾーンでの現在時刻（表示用）
    fn now_local(&self) -> DateTime<Local> {
        self.now_utc().with_timezone(&Local)
    }
}
