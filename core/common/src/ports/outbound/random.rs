//! 乱数 Outbound ポート
//!
//! 絵文字の選択などランダム性のある処理はこの trait 経由で行い、
//! テストでは決定的な列を返す実装を注入する。

/// 乱数源の抽象
pub trait RandomSource: Send + Sync {
    /// `0..len` の一様乱数。`len == 0` のときは 0 を返す。
    fn next_index(&self, len: usize) -> usize;
}
