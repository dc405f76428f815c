//! apology 共通ライブラリ
//!
//! `apology` コマンドが使うエラー型・ドメイン Newtype・Outbound ポートと
//! その標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Outbound ポート（trait）
pub mod ports;

/// ポートの標準実装
pub mod adapter;
