//! Ports & Adapters のポート定義
//!
//! - inbound: なし（common はライブラリのためアプリの入り口を持たない）
//! - outbound: アプリが外界（時刻・乱数・ストレージ・ログ等）に依頼するための trait

pub mod outbound;
