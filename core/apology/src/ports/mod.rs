//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: 履歴の永続化 trait（時刻・乱数・キー値ストアは common のポートを使う）

pub mod inbound;
pub mod outbound;
