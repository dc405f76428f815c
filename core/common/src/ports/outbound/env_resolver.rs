//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ・ログファイルを環境変数から解決する。
//! 環境変数に触れるのはこの trait の実装だけ。

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. CLI の -d/--home-dir（実装に渡された明示指定）
    /// 2. APOLOGY_HOME
    /// 3. $XDG_CONFIG_HOME/apology
    /// 4. $HOME/.config/apology
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// config / data / state ディレクトリ（すべてホーム配下）
    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        let home = self.resolve_home_dir()?;
        Ok(Dirs::under_home(&home))
    }

    /// ログファイルのパス。APOLOGY_LOG_FILE があればそれ、なければ Dirs::log_file()。
    fn resolve_log_file_path(&self) -> Result<PathBuf, Error>;
}
