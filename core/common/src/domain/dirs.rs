//! 実行時ディレクトリ（APOLOGY_HOME / XDG 解決結果）
//!
//! EnvResolver::resolve_dirs() で取得し、ストア・設定・ログのパス計算に使う。

use std::path::{Path, PathBuf};

const STORE_SUBDIR: &str = "store";
const SETTINGS_FILENAME: &str = "settings.json";
const LOG_FILENAME: &str = "apology.log.jsonl";

/// 解決済みの config / data / state ディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl Dirs {
    /// ホーム直下に config / data / state を置く
    pub fn under_home(home: &Path) -> Self {
        Self {
            config_dir: home.join("config"),
            data_dir: home.join("data"),
            state_dir: home.join("state"),
        }
    }

    /// キー・値ストアの格納ディレクトリ（data/store）
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join(STORE_SUBDIR)
    }

    /// 設定ファイル（config/settings.json）
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILENAME)
    }

    /// 既定のログファイル（state/apology.log.jsonl）
    pub fn log_file(&self) -> PathBuf {
        self.state_dir.join(LOG_FILENAME)
    }
}
