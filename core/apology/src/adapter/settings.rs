//! 利用者設定の読み込み（adapter 層）

use crate::domain::Settings;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::Path;

/// config/settings.json を読む。ファイルが無ければ既定値。
pub fn load_settings(fs: &dyn FileSystem, path: &Path) -> Result<Settings, Error> {
    if !fs.exists(path) {
        return Ok(Settings::default());
    }
    let content = fs.read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| Error::Json(format!("{}: {}", path.display(), e)))
}
