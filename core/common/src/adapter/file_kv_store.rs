//! ファイルに保存する KeyValueStore 実装
//!
//! 1 キー = 1 ファイル（`<dir>/<key>.json`）。書き込みは一時ファイルへ書いてから rename し、
//! 途中で失敗しても既存の値を壊さない。

use crate::domain::StoreKey;
use crate::error::Error;
use crate::ports::outbound::{FileSystem, KeyValueStore};
use std::path::PathBuf;
use std::sync::Arc;

pub struct FileKeyValueStore {
    fs: Arc<dyn FileSystem>,
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(fs: Arc<dyn FileSystem>, dir: impl Into<PathBuf>) -> Self {
        Self { fs, dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, Error> {
        let key = StoreKey::parse(key)
            .ok_or_else(|| Error::persistence(format!("invalid store key: {:?}", key)))?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

fn persistence(e: Error) -> Error {
    match e {
        Error::Persistence(_) => e,
        other => Error::persistence(other.to_string()),
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.path_for(key)?;
        match self.fs.metadata(&path) {
            Ok(m) if m.is_file() => {}
            Ok(_) => {
                return Err(Error::persistence(format!(
                    "'{}' is not a regular file",
                    path.display()
                )))
            }
            Err(_) => return Ok(None),
        }
        self.fs.read_to_string(&path).map(Some).map_err(persistence)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.path_for(key)?;
        self.fs.create_dir_all(&self.dir).map_err(persistence)?;
        let tmp = path.with_extension("json.tmp");
        self.fs.write(&tmp, value).map_err(persistence)?;
        self.fs.rename(&tmp, &path).map_err(persistence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StdFileSystem;
    use tempfile::tempdir;

    fn store(dir: &std::path::Path) -> FileKeyValueStore {
        FileKeyValueStore::new(Arc::new(StdFileSystem), dir.join("store"))
    }

    #[test]
    fn test_get_missing_is_none() {
        let dir = tempdir().unwrap();
        assert_eq!(store(dir.path()).get("apologyHistory").unwrap(), None);
    }

    #[test]
    fn test_set_creates_dir_and_overwrites() {
        let dir = tempdir().unwrap();
        let s = store(dir.path());
        s.set("apologyHistory", "[1]").unwrap();
        s.set("apologyHistory", "[2]").unwrap();
        assert_eq!(s.get("apologyHistory").unwrap().as_deref(), Some("[2]"));
        assert!(dir.path().join("store/apologyHistory.json").is_file());
        assert!(!dir.path().join("store/apologyHistory.json.tmp").exists());
    }

    #[test]
    fn test_directory_in_place_of_value_is_error() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("store/k.json")).unwrap();
        let err = store(dir.path()).get("k").unwrap_err();
        assert!(matches!(err, Error::Persistence(_)));
    }

    #[test]
    fn test_invalid_key_is_persistence_error() {
        let dir = tempdir().unwrap();
        let err = store(dir.path()).set("../escape", "x").unwrap_err();
        assert!(matches!(err, Error::Persistence(_)));
    }

    #[test]
    fn test_unwritable_dir_is_persistence_error() {
        let dir = tempdir().unwrap();
        // store ディレクトリの位置に通常ファイルを置いて作成を失敗させる
        std::fs::write(dir.path().join("store"), "not a dir").unwrap();
        let err = store(dir.path()).set("k", "v").unwrap_err();
        assert!(matches!(err, Error::Persistence(_)));
    }
}
