//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::HomeDir;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const APP_DIRNAME: &str = "apology";

/// 標準環境変数解決実装
///
/// `home_override` は CLI の -d/--home-dir。指定があれば環境変数より優先する。
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver {
    home_override: Option<PathBuf>,
}

impl StdEnvResolver {
    pub fn new(home_override: Option<PathBuf>) -> Self {
        Self { home_override }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

/// ホーム解決の本体。環境変数の参照を `lookup` に差し替えてテストする。
fn resolve_home_with(
    home_override: Option<&PathBuf>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<HomeDir, Error> {
    if let Some(home) = home_override {
        return Ok(HomeDir::new(home.clone()));
    }
    if let Some(home) = lookup("APOLOGY_HOME") {
        return Ok(HomeDir::new(PathBuf::from(home)));
    }
    let config_base = lookup("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| lookup("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok_or_else(|| Error::env("HOME is not set"))?;
    Ok(HomeDir::new(config_base.join(APP_DIRNAME)))
}

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        resolve_home_with(self.home_override.as_ref(), non_empty_var)
    }

    fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
        if let Some(path) = non_empty_var("APOLOGY_LOG_FILE") {
            return Ok(PathBuf::from(path));
        }
        Ok(self.resolve_dirs()?.log_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_override_wins() {
        let over = PathBuf::from("/cli/home");
        let home = resolve_home_with(Some(&over), lookup_from(&[("APOLOGY_HOME", "/env")])).unwrap();
        assert_eq!(*home, PathBuf::from("/cli/home"));
    }

    #[test]
    fn test_apology_home_env() {
        let home = resolve_home_with(
            None,
            lookup_from(&[("APOLOGY_HOME", "/env/home"), ("HOME", "/u")]),
        )
        .unwrap();
        assert_eq!(*home, PathBuf::from("/env/home"));
    }

    #[test]
    fn test_xdg_then_home_fallback() {
        let home = resolve_home_with(None, lookup_from(&[("XDG_CONFIG_HOME", "/xdg"), ("HOME", "/u")])).unwrap();
        assert_eq!(*home, PathBuf::from("/xdg/apology"));

        let home = resolve_home_with(None, lookup_from(&[("HOME", "/u")])).unwrap();
        assert_eq!(*home, PathBuf::from("/u/.config/apology"));
    }

    #[test]
    fn test_no_home_is_env_error() {
        let err = resolve_home_with(None, lookup_from(&[])).unwrap_err();
        assert!(matches!(err, Error::Env(_)));
    }

    #[test]
    fn test_resolve_dirs_under_override() {
        let resolver = StdEnvResolver::new(Some(PathBuf::from("/h")));
        let dirs = resolver.resolve_dirs().unwrap();
        assert_eq!(dirs.store_dir(), PathBuf::from("/h/data/store"));
    }
}
